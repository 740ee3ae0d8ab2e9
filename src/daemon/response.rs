use crate::error::EquityError;
use crate::simulation::Odds;
use serde::Serialize;

/// One structured response line: equity percentages on success, a single
/// error message on any per-request failure.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success {
        win_rate: f64,
        tie_rate: f64,
        lose_rate: f64,
        simulations_completed: usize,
    },
    Failure {
        error: String,
    },
}

impl From<(Odds, usize)> for Response {
    fn from((odds, trials): (Odds, usize)) -> Self {
        Self::Success {
            win_rate: odds.win_rate,
            tie_rate: odds.tie_rate,
            lose_rate: odds.lose_rate,
            simulations_completed: trials,
        }
    }
}

impl From<EquityError> for Response {
    fn from(error: EquityError) -> Self {
        Self::Failure {
            error: error.to_string(),
        }
    }
}
