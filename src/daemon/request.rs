use crate::cards::{duplicate, Board, Hole};
use crate::error::EquityError;
use crate::{MAX_OPPONENTS, MAX_TRIALS, MIN_OPPONENTS, MIN_TRIALS};

/// One line of the persistent command protocol.
#[derive(Debug, PartialEq)]
pub enum Request {
    Calculate(Calculation),
    Exit,
}

/// A validated CALC command: board, one known hole, sampled opponents,
/// trial count. Duplicate-free across board and hole by construction.
#[derive(Debug, PartialEq)]
pub struct Calculation {
    pub board: Board,
    pub hole: Hole,
    pub opponents: usize,
    pub trials: usize,
}

impl TryFrom<&str> for Request {
    type Error = EquityError;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let line = line.trim();
        match line {
            "EXIT" => Ok(Self::Exit),
            _ => match line.strip_prefix("CALC ") {
                Some(params) => Calculation::try_from(params).map(Self::Calculate),
                None => Err(EquityError::InvalidRequest(format!(
                    "Unknown command: {}",
                    line
                ))),
            },
        }
    }
}

/// field order and messages follow the wire contract:
/// CALC board|hole|opponents|iterations
impl TryFrom<&str> for Calculation {
    type Error = EquityError;
    fn try_from(params: &str) -> Result<Self, Self::Error> {
        let parts = params.split('|').collect::<Vec<&str>>();
        let [board, hole, opponents, trials] = parts.as_slice() else {
            return Err(EquityError::InvalidRequest(
                "Invalid command format. Expected: CALC board|hole|opponents|iterations"
                    .to_string(),
            ));
        };
        let opponents = opponents
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (MIN_OPPONENTS..=MAX_OPPONENTS).contains(n))
            .ok_or_else(|| {
                EquityError::InvalidRequest(format!(
                    "Opponents must be {}-{}",
                    MIN_OPPONENTS, MAX_OPPONENTS
                ))
            })?;
        let trials = trials
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (MIN_TRIALS..=MAX_TRIALS).contains(n))
            .ok_or_else(|| {
                EquityError::InvalidRequest(format!(
                    "Iterations must be {}-{}",
                    MIN_TRIALS, MAX_TRIALS
                ))
            })?;
        let board = Board::try_from(*board)?;
        let hole = Hole::try_from(*hole)?;
        match duplicate(
            std::iter::empty()
                .chain(board.cards().iter().copied())
                .chain(hole.cards()),
        ) {
            Some(_) => Err(EquityError::InvalidRequest(
                "Duplicate cards detected".to_string(),
            )),
            None => Ok(Self {
                board,
                hole,
                opponents,
                trials,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exit() {
        assert_eq!(Request::try_from("EXIT").unwrap(), Request::Exit);
        assert_eq!(Request::try_from("  EXIT \r").unwrap(), Request::Exit);
    }

    #[test]
    fn parses_preflop_calc() {
        let Request::Calculate(calc) = Request::try_from("CALC |As,Kh|2|10000").unwrap() else {
            panic!("expected calculation");
        };
        assert_eq!(calc.board.size(), 0);
        assert_eq!(calc.opponents, 2);
        assert_eq!(calc.trials, 10000);
    }

    #[test]
    fn parses_flop_calc() {
        let Request::Calculate(calc) =
            Request::try_from("CALC Jh,Ts,9c|As,Kh|3|50000").unwrap()
        else {
            panic!("expected calculation");
        };
        assert_eq!(calc.board.size(), 3);
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(Request::try_from("PING").is_err());
        assert!(Request::try_from("").is_err());
        assert!(Request::try_from("CALC").is_err());
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(Request::try_from("CALC |As,Kh|2").is_err());
        assert!(Request::try_from("CALC |As,Kh|2|100|extra").is_err());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(Request::try_from("CALC |As,Kh|0|10000").is_err());
        assert!(Request::try_from("CALC |As,Kh|9|10000").is_err());
        assert!(Request::try_from("CALC |As,Kh|x|10000").is_err());
        assert!(Request::try_from("CALC |As,Kh|2|99").is_err());
        assert!(Request::try_from("CALC |As,Kh|2|1000001").is_err());
    }

    #[test]
    fn rejects_duplicates_across_fields() {
        assert!(Request::try_from("CALC As|As,Kh|1|10000").is_err());
    }

    #[test]
    fn rejects_bad_cards() {
        assert!(Request::try_from("CALC ZZ|As,Kh|1|10000").is_err());
        assert!(Request::try_from("CALC |As|1|10000").is_err());
        assert!(Request::try_from("CALC 2c,3c,4c,5c,6c,7c|As,Kh|1|10000").is_err());
    }
}
