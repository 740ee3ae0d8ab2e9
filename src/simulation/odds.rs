use super::tally::Tally;
use serde::Serialize;

/// A seat's simulated equity as percentages. Callers guarantee trials >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Odds {
    pub win_rate: f64,
    pub tie_rate: f64,
    pub lose_rate: f64,
}

impl Odds {
    /// equity of one served seat
    pub fn from_tally(tally: &Tally, trials: usize) -> Self {
        let win_rate = tally.wins() as f64 * 100. / trials as f64;
        let tie_rate = tally.ties() as f64 * 100. / trials as f64;
        Self {
            win_rate,
            tie_rate,
            lose_rate: (100. - win_rate - tie_rate).max(0.),
        }
    }

    /// equity of the average unknown seat, counters pooled across seats
    pub fn from_average(tallies: &[Tally], trials: usize) -> Self {
        let factor = 100. / trials as f64 / tallies.len() as f64;
        let win_rate = tallies.iter().map(|t| t.wins()).sum::<u32>() as f64 * factor;
        let tie_rate = tallies.iter().map(|t| t.ties()).sum::<u32>() as f64 * factor;
        Self {
            win_rate,
            tie_rate,
            lose_rate: (100. - win_rate - tie_rate).max(0.),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(wins: u32, ties: u32) -> Tally {
        let mut t = Tally::default();
        (0..wins).for_each(|_| t.win());
        (0..ties).for_each(|_| t.tie());
        t
    }

    #[test]
    fn percentages_from_counters() {
        let odds = Odds::from_tally(&tally(25, 5), 100);
        assert_eq!(odds.win_rate, 25.);
        assert_eq!(odds.tie_rate, 5.);
        assert_eq!(odds.lose_rate, 70.);
    }

    #[test]
    fn percentages_sum_to_100() {
        let odds = Odds::from_tally(&tally(333, 77), 1000);
        assert!((odds.win_rate + odds.tie_rate + odds.lose_rate - 100.).abs() < 1e-9);
    }

    #[test]
    fn averaged_over_unknown_seats() {
        let tallies = [tally(10, 2), tally(30, 6)];
        let odds = Odds::from_average(&tallies, 100);
        assert_eq!(odds.win_rate, 20.);
        assert_eq!(odds.tie_rate, 4.);
        assert_eq!(odds.lose_rate, 76.);
    }
}
