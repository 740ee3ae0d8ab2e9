/// One seat's win/tie counters across a simulation.
///
/// A seat is credited at most once per trial: a win when it alone holds the
/// best score, a tie when it shares it. Tie credit is all-or-nothing, not
/// fractional equity-splitting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    wins: u32,
    ties: u32,
}

impl Tally {
    pub fn win(&mut self) {
        self.wins += 1;
    }
    pub fn tie(&mut self) {
        self.ties += 1;
    }
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn ties(&self) -> u32 {
        self.ties
    }
}
