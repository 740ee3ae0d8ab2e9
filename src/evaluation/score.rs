/// A hand's strength as the perfect-hash tables rank it.
///
/// Opaque: the only defined operation is comparison, higher wins and ties
/// compare equal. Produced exclusively by the evaluator, so a Score can
/// never be confused with a raw table value or a sentinel.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(i32);

impl From<i32> for Score {
    fn from(n: i32) -> Self {
        Self(n)
    }
}
impl From<Score> for i32 {
    fn from(s: Score) -> Self {
        s.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
