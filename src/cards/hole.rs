use super::card::Card;
use crate::error::EquityError;

/// A seat's two private cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        Self([a, b])
    }
}

/// str isomorphism over comma-separated notation, e.g. "As,Kh"
impl TryFrom<&str> for Hole {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        match cards.as_slice() {
            [a, b] if a != b => Ok(Self([*a, *b])),
            [a, b] if a == b => Err(EquityError::InvalidRequest(format!(
                "Duplicate cards detected: {}",
                a
            ))),
            _ => Err(EquityError::InvalidRequest(
                "Need exactly 2 hole cards".to_string(),
            )),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}
