use super::card::Card;
use crate::error::EquityError;

/// The 0-5 community cards shared by every seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// community slots still to be dealt
    pub fn missing(&self) -> usize {
        5 - self.0.len()
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = EquityError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match cards.len() {
            0..=5 => Ok(Self(cards)),
            _ => Err(EquityError::InvalidRequest(
                "Board cannot have more than 5 cards".to_string(),
            )),
        }
    }
}

/// str isomorphism over comma-separated notation, empty for preflop
impl TryFrom<&str> for Board {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
