use super::rank::Rank;
use super::suit::Suit;
use crate::error::EquityError;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// the dense code the lookup tables are built over
/// Ts
/// 8 + 13 * 3 = 47
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.rank) + u8::from(c.suit) * 13
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52);
        Self {
            rank: Rank::from(n % 13),
            suit: Suit::from(n / 13),
        }
    }
}

/// u64 injection
/// one bit per card, for duplicate detection over mixed collections
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism over the 2-character rank-then-suit notation
impl TryFrom<&str> for Card {
    type Error = EquityError;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Ok(Self {
                rank: Rank::try_from(rank).map_err(|_| EquityError::InvalidCard(s.to_string()))?,
                suit: Suit::try_from(suit).map_err(|_| EquityError::InvalidCard(s.to_string()))?,
            }),
            _ => Err(EquityError::InvalidCard(s.to_string())),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// first card that appears twice, if any
pub fn duplicate<I>(cards: I) -> Option<Card>
where
    I: IntoIterator<Item = Card>,
{
    let mut seen = 0u64;
    for card in cards {
        let bit = u64::from(card);
        if seen & bit != 0 {
            return Some(card);
        }
        seen |= bit;
    }
    None
}
