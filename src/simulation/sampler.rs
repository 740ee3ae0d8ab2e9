use crate::cards::{Board, Card, Hole};
use crate::error::{EquityError, EquityResult};
use rand::Rng;

/// the cards committed to no board slot and no known hand
pub fn remaining(board: &Board, known: &[Hole]) -> Vec<Card> {
    let mut used = 0u64;
    for card in board.cards() {
        used |= u64::from(*card);
    }
    for hole in known {
        for card in hole.cards() {
            used |= u64::from(card);
        }
    }
    (0..52u8)
        .map(Card::from)
        .filter(|card| used & u64::from(*card) == 0)
        .collect()
}

/// one trial's worth of distinct cards, drawn uniformly over
/// count-permutations of the pool
pub fn draw<R: Rng>(rng: &mut R, pool: &[Card], count: usize) -> EquityResult<Vec<Card>> {
    if pool.len() < count {
        return Err(EquityError::Sampling {
            need: count,
            have: pool.len(),
        });
    }
    Ok(rand::seq::index::sample(rng, pool.len(), count)
        .into_iter()
        .map(|i| pool[i])
        .collect())
}
