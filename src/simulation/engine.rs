use super::sampler;
use super::tally::Tally;
use crate::cards::{Board, Card, Hole};
use crate::error::{EquityError, EquityResult};
use crate::evaluation::{Evaluator, Score};
use crate::lookup::Lookup;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Monte Carlo equity simulation over a shared lookup table.
///
/// Each trial draws one duplicate-free sample from the remaining deck to
/// complete the board and every unknown seat's hole cards, then evaluates
/// all seats against the shared 5 community cards. Work per request is
/// O(trials x seats) evaluator calls, each O(1).
pub struct Engine<'a> {
    evaluator: Evaluator<'a>,
    rng: SmallRng,
}

impl<'a> From<&'a Lookup> for Engine<'a> {
    fn from(lookup: &'a Lookup) -> Self {
        Self {
            evaluator: Evaluator::from(lookup),
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl<'a> Engine<'a> {
    /// deterministic engine for reproducible simulations
    pub fn seeded(lookup: &'a Lookup, seed: u64) -> Self {
        Self {
            evaluator: Evaluator::from(lookup),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// run `trials` simulations and return per-seat counters, known seats
    /// first in input order, then the `unknown` sampled seats
    pub fn calculate(
        &mut self,
        trials: usize,
        board: &Board,
        known: &[Hole],
        unknown: usize,
    ) -> EquityResult<Vec<Tally>> {
        let seats = known.len() + unknown;
        if seats == 0 {
            return Err(EquityError::InvalidRequest(
                "At least one seat is required".to_string(),
            ));
        }
        if let Some(card) = crate::cards::duplicate(
            std::iter::empty()
                .chain(board.cards().iter().copied())
                .chain(known.iter().flat_map(|hole| hole.cards())),
        ) {
            return Err(EquityError::InvalidRequest(format!(
                "Duplicate cards detected: {}",
                card
            )));
        }
        let pool = sampler::remaining(board, known);
        let missing = board.missing();
        let draws = missing + unknown * 2;
        if pool.len() < draws {
            return Err(EquityError::Sampling {
                need: draws,
                have: pool.len(),
            });
        }
        let mut tallies = vec![Tally::default(); seats];
        let mut scores = Vec::<Score>::with_capacity(seats);
        let mut selection = [Card::from(0u8); 7];
        selection[..board.size()].copy_from_slice(board.cards());
        for _ in 0..trials {
            let sample = sampler::draw(&mut self.rng, &pool, draws)?;
            selection[board.size()..5].copy_from_slice(&sample[..missing]);
            scores.clear();
            for hole in known {
                selection[5..].copy_from_slice(&hole.cards());
                scores.push(self.evaluator.best_of_7(&selection)?);
            }
            for seat in 0..unknown {
                selection[5] = sample[missing + seat * 2];
                selection[6] = sample[missing + seat * 2 + 1];
                scores.push(self.evaluator.best_of_7(&selection)?);
            }
            Self::credit(&scores, &mut tallies);
        }
        Ok(tallies)
    }

    /// single winner takes a win; every seat tied for best takes a tie
    fn credit(scores: &[Score], tallies: &mut [Tally]) {
        let best = scores.iter().max().copied().expect("at least one seat");
        let winners = scores.iter().filter(|score| **score == best).count();
        for (seat, score) in scores.iter().enumerate() {
            if *score == best {
                match winners {
                    1 => tallies[seat].win(),
                    _ => tallies[seat].tie(),
                }
            }
        }
    }
}
