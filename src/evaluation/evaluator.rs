use super::score::Score;
use crate::cards::Card;
use crate::error::{EquityError, EquityResult};
use crate::lookup::Lookup;

/// The 20 single-card swaps that walk every 5-card subset of a sorted
/// 7-card selection. Each step is (slot, source): the card at `slot` of the
/// working 5-card hand is replaced by the card at `source` of the sorted
/// selection. Starting from the middle subset {2,3,4,5,6}, the walk visits
/// all 21 subsets exactly once, and after every step the working hand is
/// still sorted ascending, which the position-dependent key contributions
/// require. Derived by searching for a Hamiltonian path over the 21 subsets
/// under those two constraints; `walks_every_subset_sorted` re-checks both
/// by brute force.
pub(crate) const SUBSTITUTIONS: [(usize, usize); 20] = [
    (0, 0),
    (0, 1),
    (1, 2),
    (0, 0),
    (1, 1),
    (2, 2),
    (2, 3),
    (1, 2),
    (0, 1),
    (3, 4),
    (0, 0),
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (4, 5),
    (3, 4),
    (2, 3),
    (1, 2),
    (0, 1),
];

/// O(1) hand scoring over the loaded perfect-hash tables.
///
/// The key of a sorted 5-card hand is the sum of per-(slot, card)
/// contributions, so replacing one card shifts the key by a delta without
/// recomputing the sum. Seven-card evaluation exploits that to score all
/// 21 subsets with one base key and 20 incremental updates.
pub struct Evaluator<'a>(&'a Lookup);

impl<'a> From<&'a Lookup> for Evaluator<'a> {
    fn from(lookup: &'a Lookup) -> Self {
        Self(lookup)
    }
}

impl Evaluator<'_> {
    /// score a 5-card hand, canonicalizing input order first
    pub fn score5(&self, cards: [Card; 5]) -> EquityResult<Score> {
        let mut codes = cards.map(u8::from);
        codes.sort_unstable();
        self.0.score(self.key(&codes)?).map(Score::from)
    }

    /// best 5-of-7 score; requires exactly 7 distinct cards
    pub fn best_of_7(&self, selection: &[Card]) -> EquityResult<Score> {
        match <[Card; 7]>::try_from(selection) {
            Err(_) => Err(EquityError::Selection(selection.len())),
            Ok(cards) => {
                let mut codes = cards.map(u8::from);
                codes.sort_unstable();
                let mut hand = [codes[2], codes[3], codes[4], codes[5], codes[6]];
                let mut key = self.key(&hand)?;
                let mut best = self.0.score(key)?;
                for (slot, source) in SUBSTITUTIONS {
                    key += self.0.contribution(slot, codes[source])?;
                    key -= self.0.contribution(slot, hand[slot])?;
                    hand[slot] = codes[source];
                    best = best.max(self.0.score(key)?);
                }
                Ok(Score::from(best))
            }
        }
    }

    /// additive perfect-hash key of a sorted 5-card hand
    fn key(&self, hand: &[u8; 5]) -> EquityResult<i32> {
        let mut key = 0i32;
        for (slot, card) in hand.iter().enumerate() {
            key += self.0.contribution(slot, *card)?;
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_every_subset_sorted() {
        let mut state = [2usize, 3, 4, 5, 6];
        let mut seen = std::collections::HashSet::new();
        seen.insert(state);
        for (slot, source) in SUBSTITUTIONS {
            state[slot] = source;
            assert!(state.windows(2).all(|w| w[0] < w[1]), "unsorted: {:?}", state);
            assert!(seen.insert(state), "revisited: {:?}", state);
        }
        assert_eq!(seen.len(), 21);
    }

    #[test]
    fn rejects_non_seven_selection() {
        let lookup = Lookup::synthetic(0);
        let evaluator = Evaluator::from(&lookup);
        let cards = (0..6u8).map(Card::from).collect::<Vec<_>>();
        assert!(matches!(
            evaluator.best_of_7(&cards),
            Err(EquityError::Selection(6))
        ));
        assert!(matches!(
            evaluator.best_of_7(&[]),
            Err(EquityError::Selection(0))
        ));
    }

    #[test]
    fn score5_ignores_input_order() {
        let lookup = Lookup::synthetic(1);
        let evaluator = Evaluator::from(&lookup);
        let cards = [3u8, 17, 25, 40, 51].map(Card::from);
        let mut shuffled = cards;
        shuffled.reverse();
        shuffled.swap(0, 2);
        assert_eq!(
            evaluator.score5(cards).unwrap(),
            evaluator.score5(shuffled).unwrap()
        );
    }

    /// Against synthetic tables whose score table is the identity over keys,
    /// the incremental walk must reproduce the brute-force maximum over all
    /// 21 five-card subsets. A walk that ever visited a non-sorted
    /// assignment or skipped a subset would disagree with the reference.
    #[test]
    fn matches_brute_force_over_subsets() {
        use rand::seq::SliceRandom;
        use rand::SeedableRng;
        let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
        for seed in 0..20 {
            let lookup = Lookup::synthetic(seed);
            let evaluator = Evaluator::from(&lookup);
            let mut deck = (0..52u8).collect::<Vec<u8>>();
            deck.shuffle(&mut rng);
            let selection = deck[..7].iter().map(|&c| Card::from(c)).collect::<Vec<_>>();
            let mut reference = None;
            for i in 0..7 {
                for j in (i + 1)..7 {
                    let subset = (0..7)
                        .filter(|&k| k != i && k != j)
                        .map(|k| selection[k])
                        .collect::<Vec<Card>>();
                    let score = evaluator
                        .score5(<[Card; 5]>::try_from(subset).unwrap())
                        .unwrap();
                    reference = reference.max(Some(score));
                }
            }
            assert_eq!(evaluator.best_of_7(&selection).ok(), reference);
        }
    }
}
