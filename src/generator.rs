//! Random hand generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{DEALER_RANKS, PLAYER_RANKS};
use crate::hand::Deal;

/// A source of deals, one per round.
pub trait DealSource {
    /// Produces the cards for the next round.
    fn deal(&mut self) -> Deal;
}

/// Deals uniformly random, independent cards from a seeded generator.
///
/// Two generators created with the same seed produce the same deals.
#[derive(Debug, Clone)]
pub struct HandGenerator {
    rng: ChaCha8Rng,
}

impl HandGenerator {
    /// Creates a new generator with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::{DealSource, HandGenerator};
    ///
    /// let mut a = HandGenerator::new(42);
    /// let mut b = HandGenerator::new(42);
    /// assert_eq!(a.deal(), b.deal());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DealSource for HandGenerator {
    fn deal(&mut self) -> Deal {
        let card1 = self.rng.random_range(PLAYER_RANKS);
        let card2 = self.rng.random_range(PLAYER_RANKS);
        let dealer_card = self.rng.random_range(DEALER_RANKS);
        log::trace!("dealt {card1} and {card2} against {dealer_card}");
        Deal::new(card1, card2, dealer_card)
    }
}

impl<S: DealSource + ?Sized> DealSource for &mut S {
    fn deal(&mut self) -> Deal {
        (**self).deal()
    }
}
