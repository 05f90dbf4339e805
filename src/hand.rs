//! Dealt cards and the hand state the resolver consumes.

use crate::action::Action;
use crate::card::ACE;
use crate::strategy::{self, Category};

/// The raw cards of one round: two player cards and the dealer's up-card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deal {
    /// First player card, `1..=10` (1 = Ace).
    pub card1: u8,
    /// Second player card, `1..=10` (1 = Ace).
    pub card2: u8,
    /// Dealer's visible card, `2..=11` (11 = Ace).
    pub dealer_card: u8,
}

impl Deal {
    /// Creates a new deal.
    ///
    /// Note: This function does not validate ranks. Values outside the usual
    /// domains are accepted and simply never match a strategy entry.
    #[must_use]
    pub const fn new(card1: u8, card2: u8, dealer_card: u8) -> Self {
        Self {
            card1,
            card2,
            dealer_card,
        }
    }

    /// Returns the sum of the two player cards, aces counted as one.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.card1.saturating_add(self.card2)
    }

    /// Derives the state the resolver works on.
    ///
    /// A hand is soft when it holds an ace and its total is at most 11, and
    /// a pair when both cards have the same rank.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::Deal;
    ///
    /// let state = Deal::new(1, 7, 10).hand_state();
    /// assert_eq!(state.player_total, 8);
    /// assert!(state.is_soft);
    /// assert!(!state.is_pair);
    /// ```
    #[must_use]
    pub const fn hand_state(&self) -> HandState {
        let player_total = self.total();
        HandState {
            player_total,
            dealer_card: self.dealer_card,
            is_soft: (self.card1 == ACE || self.card2 == ACE) && player_total <= 11,
            is_pair: self.card1 == self.card2,
        }
    }
}

/// The classified hand of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandState {
    /// Sum of the player's cards.
    pub player_total: u8,
    /// Dealer's visible card.
    pub dealer_card: u8,
    /// Whether the hand counts as soft.
    pub is_soft: bool,
    /// Whether the hand is a pair.
    pub is_pair: bool,
}

impl HandState {
    /// Returns the table category this hand is looked up in.
    #[must_use]
    pub const fn category(&self) -> Category {
        Category::classify(self.is_soft, self.is_pair)
    }

    /// Returns the optimal action and its reason for this hand.
    #[must_use]
    pub fn resolve(&self) -> (Action, &'static str) {
        strategy::resolve(
            i32::from(self.player_total),
            i32::from(self.dealer_card),
            self.is_soft,
            self.is_pair,
        )
    }
}

impl From<Deal> for HandState {
    fn from(deal: Deal) -> Self {
        deal.hand_state()
    }
}
