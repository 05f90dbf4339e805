//! The basic strategy table and the decision resolver.
//!
//! The table encodes published basic-strategy decisions for a single-deck
//! game where doubling on 11 is allowed. Any hand the table does not cover,
//! or covers only for other dealer cards, is played as a hit.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::action::Action;
use crate::card::is_dealer_rank;
use crate::sync::Lazy;

/// Reason given whenever no table entry applies.
pub const DEFAULT_REASON: &str = "Hitting is the safest move when no clear advantage exists.";

static TABLE: Lazy<StrategyTable> = Lazy::new(StrategyTable::basic);

/// Returns the process-wide basic strategy table.
#[must_use]
pub fn table() -> &'static StrategyTable {
    &TABLE
}

/// Which part of the table a hand is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// No ace counted as eleven, not a pair.
    Hard,
    /// Holds an ace that can count as eleven.
    Soft,
    /// Two cards of the same rank.
    Pair,
}

impl Category {
    /// Classifies a hand. A pair wins over a soft hand, so two aces are a
    /// pair.
    #[must_use]
    pub const fn classify(is_soft: bool, is_pair: bool) -> Self {
        if is_pair {
            Self::Pair
        } else if is_soft {
            Self::Soft
        } else {
            Self::Hard
        }
    }
}

/// An inclusive range of dealer up-cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealerRange {
    low: u8,
    high: u8,
}

impl DealerRange {
    /// Creates the range `low..=high`.
    ///
    /// Returns `None` if the range is empty or reaches outside `2..=11`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::DealerRange;
    ///
    /// let weak = DealerRange::new(4, 6).unwrap();
    /// assert!(weak.contains(5));
    /// assert!(!weak.contains(7));
    /// assert!(DealerRange::new(6, 4).is_none());
    /// assert!(DealerRange::new(1, 4).is_none());
    /// ```
    #[must_use]
    pub const fn new(low: u8, high: u8) -> Option<Self> {
        if low <= high && is_dealer_rank(low) && is_dealer_rank(high) {
            Some(Self { low, high })
        } else {
            None
        }
    }

    /// Returns the lowest dealer card in the range.
    #[must_use]
    pub const fn low(&self) -> u8 {
        self.low
    }

    /// Returns the highest dealer card in the range.
    #[must_use]
    pub const fn high(&self) -> u8 {
        self.high
    }

    /// Returns whether `dealer_card` falls inside the range.
    #[must_use]
    pub fn contains(&self, dealer_card: i32) -> bool {
        u8::try_from(dealer_card).is_ok_and(|card| (self.low..=self.high).contains(&card))
    }
}

/// A recommended action for one table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyEntry {
    /// Dealer cards the recommendation applies to.
    pub dealer: DealerRange,
    /// The recommended action.
    pub action: Action,
    /// Why the action is optimal.
    pub reason: &'static str,
}

/// Basic strategy keyed by hand category and player total.
///
/// Pairs are stored under their hand total, so a pair of fours lives at
/// `(Category::Pair, 8)`.
#[derive(Debug, Clone)]
pub struct StrategyTable {
    entries: HashMap<(Category, u8), StrategyEntry>,
}

// (category, total, low, high, action, reason)
type Row = (Category, u8, u8, u8, Action, &'static str);

#[rustfmt::skip]
const BASIC: [Row; 24] = [
    (Category::Hard, 8, 2, 11, Action::Hit, "You need to build a stronger hand to compete with the dealer."),
    (Category::Hard, 9, 3, 6, Action::Double, "The dealer is weak, so doubling here maximizes your advantage."),
    (Category::Hard, 10, 2, 9, Action::Double, "Doubling is optimal when the dealer likely won't beat 20."),
    (Category::Hard, 11, 2, 11, Action::Double, "Your chance of hitting 21 is high, so doubling is optimal."),
    (Category::Hard, 12, 4, 6, Action::Stand, "Standing avoids risking a bust against a weak dealer hand."),
    (Category::Hard, 13, 2, 6, Action::Stand, "The dealer has a weak card, so let them risk busting."),
    (Category::Hard, 14, 2, 6, Action::Stand, "The dealer is likely to bust, so standing is safest."),
    (Category::Hard, 15, 2, 6, Action::Stand, "Standing here takes advantage of the dealer's weak card."),
    (Category::Hard, 16, 2, 6, Action::Stand, "Standing avoids busting while the dealer risks failure."),
    (Category::Hard, 17, 2, 11, Action::Stand, "With 17 or more, standing minimizes risk of busting."),
    (Category::Soft, 13, 5, 6, Action::Double, "You have flexibility to improve against a weak dealer hand."),
    (Category::Soft, 14, 5, 6, Action::Double, "Doubling increases your odds against a vulnerable dealer."),
    (Category::Soft, 15, 4, 6, Action::Double, "Maximize value when the dealer is weak."),
    (Category::Soft, 16, 4, 6, Action::Double, "Doubling here is an aggressive move against a weak dealer."),
    (Category::Soft, 17, 3, 6, Action::Double, "Capitalize on the flexibility of your soft total."),
    (Category::Soft, 18, 3, 6, Action::Double, "The dealer is vulnerable, so take advantage with a double."),
    (Category::Soft, 19, 6, 6, Action::Double, "This is a rare opportunity to double with a high soft total."),
    (Category::Pair, 4, 2, 7, Action::Split, "Splitting here maximizes your chances to build winning hands."),
    (Category::Pair, 6, 2, 7, Action::Split, "Splitting gives you two chances to capitalize on weak cards."),
    (Category::Pair, 8, 5, 6, Action::Split, "Splitting takes advantage of the dealer's weak position."),
    (Category::Pair, 12, 2, 7, Action::Split, "Splitting is the best play when the dealer is weak."),
    (Category::Pair, 14, 2, 7, Action::Split, "Splitting increases your chance of building winning hands."),
    (Category::Pair, 16, 2, 11, Action::Split, "Splitting eights avoids a weak 16 and gives you two solid hands."),
    (Category::Pair, 18, 2, 9, Action::Split, "Splitting maximizes winning potential against most dealer hands."),
];

impl StrategyTable {
    /// Builds the basic strategy table.
    ///
    /// Prefer [`table`] to share the single static instance.
    #[must_use]
    pub fn basic() -> Self {
        let mut entries = HashMap::with_capacity(BASIC.len());
        for (category, total, low, high, action, reason) in BASIC {
            // Rows are fixed data with ranges inside 2..=11.
            if let Some(dealer) = DealerRange::new(low, high) {
                entries.insert(
                    (category, total),
                    StrategyEntry {
                        dealer,
                        action,
                        reason,
                    },
                );
            }
        }
        Self { entries }
    }

    /// Returns the entry for `category` and `total`, if the table has one.
    #[must_use]
    pub fn get(&self, category: Category, total: u8) -> Option<&StrategyEntry> {
        self.entries.get(&(category, total))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = ((Category, u8), &StrategyEntry)> {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }

    /// Looks up the action for a hand in this table.
    ///
    /// See [`resolve`].
    #[must_use]
    pub fn resolve(
        &self,
        player_total: i32,
        dealer_card: i32,
        is_soft: bool,
        is_pair: bool,
    ) -> (Action, &'static str) {
        let category = Category::classify(is_soft, is_pair);
        u8::try_from(player_total)
            .ok()
            .and_then(|total| self.get(category, total))
            .filter(|entry| entry.dealer.contains(dealer_card))
            .map_or((Action::Hit, DEFAULT_REASON), |entry| {
                (entry.action, entry.reason)
            })
    }
}

/// Returns the optimal action and its reason for a hand.
///
/// The hand is a pair if `is_pair` is set, otherwise soft if `is_soft` is
/// set, otherwise hard. When the table has no entry for the hand, or the
/// entry does not cover `dealer_card`, the answer is a hit with
/// [`DEFAULT_REASON`]. Every input has an answer.
///
/// # Example
///
/// ```
/// use bjdrill::{Action, DEFAULT_REASON, resolve};
///
/// assert_eq!(resolve(16, 5, false, false).0, Action::Stand);
/// assert_eq!(resolve(16, 10, false, false), (Action::Hit, DEFAULT_REASON));
/// ```
#[must_use]
pub fn resolve(
    player_total: i32,
    dealer_card: i32,
    is_soft: bool,
    is_pair: bool,
) -> (Action, &'static str) {
    table().resolve(player_total, dealer_card, is_soft, is_pair)
}
