//! Card ranks used by the drill.
//!
//! The drill never deals suits. A player card is a point value in `1..=10`
//! where `1` is an ace; the dealer's up-card is a value in `2..=11` where
//! `11` is an ace.

use core::ops::RangeInclusive;

/// Rank of an ace in a player's hand.
pub const ACE: u8 = 1;

/// Rank of an ace showing as the dealer's up-card.
pub const DEALER_ACE: u8 = 11;

/// Ranks a player card is drawn from.
pub const PLAYER_RANKS: RangeInclusive<u8> = ACE..=10;

/// Ranks the dealer's up-card is drawn from.
pub const DEALER_RANKS: RangeInclusive<u8> = 2..=DEALER_ACE;

/// Returns whether `rank` is a valid dealer up-card.
#[must_use]
pub const fn is_dealer_rank(rank: u8) -> bool {
    matches!(rank, 2..=DEALER_ACE)
}
