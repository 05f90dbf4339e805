//! A blackjack basic strategy drill with optional `no_std` support.
//!
//! The crate provides a fixed basic-strategy [`StrategyTable`], a pure
//! [`resolve`] function that looks up the optimal move for a hand, and a
//! [`Drill`] loop that quizzes a user round after round.
//!
//! # Example
//!
//! ```
//! use bjdrill::{Action, resolve};
//!
//! let (action, reason) = resolve(11, 6, false, false);
//! assert_eq!(action, Action::Double);
//! assert!(reason.contains("21"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

pub mod action;
pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod drill;
pub mod error;
pub mod generator;
pub mod hand;
pub mod options;
pub mod result;
pub mod strategy;
mod sync;

// Re-export main types
pub use action::Action;
pub use card::{ACE, DEALER_RANKS, PLAYER_RANKS};
#[cfg(feature = "std")]
pub use drill::Drill;
#[cfg(feature = "std")]
pub use error::DrillError;
pub use error::ParseActionError;
pub use generator::{DealSource, HandGenerator};
pub use hand::{Deal, HandState};
pub use options::DrillOptions;
pub use result::{RoundOutcome, RoundResult, Tally};
pub use strategy::{Category, DEFAULT_REASON, DealerRange, StrategyEntry, StrategyTable, resolve};
