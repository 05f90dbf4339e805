//! Player moves and their answer tokens.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseActionError;

/// A move the player can make on a two-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current total.
    Stand,
    /// Double the bet and take exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// All actions, in prompt order.
    pub const ALL: [Self; 4] = [Self::Hit, Self::Stand, Self::Double, Self::Split];

    /// Returns the short token a player types for this action.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::Action;
    ///
    /// assert_eq!(Action::Stand.token(), "st");
    /// assert_eq!(Action::Split.token(), "sp");
    /// ```
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Hit => "h",
            Self::Stand => "st",
            Self::Double => "d",
            Self::Split => "sp",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Parses an answer token.
///
/// Surrounding whitespace and letter case are ignored, so `" ST\n"` parses
/// as [`Action::Stand`]. Only the four short tokens are accepted.
impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ParseActionError::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|action| token.eq_ignore_ascii_case(action.token()))
            .ok_or(ParseActionError::Unknown)
    }
}
