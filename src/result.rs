//! Graded rounds and session tallies.

use crate::action::Action;
use crate::hand::HandState;

/// Whether an answer matched the optimal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The answer was the optimal move.
    Correct,
    /// The answer was another move, or not a move at all.
    Wrong,
}

/// Result of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The hand that was asked about.
    pub hand: HandState,
    /// The parsed answer, `None` if the input was not a move.
    pub answer: Option<Action>,
    /// The optimal move.
    pub expected: Action,
    /// Why the optimal move is optimal.
    pub reason: &'static str,
    /// The outcome of the round.
    pub outcome: RoundOutcome,
}

impl RoundResult {
    /// Grades a raw input line against the optimal move for `hand`.
    ///
    /// Input that does not parse as a move is graded wrong.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::{Deal, RoundOutcome, RoundResult};
    ///
    /// let hand = Deal::new(5, 6, 6).hand_state();
    /// assert_eq!(RoundResult::grade(hand, " D\n").outcome, RoundOutcome::Correct);
    /// assert_eq!(RoundResult::grade(hand, "double").outcome, RoundOutcome::Wrong);
    /// ```
    #[must_use]
    pub fn grade(hand: HandState, input: &str) -> Self {
        let (expected, reason) = hand.resolve();
        let answer = input.parse::<Action>().ok();
        let outcome = if answer == Some(expected) {
            RoundOutcome::Correct
        } else {
            RoundOutcome::Wrong
        };
        log::debug!(
            "graded {:?} against {expected:?} for {hand:?}: {outcome:?}",
            input.trim()
        );
        Self {
            hand,
            answer,
            expected,
            reason,
            outcome,
        }
    }

    /// Returns whether the answer was correct.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self.outcome, RoundOutcome::Correct)
    }
}

/// Running score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Rounds graded.
    pub rounds: usize,
    /// Rounds answered correctly.
    pub correct: usize,
}

impl Tally {
    /// Records a graded round.
    pub const fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        if result.is_correct() {
            self.correct += 1;
        }
    }

    /// Returns the number of rounds answered wrong.
    #[must_use]
    pub const fn wrong(&self) -> usize {
        self.rounds.saturating_sub(self.correct)
    }
}
