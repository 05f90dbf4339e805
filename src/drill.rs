//! The interactive drill loop.
//!
//! Each round deals a hand, prints it, reads one answer line and prints
//! whether the answer was the optimal move. The loop is generic over its
//! input and output so it can run on a terminal or on in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::DrillError;
use crate::generator::{DealSource, HandGenerator};
use crate::options::DrillOptions;
use crate::result::{RoundResult, Tally};

/// Prompt printed before each answer is read.
pub const PROMPT: &str = "What is your move? (h = hit, st = stand, d = double, sp = split): ";

const BANNER: &str = "Welcome to the Blackjack Strategy Trainer!\n\
    Enter your moves using: h = hit, st = stand, d = double, sp = split\n\
    Press Ctrl+C to quit.\n";

/// A drill session over a deal source.
#[derive(Debug)]
pub struct Drill<S> {
    source: S,
    options: DrillOptions,
    tally: Tally,
}

impl Drill<HandGenerator> {
    /// Creates a drill dealing random hands seeded from `options`.
    #[must_use]
    pub fn new(options: DrillOptions) -> Self {
        Self::with_source(HandGenerator::new(options.seed), options)
    }
}

impl<S: DealSource> Drill<S> {
    /// Creates a drill dealing hands from `source`.
    ///
    /// The seed in `options` is ignored.
    #[must_use]
    pub const fn with_source(source: S, options: DrillOptions) -> Self {
        Self {
            source,
            options,
            tally: Tally {
                rounds: 0,
                correct: 0,
            },
        }
    }

    /// Returns the score so far.
    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    /// Runs rounds until input ends or the round limit is reached, then
    /// prints the session summary.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::{Drill, DrillOptions};
    ///
    /// let options = DrillOptions::default().with_seed(1).with_banner(false);
    /// let mut drill = Drill::new(options);
    /// let mut output = Vec::new();
    /// let tally = drill.run("h\nst\n".as_bytes(), &mut output).unwrap();
    /// assert_eq!(tally.rounds, 2);
    /// ```
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<Tally, DrillError> {
        if self.options.banner {
            writeln!(output, "{BANNER}")?;
        }

        while self.options.rounds.is_none_or(|limit| self.tally.rounds < limit) {
            if self.play_round(&mut input, &mut output)?.is_none() {
                break;
            }
        }

        log::debug!("session ended after {} rounds", self.tally.rounds);
        writeln!(
            output,
            "\nSession over: {}/{} correct.",
            self.tally.correct, self.tally.rounds
        )?;
        output.flush()?;
        Ok(self.tally)
    }

    /// Plays a single round.
    ///
    /// Returns `None` without dealing further if input has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn play_round<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<RoundResult>, DrillError> {
        let deal = self.source.deal();
        let hand = deal.hand_state();

        writeln!(
            output,
            "\nYour cards: {} and {} (Total: {})",
            deal.card1, deal.card2, hand.player_total
        )?;
        writeln!(output, "Dealer's visible card: {}", deal.dealer_card)?;
        write!(output, "{PROMPT}")?;
        output.flush()?;

        // Bytes that are not UTF-8 are an unrecognized answer, not an error.
        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(output)?;
            return Ok(None);
        }

        let answer = String::from_utf8_lossy(&line).to_lowercase();
        let result = RoundResult::grade(hand, &answer);
        if result.is_correct() {
            writeln!(output, "Correct! You played optimally.")?;
        } else {
            writeln!(output, "Wrong! The correct move was: {}.", result.expected)?;
            writeln!(output, "Reason: {}", result.reason)?;
        }

        self.tally.record(&result);
        Ok(Some(result))
    }
}
