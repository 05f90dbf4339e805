//! Drill configuration options.

/// Configuration options for a drill session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjdrill::DrillOptions;
///
/// let options = DrillOptions::default()
///     .with_seed(7)
///     .with_rounds(Some(10))
///     .with_banner(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillOptions {
    /// Seed for the hand generator.
    pub seed: u64,
    /// Number of rounds to play. `None` plays until input ends.
    pub rounds: Option<usize>,
    /// Whether to print the welcome banner before the first round.
    pub banner: bool,
}

impl Default for DrillOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            rounds: None,
            banner: true,
        }
    }
}

impl DrillOptions {
    /// Sets the generator seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::DrillOptions;
    ///
    /// let options = DrillOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of rounds to play.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::DrillOptions;
    ///
    /// let options = DrillOptions::default().with_rounds(Some(3));
    /// assert_eq!(options.rounds, Some(3));
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: Option<usize>) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets whether the welcome banner is printed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::DrillOptions;
    ///
    /// let options = DrillOptions::default().with_banner(false);
    /// assert!(!options.banner);
    /// ```
    #[must_use]
    pub const fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }
}
