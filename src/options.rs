//! Game configuration options.

/// Chip balance a new game starts with.
pub const DEFAULT_STARTING_CHIPS: u32 = 100;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default().with_starting_chips(250);
/// assert_eq!(options.starting_chips, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Chip balance the player starts with.
    pub starting_chips: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_chips: DEFAULT_STARTING_CHIPS,
        }
    }
}

impl GameOptions {
    /// Sets the starting chip balance.
    ///
    /// A balance of zero produces a game that is over before it starts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(50);
    /// assert_eq!(options.starting_chips, 50);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: u32) -> Self {
        self.starting_chips = chips;
        self
    }
}
