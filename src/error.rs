//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while placing a bet.
///
/// All of these are retryable: the game state is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The bet input is not an integer.
    #[error("not a number")]
    NotANumber,
    /// The bet is zero or negative.
    #[error("non-positive")]
    NonPositive,
    /// The bet is larger than the chip balance.
    #[error("exceeds balance")]
    ExceedsBalance,
    /// Winning the bet could take the balance past the table limit.
    #[error("exceeds table limit")]
    OverTableLimit,
    /// A round is already in play.
    #[error("invalid game state for betting")]
    InvalidState,
    /// The player has no chips left.
    #[error("game over")]
    GameOver,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// A round is already in play.
    #[error("invalid game state for starting a round")]
    InvalidState,
    /// The player has no chips left.
    #[error("game over")]
    GameOver,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is in play.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The player has no chips left.
    #[error("game over")]
    GameOver,
}

/// Errors returned across the command boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Bet rejected.
    #[error("invalid bet: {0}")]
    Bet(#[from] BetError),
    /// Round could not start.
    #[error("cannot start round: {0}")]
    Round(#[from] RoundError),
    /// Hit or stand rejected.
    #[error("invalid action: {0}")]
    Action(#[from] ActionError),
}

impl CommandError {
    /// Returns whether the error comes from the game having ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(
            self,
            Self::Bet(BetError::GameOver)
                | Self::Round(RoundError::GameOver)
                | Self::Action(ActionError::GameOver)
        )
    }
}
