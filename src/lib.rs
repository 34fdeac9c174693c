//! A single-player blackjack engine.
//!
//! The crate provides a [`Game`] value that runs the round cycle: betting,
//! the opening deal, hit and stand, the dealer's fixed strategy, and payout.
//! Front ends drive it through a [`Table`] by sending [`Command`]s.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Command, GameOptions, Response, Table};
//!
//! let mut table = Table::new(GameOptions::default(), 42);
//! table.execute(Command::PlaceBet("10".into())).unwrap();
//! let Response::RoundStarted(deal) = table.execute(Command::StartRound).unwrap() else {
//!     unreachable!();
//! };
//! assert_eq!(deal.dealer.len(), 2);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, CommandError, RoundError};
pub use game::{
    DEALER_STANDS_ON, Game, MAX_BALANCE, NATURAL_PAYOUT, Phase, WIN_PAYOUT, parse_bet,
};
pub use hand::{BLACKJACK, Hand, hand_value};
pub use options::{DEFAULT_STARTING_CHIPS, GameOptions};
pub use result::{Deal, HitReport, Outcome, Settlement, StandReport};
pub use table::{Command, Response, Table};
