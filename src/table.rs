//! Command interface between the engine and a presentation layer.
//!
//! A front end sends [`Command`]s and renders the [`Response`]s it gets back.
//! The [`Table`] holds the current [`Game`] value and swaps in the next one
//! only when a command succeeds.

use tracing::debug;

use crate::error::CommandError;
use crate::game::Game;
use crate::options::GameOptions;
use crate::result::{Deal, HitReport, StandReport};

/// A player request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Bet the amount as typed by the player.
    PlaceBet(String),
    /// Deal a new round with the placed bet.
    StartRound,
    /// Draw a card.
    Hit,
    /// Stop drawing and let the dealer play.
    Stand,
}

/// Reply to a successful [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The bet was recorded.
    BetPlaced {
        /// The recorded bet.
        bet: u64,
        /// Chip balance, untouched by the bet.
        chips: u64,
    },
    /// The opening hands were dealt.
    RoundStarted(Deal),
    /// The player drew a card.
    Hit(HitReport),
    /// The dealer played out and the round was settled.
    Stood(StandReport),
}

/// Owner of the game state on behalf of a front end.
#[derive(Debug, Clone)]
pub struct Table {
    game: Game,
}

impl Table {
    /// Opens a table with a new game.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::from_game(Game::new(options, seed))
    }

    /// Opens a table around an existing game.
    #[must_use]
    pub const fn from_game(game: Game) -> Self {
        Self { game }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the current chip balance.
    #[must_use]
    pub const fn chip_balance(&self) -> u64 {
        self.game.chips()
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Applies a command to the game.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the command is rejected. The game state
    /// is unchanged in that case.
    pub fn execute(&mut self, command: Command) -> Result<Response, CommandError> {
        debug!(?command, phase = ?self.game.phase(), "command received");

        let (next, response) = match command {
            Command::PlaceBet(input) => {
                let next = self.game.place_bet_str(&input)?;
                let response = Response::BetPlaced {
                    bet: next.bet().unwrap_or_default(),
                    chips: next.chips(),
                };
                (next, response)
            }
            Command::StartRound => {
                let (next, deal) = self.game.start_round()?;
                (next, Response::RoundStarted(deal))
            }
            Command::Hit => {
                let (next, report) = self.game.hit()?;
                (next, Response::Hit(report))
            }
            Command::Stand => {
                let (next, report) = self.game.stand()?;
                (next, Response::Stood(report))
            }
        };

        self.game = next;
        Ok(response)
    }
}
