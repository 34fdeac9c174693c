//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Settlement;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use bet::parse_bet;
pub use dealer::{DEALER_STANDS_ON, MAX_BALANCE, NATURAL_PAYOUT, WIN_PAYOUT};
pub use state::Phase;

/// Which hand a drawn card goes to.
#[derive(Debug, Clone, Copy)]
enum Seat {
    Player,
    Dealer,
}

/// A single-player blackjack game.
///
/// A `Game` is a value: every transition borrows the current game and returns
/// the next one alongside a report. A rejected transition returns an error and
/// the current value stays valid as it was, so callers keep it and retry.
///
/// ```
/// use bjsolo::{Game, GameOptions, Phase};
///
/// let game = Game::new(GameOptions::default(), 7);
/// let game = game.place_bet(10).unwrap();
/// let (game, deal) = game.start_round().unwrap();
/// assert_eq!(deal.player.len(), 2);
/// assert_eq!(game.phase(), Phase::InPlay);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    phase: Phase,
    chips: u64,
    bet: Option<u64>,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    rounds_played: u32,
    last_settlement: Option<Settlement>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The chip balance starts at [`GameOptions::starting_chips`].
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let chips = u64::from(options.starting_chips);
        let phase = if chips == 0 {
            Phase::GameOver
        } else {
            Phase::AwaitingBet
        };

        Self {
            options,
            phase,
            chips,
            bet: None,
            deck: Deck::default(),
            player: Hand::new(),
            dealer: Hand::new(),
            rounds_played: 0,
            last_settlement: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws the top card into the given hand.
    ///
    /// An empty deck yields no card and leaves the hand unchanged.
    fn draw_to(&mut self, seat: Seat) -> Option<Card> {
        let Some(card) = self.deck.draw() else {
            debug!(?seat, "deck exhausted, nothing drawn");
            return None;
        };

        match seat {
            Seat::Player => self.player.add_card(card),
            Seat::Dealer => self.dealer.add_card(card),
        }
        debug!(?seat, %card, remaining = self.deck.len(), "card drawn");
        Some(card)
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    /// Returns the current chip balance.
    #[must_use]
    pub const fn chips(&self) -> u64 {
        self.chips
    }

    /// Returns the bet for the upcoming or current round.
    #[must_use]
    pub const fn bet(&self) -> Option<u64> {
        self.bet
    }

    /// Returns the player's hand.
    ///
    /// After a round is settled this is the final hand of that round, until
    /// the next round is dealt.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hole card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards left in this round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of rounds settled so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the settlement of the most recently finished round.
    ///
    /// Cleared when the next round is dealt.
    #[must_use]
    pub const fn last_settlement(&self) -> Option<&Settlement> {
        self.last_settlement.as_ref()
    }
}
