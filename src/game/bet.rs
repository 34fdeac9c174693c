use core::num::IntErrorKind;

use tracing::{debug, info};

use crate::deck::Deck;
use crate::error::{BetError, RoundError};
use crate::result::Deal;

use super::{Game, MAX_BALANCE, NATURAL_PAYOUT, Phase, Seat};

/// Parses a bet typed by the player.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`BetError::NotANumber`] if the input is not an integer. Integers
/// too large for an `i64` are reported as [`BetError::ExceedsBalance`], or as
/// [`BetError::NonPositive`] when negative.
pub fn parse_bet(input: &str) -> Result<i64, BetError> {
    input.trim().parse().map_err(|err: core::num::ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow => BetError::ExceedsBalance,
        IntErrorKind::NegOverflow => BetError::NonPositive,
        _ => BetError::NotANumber,
    })
}

impl Game {
    fn ensure_betting(&self) -> Result<(), BetError> {
        match self.phase {
            Phase::AwaitingBet => Ok(()),
            Phase::GameOver => Err(BetError::GameOver),
            Phase::InPlay | Phase::DealerTurn | Phase::Resolved => Err(BetError::InvalidState),
        }
    }

    /// Records the bet for the next round.
    ///
    /// A bet placed earlier in the same betting phase is replaced. Chips are
    /// not taken until the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, a round is in play, the amount is
    /// not positive, the amount exceeds the chip balance, or a natural
    /// blackjack paid on it would take the balance past [`MAX_BALANCE`].
    pub fn place_bet(&self, amount: i64) -> Result<Self, BetError> {
        self.ensure_betting()?;

        if amount <= 0 {
            return Err(BetError::NonPositive);
        }

        let bet = amount.unsigned_abs();
        if bet > self.chips {
            return Err(BetError::ExceedsBalance);
        }

        let best_case = bet
            .saturating_mul(NATURAL_PAYOUT - 1)
            .saturating_add(self.chips);
        if best_case > MAX_BALANCE {
            return Err(BetError::OverTableLimit);
        }

        debug!(bet, chips = self.chips, "bet placed");
        let mut next = self.clone();
        next.bet = Some(bet);
        Ok(next)
    }

    /// Parses `input` and records it as the bet for the next round.
    ///
    /// # Errors
    ///
    /// Same as [`Game::place_bet`], plus [`BetError::NotANumber`] for input
    /// that is not an integer.
    pub fn place_bet_str(&self, input: &str) -> Result<Self, BetError> {
        self.ensure_betting()?;
        self.place_bet(parse_bet(input)?)
    }

    fn ensure_can_start(&self) -> Result<(), RoundError> {
        match self.phase {
            Phase::AwaitingBet if self.bet.is_some() => Ok(()),
            Phase::AwaitingBet => Err(RoundError::NoBet),
            Phase::GameOver => Err(RoundError::GameOver),
            Phase::InPlay | Phase::DealerTurn | Phase::Resolved => Err(RoundError::InvalidState),
        }
    }

    /// Shuffles a fresh deck and deals the opening hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, a round is already in play, or no
    /// bet has been placed.
    pub fn start_round(&self) -> Result<(Self, Deal), RoundError> {
        self.ensure_can_start()?;

        let mut next = self.clone();
        let deck = Deck::shuffled(&mut next.rng);
        Ok(next.deal(deck))
    }

    /// Deals the opening hands from the given deck instead of a shuffled one.
    ///
    /// Useful for replaying a known deck.
    ///
    /// # Errors
    ///
    /// Same as [`Game::start_round`].
    pub fn start_round_with(&self, deck: Deck) -> Result<(Self, Deal), RoundError> {
        self.ensure_can_start()?;
        Ok(self.clone().deal(deck))
    }

    fn deal(mut self, deck: Deck) -> (Self, Deal) {
        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.last_settlement = None;

        // Player, dealer, player, dealer
        for _ in 0..2 {
            self.draw_to(Seat::Player);
            self.draw_to(Seat::Dealer);
        }

        self.phase = Phase::InPlay;
        info!(
            bet = ?self.bet,
            player = %self.player,
            player_value = self.player.value(),
            dealer_up = self.dealer.up_card_value(),
            "round started"
        );

        let deal = Deal {
            player: self.player.clone(),
            dealer: self.dealer.clone(),
        };
        (self, deal)
    }
}
