use tracing::debug;

use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::{HitReport, StandReport};

use super::{Game, Phase, Seat};

impl Game {
    fn ensure_in_play(&self) -> Result<u64, ActionError> {
        match self.phase {
            Phase::InPlay => self.bet.ok_or(ActionError::InvalidState),
            Phase::GameOver => Err(ActionError::GameOver),
            Phase::AwaitingBet | Phase::DealerTurn | Phase::Resolved => {
                Err(ActionError::InvalidState)
            }
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round at once as a loss and the dealer does
    /// not play. If the deck is empty no card is drawn and the hand is left as
    /// it was.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in play.
    pub fn hit(&self) -> Result<(Self, HitReport), ActionError> {
        let bet = self.ensure_in_play()?;

        let mut next = self.clone();
        let card = next.draw_to(Seat::Player);
        let player_value = next.player.value();
        let busted = player_value > BLACKJACK;

        let settlement = if busted {
            debug!(player_value, "player busts");
            next.phase = Phase::Resolved;
            Some(next.settle(bet))
        } else {
            None
        };

        let report = HitReport {
            card,
            player: next.player.clone(),
            player_value,
            busted,
            settlement,
        };
        Ok((next, report))
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then plays out their hand and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in play.
    pub fn stand(&self) -> Result<(Self, StandReport), ActionError> {
        let bet = self.ensure_in_play()?;

        let mut next = self.clone();
        next.phase = Phase::DealerTurn;
        let drawn = next.dealer_play();
        let settlement = next.settle(bet);

        let report = StandReport {
            dealer: next.dealer.clone(),
            dealer_value: settlement.dealer_value,
            drawn,
            settlement,
        };
        Ok((next, report))
    }
}
