use tracing::{debug, info};

use crate::card::Card;
use crate::hand::BLACKJACK;
use crate::result::{Outcome, Settlement};

use super::{Game, Phase, Seat};

/// The dealer draws below this total and stands on it or higher, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

/// Payout multiple of the bet for an ordinary win, stake included.
pub const WIN_PAYOUT: u64 = 2;

/// Payout multiple of the bet for a win with a natural blackjack, stake included.
pub const NATURAL_PAYOUT: u64 = 3;

/// Largest chip balance the table will hold.
///
/// Bets are only accepted while a natural blackjack on them stays within this
/// limit, so settlement never overflows and the net change fits an `i64`.
pub const MAX_BALANCE: u64 = i64::MAX as u64;

impl Game {
    /// Dealer plays their hand, drawing until reaching 17 or higher.
    ///
    /// Returns the cards drawn by the dealer. Stops early if the deck runs out.
    pub(super) fn dealer_play(&mut self) -> Vec<Card> {
        debug_assert_eq!(self.phase, Phase::DealerTurn);

        let mut drawn = Vec::new();
        while self.dealer.value() < DEALER_STANDS_ON {
            let Some(card) = self.draw_to(Seat::Dealer) else {
                break;
            };
            drawn.push(card);
        }

        debug!(
            dealer = %self.dealer,
            dealer_value = self.dealer.value(),
            drawn = drawn.len(),
            "dealer stands"
        );
        self.phase = Phase::Resolved;
        drawn
    }

    /// Compares the hands, pays out, and closes the round.
    ///
    /// A win pays [`WIN_PAYOUT`] times the bet, or [`NATURAL_PAYOUT`] times
    /// with a natural blackjack. The payout includes the stake, so the balance
    /// grows by the payout less the bet. A loss takes the bet, a push leaves
    /// the balance alone.
    ///
    /// Relies on `place_bet` having kept `chips + 2 * bet` within
    /// [`MAX_BALANCE`].
    #[expect(
        clippy::cast_possible_wrap,
        reason = "amounts are bounded by MAX_BALANCE, which is i64::MAX"
    )]
    pub(super) fn settle(&mut self, bet: u64) -> Settlement {
        debug_assert_eq!(self.phase, Phase::Resolved);

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let player_bust = player_value > BLACKJACK;
        let dealer_bust = !player_bust && dealer_value > BLACKJACK;

        let outcome = if player_bust {
            Outcome::Loss
        } else if dealer_bust || player_value > dealer_value {
            Outcome::Win
        } else if player_value == dealer_value {
            Outcome::Push
        } else {
            Outcome::Loss
        };

        let natural = outcome == Outcome::Win && self.player.is_natural();
        let (payout, net) = match outcome {
            Outcome::Win => {
                let multiple = if natural { NATURAL_PAYOUT } else { WIN_PAYOUT };
                let payout = bet * multiple;
                let gain = payout - bet;
                self.chips += gain;
                debug_assert!(self.chips <= MAX_BALANCE);
                (payout, gain as i64)
            }
            Outcome::Push => (0, 0),
            Outcome::Loss => {
                self.chips -= bet;
                (0, -(bet as i64))
            }
        };

        let settlement = Settlement {
            outcome,
            natural,
            bet,
            payout,
            net,
            chips: self.chips,
            player_value,
            dealer_value,
            player_bust,
            dealer_bust,
        };

        info!(
            ?outcome,
            natural,
            bet,
            net,
            chips = self.chips,
            player_value,
            dealer_value,
            "round settled"
        );

        self.bet = None;
        self.rounds_played += 1;
        self.last_settlement = Some(settlement);
        self.phase = if self.chips == 0 {
            info!(rounds = self.rounds_played, "out of chips, game over");
            Phase::GameOver
        } else {
            Phase::AwaitingBet
        };

        settlement
    }
}
