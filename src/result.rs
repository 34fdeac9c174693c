//! Reports returned by game transitions.

use crate::card::Card;
use crate::hand::Hand;

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Loss,
    /// Push (tie). The bet is returned.
    Push,
}

/// Payout resolution of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// Whether the player won with a natural blackjack.
    pub natural: bool,
    /// The bet for the round.
    pub bet: u64,
    /// Amount paid to the player on a win, stake included (0 otherwise).
    pub payout: u64,
    /// Net change of the chip balance.
    pub net: i64,
    /// Chip balance after settlement.
    pub chips: u64,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted before the dealer played.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

/// Hands after the opening deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// The player's two cards.
    pub player: Hand,
    /// Both dealer cards. The first is the up card.
    pub dealer: Hand,
}

/// Result of a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitReport {
    /// The card drawn, or `None` if the deck was empty.
    pub card: Option<Card>,
    /// The player's hand after the hit.
    pub player: Hand,
    /// The player's hand value after the hit.
    pub player_value: u8,
    /// Whether the player busted.
    pub busted: bool,
    /// Settlement of the round when the player busted.
    pub settlement: Option<Settlement>,
}

/// Result of a stand, after the dealer has played out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandReport {
    /// The dealer's final hand.
    pub dealer: Hand,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Cards the dealer drew after the opening deal.
    pub drawn: Vec<Card>,
    /// Settlement of the round.
    pub settlement: Settlement,
}

impl StandReport {
    /// Returns the outcome of the round.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.settlement.outcome
    }

    /// Returns the chip balance after settlement.
    #[must_use]
    pub const fn chips(&self) -> u64 {
        self.settlement.chips
    }
}
