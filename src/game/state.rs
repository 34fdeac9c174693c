//! Game state types.

/// Phase of the round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a bet and the start of the next round.
    AwaitingBet,
    /// Cards are dealt and the player may hit or stand.
    InPlay,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the bet is being paid out.
    Resolved,
    /// The player is out of chips. No further rounds can be played.
    GameOver,
}
