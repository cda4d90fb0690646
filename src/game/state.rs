//! Round phase type.

/// Phase of the current round.
///
/// Phases advance strictly in declaration order. After [`RoundOver`](Self::RoundOver) the
/// next round starts from [`Game::start_round`](crate::Game::start_round) again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No round has been played yet.
    Idle,
    /// Collecting a wager for each hand.
    Betting,
    /// All wagers are in; waiting to deal.
    Dealing,
    /// Waiting for player decisions. Naturals have already been checked.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Remaining hands are compared with the dealer and the bankroll is updated.
    Settling,
    /// Round has been settled.
    RoundOver,
}
