//! Settlement and round result types.

extern crate alloc;

use alloc::vec::Vec;

/// How a hand finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins even money (dealer busts or player has the higher score).
    Win,
    /// Player loses the wager (bust, lower score, or dealer natural).
    Lose,
    /// Tie; the wager is returned.
    Push,
    /// Player natural paid 3:2.
    Natural,
}

/// The settled result of one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome.
    pub outcome: HandOutcome,
    /// Signed change to the bankroll.
    pub amount: isize,
}

impl Settlement {
    #[expect(clippy::cast_possible_wrap, reason = "wagers are bounded by the bankroll")]
    pub(crate) const fn win(wager: usize) -> Self {
        Self {
            outcome: HandOutcome::Win,
            amount: wager as isize,
        }
    }

    #[expect(clippy::cast_possible_wrap, reason = "wagers are bounded by the bankroll")]
    pub(crate) const fn lose(wager: usize) -> Self {
        Self {
            outcome: HandOutcome::Lose,
            amount: -(wager as isize),
        }
    }

    pub(crate) const fn push() -> Self {
        Self {
            outcome: HandOutcome::Push,
            amount: 0,
        }
    }

    #[expect(clippy::cast_possible_wrap, reason = "payouts are bounded by the bankroll")]
    pub(crate) const fn natural(payout: usize) -> Self {
        Self {
            outcome: HandOutcome::Natural,
            amount: payout as isize,
        }
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index, in play order.
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The final wager on the hand (doubled if the player doubled down).
    pub wager: usize,
    /// Signed change to the bankroll.
    pub amount: isize,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
}

/// Result of a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// One-based round number.
    pub round: usize,
    /// Results for each hand.
    pub hands: Vec<HandResult>,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural.
    pub dealer_natural: bool,
    /// Net change to the bankroll.
    pub net: isize,
    /// Bankroll after settlement.
    pub bankroll: usize,
}
