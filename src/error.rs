//! Error types for table setup and round play.
//!
//! Errors fall into three groups:
//!
//! - [`ConfigError`]: the table was configured with invalid parameters. Raised once by
//!   [`Game::new`](crate::Game::new) and never recovered from.
//! - [`ValidationError`]: a seat answered with an out-of-range value. The round is left
//!   untouched and the answer can simply be asked for again.
//! - [`StateError`]: the caller misused a card, hand, or engine step. These indicate a logic
//!   defect rather than bad input.

use thiserror::Error;

use crate::game::GameState;
use crate::seat::Action;

/// Errors raised while validating [`GameOptions`](crate::GameOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Starting bankroll is zero.
    #[error("starting bankroll must be at least 1, got {0}")]
    StartingBankroll(usize),
    /// No decks in the shoe.
    #[error("must use at least 1 deck, got {0}")]
    Decks(u8),
    /// The marker card needs at least two decks.
    #[error("must have at least 2 decks to use a marker card, got {0}")]
    MarkerNeedsDecks(u8),
    /// The marker window is empty or reaches past the shoe.
    #[error("marker window {start}..={end} does not fit a shoe of {cards} cards")]
    MarkerWindow {
        /// First allowed position, counted from the bottom of the shoe.
        start: usize,
        /// Last allowed position.
        end: usize,
        /// Number of real cards in the shoe.
        cards: usize,
    },
    /// Minimum bet is zero.
    #[error("minimum bet must be at least 1, got {0}")]
    MinBet(usize),
    /// Maximum bet is below the minimum bet.
    #[error("maximum bet must be at least the minimum bet, got {max_bet} < {min_bet}")]
    MaxBet {
        /// Configured minimum bet.
        min_bet: usize,
        /// Configured maximum bet.
        max_bet: usize,
    },
}

/// Recoverable errors caused by a seat's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Number of hands outside `1..=max`.
    #[error("number of hands must be 1-{max}, got {count}")]
    HandCount {
        /// Requested number of hands.
        count: usize,
        /// Largest number of hands the bankroll allows.
        max: usize,
    },
    /// Wager outside `min..=max`.
    #[error("bet must be {min}-{max}, got {amount}")]
    Wager {
        /// Requested wager.
        amount: usize,
        /// Table minimum.
        min: usize,
        /// Lesser of the table maximum and the unreserved bankroll.
        max: usize,
    },
    /// The chosen action is not offered for the current hand.
    #[error("{0:?} is not available for this hand")]
    ActionUnavailable(Action),
}

/// Misuse of a card, hand, or engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// Card rank outside `0..=13`.
    #[error("rank must be 0-13, got {0}")]
    InvalidRank(u8),
    /// Card suit outside `0..=4`.
    #[error("suit must be 0-4, got {0}")]
    InvalidSuit(u8),
    /// Tried to change the value of a card that is not an ace.
    #[error("card must be an ace to change value, rank is {0}")]
    NotAnAce(u8),
    /// Ace value other than 1 or 11.
    #[error("ace value must be 1 or 11, got {0}")]
    InvalidAceValue(u8),
    /// Tried to split a hand that is not a pair.
    #[error("hand cannot be split")]
    NotSplittable,
    /// Engine step called in the wrong phase.
    #[error("step not allowed while {0:?}")]
    InvalidPhase(GameState),
}

/// Errors returned by round engine steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The seat's answer was rejected; ask again.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The engine was driven incorrectly.
    #[error(transparent)]
    State(#[from] StateError),
    /// The bankroll no longer covers the minimum bet.
    #[error("bankroll must be at least the minimum bet, got {bankroll} < {min_bet}")]
    InsufficientFunds {
        /// Current bankroll.
        bankroll: usize,
        /// Table minimum.
        min_bet: usize,
    },
}
