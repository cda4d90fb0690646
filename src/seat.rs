//! The boundary between the round engine and whoever is playing.
//!
//! A [`Seat`] answers the engine's questions (how many hands, how much to bet, what to do)
//! and receives read-only snapshots of the table. Console front ends, scripted players, and
//! automated strategies all plug in here.

use crate::error::ValidationError;
use crate::hand::Hand;
use crate::result::Settlement;

/// A player decision for the hand in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// End the hand's turn.
    Stand,
    /// Double the wager, draw one card, and end the turn.
    DoubleDown,
    /// Split a pair into two hands, matching the wager.
    Split,
}

impl Action {
    const fn bit(self) -> u8 {
        match self {
            Self::Hit => 1,
            Self::Stand => 1 << 1,
            Self::DoubleDown => 1 << 2,
            Self::Split => 1 << 3,
        }
    }
}

/// The set of actions offered for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Actions(u8);

impl Actions {
    /// No actions.
    pub const NONE: Self = Self(0);
    /// Hit and stand, always offered for a hand the player decides on.
    pub const BASIC: Self = Self(Action::Hit.bit() | Action::Stand.bit());

    /// Returns the set with `action` added.
    #[must_use]
    pub const fn with(self, action: Action) -> Self {
        Self(self.0 | action.bit())
    }

    /// Returns whether `action` is in the set.
    #[must_use]
    pub const fn contains(self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the actions in the set in a fixed order.
    pub fn iter(self) -> impl Iterator<Item = Action> {
        [Action::Hit, Action::Stand, Action::DoubleDown, Action::Split]
            .into_iter()
            .filter(move |action| self.contains(*action))
    }
}

/// A read-only snapshot of the table, handed to [`Seat::present`].
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// The player's hands, in play order.
    pub hands: &'a [Hand],
    /// The dealer's hand.
    pub dealer: &'a Hand,
    /// The wager on each hand, by index.
    pub wagers: &'a [usize],
    /// Settlements made so far, by index.
    pub settlements: &'a [Option<Settlement>],
    /// Bankroll, updated once the round settles.
    pub bankroll: usize,
    /// One-based number of the round being played, or just settled.
    pub round: usize,
}

/// The player-facing side of the table.
///
/// The engine validates every answer. An out-of-range answer is reported through
/// [`rejected`](Seat::rejected) and the same question is asked again.
pub trait Seat {
    /// Asks how many hands to play, between 1 and `max`.
    fn hand_count(&mut self, max: usize) -> usize;

    /// Asks for the wager on hand `hand_index`, between `min` and `max`.
    fn wager(&mut self, hand_index: usize, min: usize, max: usize) -> usize;

    /// Asks what to do with hand `hand_index`.
    fn action(&mut self, hand_index: usize, available: Actions) -> Action;

    /// Asks whether to play another round.
    fn play_again(&mut self) -> bool;

    /// Shows the table. The default does nothing.
    fn present(&mut self, view: &TableView<'_>) {
        let _ = view;
    }

    /// Reports an answer that was rejected before it is asked for again.
    fn rejected(&mut self, error: &ValidationError) {
        let _ = error;
    }
}
