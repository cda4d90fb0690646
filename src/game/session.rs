//! Player session and the seat-driven round loop.

use tracing::info;

use crate::error::RoundError;
use crate::result::RoundResult;
use crate::seat::Seat;

use super::{Game, GameState};

/// Bankroll and round count for one player, carried from round to round.
///
/// A session only changes when a round settles. Independent games each own their own session,
/// so many can run side by side, e.g. to compare strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    bankroll: usize,
    rounds_played: usize,
}

impl Session {
    /// Creates a session with the given bankroll and no rounds played.
    #[must_use]
    pub const fn new(bankroll: usize) -> Self {
        Self {
            bankroll,
            rounds_played: 0,
        }
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the number of rounds settled.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub(super) const fn record(&mut self, net: isize) {
        self.bankroll = self.bankroll.saturating_add_signed(net);
        self.rounds_played += 1;
    }
}

/// Retries `step` with the seat's answers until it stops failing validation.
macro_rules! ask {
    ($seat:expr, $step:expr) => {
        loop {
            match $step {
                Ok(value) => break value,
                Err(RoundError::Validation(error)) => $seat.rejected(&error),
                Err(error) => return Err(error),
            }
        }
    };
}

impl Game {
    /// Plays one full round against `seat`.
    ///
    /// The seat is asked for the number of hands (only when the bankroll covers more than
    /// one), a wager per hand, and a decision whenever a hand is in turn. Rejected answers are
    /// reported to the seat and asked for again. The seat sees the table after the deal,
    /// after every decision, after the dealer plays, and after settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the bankroll is below the
    /// minimum bet.
    pub fn play_round<S: Seat + ?Sized>(
        &mut self,
        seat: &mut S,
    ) -> Result<RoundResult, RoundError> {
        self.ensure_funds()?;

        let max = self.max_hands();
        ask!(seat, {
            let count = if max > 1 { seat.hand_count(max) } else { 1 };
            self.start_round(count)
        });

        while let Some((min, max)) = self.wager_limits() {
            let hand_index = self.wagers.len();
            ask!(seat, self.place_wager(seat.wager(hand_index, min, max)));
        }

        if self.deal()? {
            info!(round = self.session.rounds_played() + 1, "shoe reshuffled");
        }
        seat.present(&self.view());

        while let Some(hand_index) = self.current_hand() {
            let available = self.available_actions();
            ask!(seat, self.act(seat.action(hand_index, available)));
            seat.present(&self.view());
        }

        self.dealer_play()?;
        seat.present(&self.view());

        let result = self.settle()?;
        seat.present(&self.view());

        Ok(result)
    }

    /// Plays rounds until the seat stops or the bankroll no longer covers the minimum bet.
    ///
    /// Returns the session after the last round.
    ///
    /// # Errors
    ///
    /// Returns an error if the starting bankroll is below the minimum bet or a round is
    /// already in progress.
    pub fn play_session<S: Seat + ?Sized>(
        &mut self,
        seat: &mut S,
    ) -> Result<Session, RoundError> {
        loop {
            self.play_round(seat)?;
            debug_assert_eq!(self.state, GameState::RoundOver);

            if !self.can_continue() || !seat.play_again() {
                return Ok(self.session);
            }
        }
    }
}
