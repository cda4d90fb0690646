//! Round engine and state management.

use alloc::vec::Vec;

use crate::error::{ConfigError, RoundError, StateError};
use crate::hand::Hand;
use crate::options::{GameOptions, MAX_STARTING_HANDS};
use crate::result::Settlement;
use crate::seat::TableView;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod session;
pub mod state;

pub use session::Session;
pub use state::GameState;

/// A blackjack table for a single player.
///
/// The game owns the shoe, the round in progress, and the player's [`Session`]. Each phase of
/// a round is a method guarded by [`GameState`]; [`play_round`](Self::play_round) drives them
/// all against a [`Seat`](crate::Seat).
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    shoe: Shoe,
    session: Session,
    state: GameState,
    /// Player hands in play order. Splits insert directly after the split hand.
    hands: Vec<Hand>,
    /// Wager per hand, same indices as `hands`.
    wagers: Vec<usize>,
    /// Settlement per hand, `None` while pending.
    settlements: Vec<Option<Settlement>>,
    dealer: Hand,
    /// Index of the hand in turn.
    turn: usize,
}

impl Game {
    /// Creates a new game with the given options and shoe seed.
    ///
    /// # Errors
    ///
    /// Returns the first invalid option.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.session().bankroll(), 1000);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        let session = Session::new(options.starting_bankroll);
        Self::with_session(options, session, seed)
    }

    /// Creates a new game that continues an existing session.
    ///
    /// # Errors
    ///
    /// Returns the first invalid option.
    pub fn with_session(
        options: GameOptions,
        session: Session,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        let shoe = Shoe::with_marker_window(
            options.decks,
            options.use_marker,
            options.marker_window.clone(),
            seed,
        )?;

        Ok(Self {
            options,
            shoe,
            session,
            state: GameState::Idle,
            hands: Vec::new(),
            wagers: Vec::new(),
            settlements: Vec::new(),
            dealer: Hand::new(),
            turn: 0,
        })
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the game, returning the session.
    #[must_use]
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to [`stack`](Shoe::stack) it for a replay.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the player's hands for the current round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the wagers for the current round, by hand index.
    #[must_use]
    pub fn wagers(&self) -> &[usize] {
        &self.wagers
    }

    /// Returns the settlements made so far, by hand index.
    #[must_use]
    pub fn settlements(&self) -> &[Option<Settlement>] {
        &self.settlements
    }

    /// Returns the total amount wagered this round.
    #[must_use]
    pub fn reserved(&self) -> usize {
        self.wagers.iter().sum()
    }

    /// Returns the most hands the bankroll allows starting a round with.
    #[must_use]
    pub fn max_hands(&self) -> usize {
        (self.session.bankroll() / self.options.min_bet).clamp(1, MAX_STARTING_HANDS)
    }

    /// Returns whether the bankroll covers another round.
    #[must_use]
    pub const fn can_continue(&self) -> bool {
        self.session.bankroll() >= self.options.min_bet
    }

    /// Returns a read-only snapshot of the table.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        let played = self.session.rounds_played();
        TableView {
            hands: &self.hands,
            dealer: &self.dealer,
            wagers: &self.wagers,
            settlements: &self.settlements,
            bankroll: self.session.bankroll(),
            round: if self.state == GameState::RoundOver {
                played
            } else {
                played + 1
            },
        }
    }

    fn ensure_state(&self, expected: GameState) -> Result<(), StateError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(StateError::InvalidPhase(self.state))
        }
    }

    fn ensure_funds(&self) -> Result<(), RoundError> {
        if self.can_continue() {
            Ok(())
        } else {
            Err(RoundError::InsufficientFunds {
                bankroll: self.session.bankroll(),
                min_bet: self.options.min_bet,
            })
        }
    }

    /// Bankroll not yet covered by this round's wagers.
    fn unreserved(&self) -> usize {
        self.session.bankroll().saturating_sub(self.reserved())
    }
}
