//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs rounds against a house dealer: wagers,
//! the two-pass deal, naturals, player decisions (including recursive splits), dealer play,
//! and settlement into the player's [`Session`]. House rules live in [`GameOptions`].
//!
//! Input and display are left to a [`Seat`], so the engine can be driven by a console,
//! a scripted player, or an automated strategy.
//!
//! # Example
//!
//! ```
//! use bjsim::{Action, Actions, Game, GameOptions, Seat};
//!
//! struct AlwaysStand;
//!
//! impl Seat for AlwaysStand {
//!     fn hand_count(&mut self, _max: usize) -> usize {
//!         1
//!     }
//!     fn wager(&mut self, _hand_index: usize, min: usize, _max: usize) -> usize {
//!         min
//!     }
//!     fn action(&mut self, _hand_index: usize, _available: Actions) -> Action {
//!         Action::Stand
//!     }
//!     fn play_again(&mut self) -> bool {
//!         false
//!     }
//! }
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let result = game.play_round(&mut AlwaysStand).unwrap();
//! assert_eq!(result.round, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod seat;
pub mod shoe;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, MARKER_RANK, Suit};
pub use error::{ConfigError, RoundError, StateError, ValidationError};
pub use game::{Game, GameState, Session};
pub use hand::{Hand, SplitRule};
pub use options::{GameOptions, MAX_STARTING_HANDS, RoundingMode};
pub use result::{HandOutcome, HandResult, RoundResult, Settlement};
pub use seat::{Action, Actions, Seat, TableView};
pub use shoe::{DEFAULT_MARKER_WINDOW, Shoe};
