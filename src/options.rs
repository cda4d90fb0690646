//! Table configuration options.

use core::ops::RangeInclusive;

use crate::error::ConfigError;
use crate::hand::SplitRule;
use crate::shoe::{self, DEFAULT_MARKER_WINDOW};

/// Rounding mode for the 3:2 natural payout on odd wagers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest, halves away from zero.
    Nearest,
    /// Round to nearest, halves to the even neighbour.
    #[default]
    NearestEven,
}

impl RoundingMode {
    /// Returns `amount * 3 / 2` rounded with this mode.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::NearestEven.three_to_two(10), 15);
    /// assert_eq!(RoundingMode::NearestEven.three_to_two(5), 8);
    /// assert_eq!(RoundingMode::NearestEven.three_to_two(3), 4);
    /// assert_eq!(RoundingMode::Nearest.three_to_two(3), 5);
    /// ```
    #[must_use]
    pub const fn three_to_two(self, amount: usize) -> usize {
        let tripled = amount.saturating_mul(3);
        let half = tripled / 2;
        if tripled % 2 == 0 {
            return half;
        }

        match self {
            Self::Up | Self::Nearest => half + 1,
            Self::Down => half,
            Self::NearestEven => {
                if half % 2 == 0 {
                    half
                } else {
                    half + 1
                }
            }
        }
    }
}

/// Most hands a player may start a round with.
pub const MAX_STARTING_HANDS: usize = 7;

/// House rules and bankroll for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_hit_soft_17(false)
///     .with_max_bet(None);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Bankroll at the start of the session.
    pub starting_bankroll: usize,
    /// Whether the dealer hits an ace-six soft 17.
    pub hit_soft_17: bool,
    /// Whether hands produced by a split may double down.
    pub double_after_split: bool,
    /// Most times a hand may be split, `None` for unlimited.
    pub max_splits: Option<u8>,
    /// Whether a two-card 21 after a split pays like a natural.
    pub natural_after_split: bool,
    /// Whether any two ten-valued cards can be split, not just identical ranks.
    pub split_different_tens: bool,
    /// Whether split aces get exactly one card and then stand.
    pub one_hit_split_aces: bool,
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Whether a marker card triggers a reshuffle between rounds.
    pub use_marker: bool,
    /// Positions, counted from the bottom of the shoe, where the marker may be placed.
    pub marker_window: RangeInclusive<usize>,
    /// Smallest wager per hand.
    pub min_bet: usize,
    /// Largest wager per hand, `None` for no limit beyond the bankroll.
    pub max_bet: Option<usize>,
    /// Rounding mode for natural payouts.
    pub rounding_natural: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 1000,
            hit_soft_17: true,
            double_after_split: true,
            max_splits: Some(3),
            natural_after_split: true,
            split_different_tens: true,
            one_hit_split_aces: true,
            decks: 6,
            use_marker: true,
            marker_window: DEFAULT_MARKER_WINDOW,
            min_bet: 2,
            max_bet: Some(500),
            rounding_natural: RoundingMode::NearestEven,
        }
    }
}

impl GameOptions {
    /// Checks every option, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] describing the first invalid option.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{ConfigError, GameOptions};
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.validate(), Err(ConfigError::MarkerNeedsDecks(1)));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_bankroll == 0 {
            return Err(ConfigError::StartingBankroll(self.starting_bankroll));
        }

        shoe::validate(self.decks, self.use_marker, &self.marker_window)?;

        if self.min_bet == 0 {
            return Err(ConfigError::MinBet(self.min_bet));
        }

        if let Some(max_bet) = self.max_bet {
            if max_bet < self.min_bet {
                return Err(ConfigError::MaxBet {
                    min_bet: self.min_bet,
                    max_bet,
                });
            }
        }

        Ok(())
    }

    /// Returns the split rule implied by [`split_different_tens`](Self::split_different_tens).
    #[must_use]
    pub const fn split_rule(&self) -> SplitRule {
        if self.split_different_tens {
            SplitRule::AnyTens
        } else {
            SplitRule::SameRank
        }
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets whether the dealer hits soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_hit_soft_17(false);
    /// assert!(!options.hit_soft_17);
    /// ```
    #[must_use]
    pub const fn with_hit_soft_17(mut self, hit: bool) -> Self {
        self.hit_soft_17 = hit;
        self
    }

    /// Sets whether double down is allowed after split.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets the maximum number of splits per hand, `None` for unlimited.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_splits(Some(1));
    /// assert_eq!(options.max_splits, Some(1));
    /// ```
    #[must_use]
    pub const fn with_max_splits(mut self, max_splits: Option<u8>) -> Self {
        self.max_splits = max_splits;
        self
    }

    /// Sets whether a two-card 21 after a split pays 3:2.
    #[must_use]
    pub const fn with_natural_after_split(mut self, pays: bool) -> Self {
        self.natural_after_split = pays;
        self
    }

    /// Sets whether two different ten-valued cards may be split.
    #[must_use]
    pub const fn with_split_different_tens(mut self, allowed: bool) -> Self {
        self.split_different_tens = allowed;
        self
    }

    /// Sets whether split aces receive exactly one card.
    #[must_use]
    pub const fn with_one_hit_split_aces(mut self, one_hit: bool) -> Self {
        self.one_hit_split_aces = one_hit;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the shoe uses a marker card.
    #[must_use]
    pub const fn with_marker(mut self, use_marker: bool) -> Self {
        self.use_marker = use_marker;
        self
    }

    /// Sets where the marker card may be placed, counted from the bottom of the shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_marker_window(100..=120);
    /// assert_eq!(options.marker_window, 100..=120);
    /// ```
    #[must_use]
    pub fn with_marker_window(mut self, window: RangeInclusive<usize>) -> Self {
        self.marker_window = window;
        self
    }

    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum bet, `None` for no table limit.
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: Option<usize>) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the rounding mode for natural payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_natural(RoundingMode::Down);
    /// assert_eq!(options.rounding_natural, RoundingMode::Down);
    /// ```
    #[must_use]
    pub const fn with_rounding_natural(mut self, mode: RoundingMode) -> Self {
        self.rounding_natural = mode;
        self
    }
}
