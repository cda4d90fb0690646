//! Card types and deck constants.

use core::cmp::Ordering;

use crate::error::StateError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spades = 1,
    /// Hearts.
    Hearts = 2,
    /// Diamonds.
    Diamonds = 3,
    /// Clubs.
    Clubs = 4,
}

impl Suit {
    /// All four suits in index order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Spades),
            2 => Some(Self::Hearts),
            3 => Some(Self::Diamonds),
            4 => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// Rank of the reshuffle marker card.
pub const MARKER_RANK: u8 = 0;
/// Rank of an ace.
pub const ACE: u8 = 1;
/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

const fn base_value(rank: u8) -> u8 {
    match rank {
        ACE => 11,
        11..=13 => 10,
        _ => rank,
    }
}

/// A playing card.
///
/// Rank and suit never change. The blackjack value is fixed by rank except for aces, which
/// start at 11 and can be lowered to 1 by the hand holding them. Cards compare by rank only.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: u8,
    suit: Option<Suit>,
    value: u8,
    face_up: bool,
}

impl Card {
    /// Creates a face-down card.
    ///
    /// `rank` is 1 (ace) through 13 (king), or 0 for the marker card. `suit` is 1 through 4
    /// (see [`Suit`]), or 0 for no suit.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidRank`] or [`StateError::InvalidSuit`] when either index is
    /// out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Card;
    ///
    /// let king = Card::new(13, 1).unwrap();
    /// assert_eq!(king.value(), 10);
    /// assert!(Card::new(14, 1).is_err());
    /// ```
    pub const fn new(rank: u8, suit: u8) -> Result<Self, StateError> {
        if rank > 13 {
            return Err(StateError::InvalidRank(rank));
        }
        if suit > 4 {
            return Err(StateError::InvalidSuit(suit));
        }

        Ok(Self {
            rank,
            suit: Suit::from_index(suit),
            value: base_value(rank),
            face_up: false,
        })
    }

    /// Creates a face-down card of the given suit.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidRank`] if `rank` is outside `1..=13`.
    pub const fn of(rank: u8, suit: Suit) -> Result<Self, StateError> {
        if rank == MARKER_RANK {
            return Err(StateError::InvalidRank(rank));
        }
        Self::new(rank, suit as u8)
    }

    /// Returns the card turned face-up.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Card, Suit};
    ///
    /// let ace = Card::of(1, Suit::Hearts).unwrap().face_up();
    /// assert!(ace.is_face_up());
    /// ```
    #[must_use]
    pub const fn face_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// The card placed in the shoe to mark where reshuffling is due.
    #[must_use]
    pub const fn marker() -> Self {
        Self {
            rank: MARKER_RANK,
            suit: None,
            value: 0,
            face_up: false,
        }
    }

    /// Returns the rank (0 = marker, 1 = ace, 11-13 = jack, queen, king).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit, or `None` for the marker card.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Returns the current blackjack value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Sets the value of an ace to 1 or 11.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotAnAce`] for any other rank and
    /// [`StateError::InvalidAceValue`] for values other than 1 and 11.
    pub const fn set_value(&mut self, value: u8) -> Result<(), StateError> {
        if self.rank != ACE {
            return Err(StateError::NotAnAce(self.rank));
        }
        if value != 1 && value != 11 {
            return Err(StateError::InvalidAceValue(value));
        }
        self.value = value;
        Ok(())
    }

    /// Returns whether the card is visible to the player.
    ///
    /// The marker card is never shown and always reports face-down.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up && !self.is_marker()
    }

    /// Turns the card over.
    pub const fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Returns whether this is the reshuffle marker.
    #[must_use]
    pub const fn is_marker(&self) -> bool {
        self.rank == MARKER_RANK
    }

    /// Returns whether this is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns whether this is an ace currently counted as 11.
    #[must_use]
    pub const fn is_high_ace(&self) -> bool {
        self.rank == ACE && self.value == 11
    }

    /// Returns whether the card's natural value is 10 (ten, jack, queen, king).
    #[must_use]
    pub const fn is_ten_valued(&self) -> bool {
        self.rank >= 10
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialEq<u8> for Card {
    fn eq(&self, rank: &u8) -> bool {
        self.rank == *rank
    }
}

impl PartialOrd<u8> for Card {
    fn partial_cmp(&self, rank: &u8) -> Option<Ordering> {
        Some(self.rank.cmp(rank))
    }
}
