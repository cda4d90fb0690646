//! The card shoe: shuffling, drawing, and marker-triggered reshuffles.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ConfigError;

/// Default range of positions, counted from the bottom of the shoe, where the marker card is
/// inserted.
pub const DEFAULT_MARKER_WINDOW: RangeInclusive<usize> = 60..=75;

/// A shuffled stack of one or more 52-card decks.
///
/// Cards are drawn from the top (the end of the internal vector). When the shoe uses a marker,
/// one marker card sits somewhere inside the marker window; drawing it flags the shoe for a
/// reshuffle at the start of the next deal instead of handing it out.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    uses_marker: bool,
    marker_window: RangeInclusive<usize>,
    marker_reached: bool,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled shoe with the default marker window.
    ///
    /// # Errors
    ///
    /// Returns an error if `decks` is zero, or if a marker is requested with fewer than two
    /// decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Shoe;
    ///
    /// let shoe = Shoe::new(6, true, 42).unwrap();
    /// assert_eq!(shoe.cards_remaining(), 6 * 52);
    /// ```
    pub fn new(decks: u8, uses_marker: bool, seed: u64) -> Result<Self, ConfigError> {
        Self::with_marker_window(decks, uses_marker, DEFAULT_MARKER_WINDOW, seed)
    }

    /// Creates a freshly shuffled shoe with a custom marker window.
    ///
    /// # Errors
    ///
    /// Returns an error if `decks` is zero, if a marker is requested with fewer than two
    /// decks, or if the window is empty or reaches past the shoe.
    pub fn with_marker_window(
        decks: u8,
        uses_marker: bool,
        marker_window: RangeInclusive<usize>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        validate(decks, uses_marker, &marker_window)?;

        let mut shoe = Self {
            cards: Vec::new(),
            decks,
            uses_marker,
            marker_window,
            marker_reached: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reset();
        Ok(shoe)
    }

    /// Rebuilds and reshuffles the full shoe, placing a new marker if one is used.
    pub fn reset(&mut self) {
        let mut cards = Vec::with_capacity(self.capacity() + 1);

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    if let Ok(card) = Card::of(rank, suit) {
                        cards.push(card);
                    }
                }
            }
        }

        cards.shuffle(&mut self.rng);

        if self.uses_marker {
            let position = self.rng.random_range(self.marker_window.clone());
            cards.insert(position.min(cards.len()), Card::marker());
        }

        self.cards = cards;
        self.marker_reached = false;
    }

    /// Draws the top card, face-down if requested.
    ///
    /// An empty shoe is silently rebuilt first. The marker card is never returned: drawing it
    /// sets [`marker_reached`](Self::marker_reached) and the next card is drawn instead.
    pub fn draw(&mut self, face_down: bool) -> Card {
        let mut card = loop {
            let Some(card) = self.cards.pop() else {
                debug!(decks = self.decks, "shoe empty, reshuffling");
                self.reset();
                continue;
            };
            if card.is_marker() {
                debug!(remaining = self.cards.len(), "marker card reached");
                self.marker_reached = true;
                continue;
            }
            break card;
        };

        if card.is_face_up() == face_down {
            card.flip();
        }
        card
    }

    /// Reshuffles if the marker was drawn since the last reset.
    ///
    /// Returns `true` if a reshuffle happened.
    pub fn reshuffle_if_marker_reached(&mut self) -> bool {
        if !self.marker_reached {
            return false;
        }

        info!(decks = self.decks, "marker reached, reshuffling shoe");
        self.reset();
        true
    }

    /// Returns whether the marker has been drawn since the last reset.
    #[must_use]
    pub const fn marker_reached(&self) -> bool {
        self.marker_reached
    }

    /// Returns the number of playable cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.iter().filter(|card| !card.is_marker()).count()
    }

    /// Returns how many cards can be dealt before the marker comes up.
    ///
    /// Returns `None` if the shoe has no marker or it has already been drawn.
    #[must_use]
    pub fn cards_before_marker(&self) -> Option<usize> {
        self.cards
            .iter()
            .rposition(Card::is_marker)
            .map(|position| self.cards.len() - position - 1)
    }

    /// Returns the number of decks.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns whether a marker card is used.
    #[must_use]
    pub const fn uses_marker(&self) -> bool {
        self.uses_marker
    }

    /// Returns the number of real cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Replaces the remaining cards so that the next draws return `draws` in order.
    ///
    /// Intended for deterministic replays and tests. Marker cards may be included to trigger
    /// the marker logic at a known point. The marker flag is left as it was.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards = draws.iter().rev().copied().collect();
    }
}

pub(crate) fn validate(
    decks: u8,
    uses_marker: bool,
    marker_window: &RangeInclusive<usize>,
) -> Result<(), ConfigError> {
    if decks == 0 {
        return Err(ConfigError::Decks(decks));
    }

    if !uses_marker {
        return Ok(());
    }

    if decks < 2 {
        return Err(ConfigError::MarkerNeedsDecks(decks));
    }

    let cards = decks as usize * DECK_SIZE;
    if marker_window.is_empty() || *marker_window.end() > cards {
        return Err(ConfigError::MarkerWindow {
            start: *marker_window.start(),
            end: *marker_window.end(),
            cards,
        });
    }

    Ok(())
}
