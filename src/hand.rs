//! Player and dealer hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{ACE, Card};
use crate::error::StateError;

/// Which pairs a table lets the player split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplitRule {
    /// Only two cards of identical rank.
    SameRank,
    /// Identical rank, or any two ten-valued cards (e.g. king and queen).
    #[default]
    AnyTens,
}

/// An ordered set of cards belonging to one wager (or to the dealer).
///
/// Aces enter the hand counted as 11. Whenever an added card pushes the score over 21, aces
/// are lowered to 1 one at a time until the hand fits or no high ace is left.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
    split_count: usize,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            split_count: 0,
        }
    }

    fn from_split(card: Card, split_count: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            split_count,
        }
    }

    /// Adds a card to the back of the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.orient();
    }

    /// Adds a card to the front of the hand.
    ///
    /// The dealer's up card goes in front of the hole card this way.
    pub fn add_to_front(&mut self, card: Card) {
        self.cards.insert(0, card);
        self.orient();
    }

    /// Lowers high aces, first one first, while the hand is busted.
    fn orient(&mut self) {
        while self.is_busted() {
            let Some(ace) = self.cards.iter_mut().find(|card| card.is_high_ace()) else {
                break;
            };
            if ace.set_value(1).is_err() {
                break;
            }
        }
    }

    /// Splits a pair, keeping the first card and returning a new hand holding the second.
    ///
    /// Both hands end up with the incremented split count. A first card that is an ace lowered
    /// to 1 is restored to 11, since a lone ace cannot be busted. Table limits on splitting are
    /// the caller's concern; this only requires that the two cards form a pair under
    /// [`SplitRule::AnyTens`].
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotSplittable`] if the hand is not a pair.
    pub fn split(&mut self) -> Result<Self, StateError> {
        if !self.can_split(SplitRule::AnyTens) {
            return Err(StateError::NotSplittable);
        }

        self.split_count += 1;

        if let Some(first) = self.cards.first_mut() {
            if first.is_ace() && first.value() == 1 {
                first.set_value(11)?;
            }
        }

        let second = self.cards.pop().ok_or(StateError::NotSplittable)?;
        Ok(Self::from_split(second, self.split_count))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many splits produced this hand.
    #[must_use]
    pub const fn split_count(&self) -> usize {
        self.split_count
    }

    /// Returns the sum of the current card values, face-down cards included.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |sum, card| sum.saturating_add(card.value()))
    }

    /// Returns the sum of the face-up card values only.
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        self.cards
            .iter()
            .filter(|card| card.is_face_up())
            .fold(0u8, |sum, card| sum.saturating_add(card.value()))
    }

    /// Returns whether the score is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the score is exactly 21.
    #[must_use]
    pub fn is_21(&self) -> bool {
        self.score() == 21
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.is_21()
    }

    /// Returns whether any card is still face-down.
    #[must_use]
    pub fn has_face_down_cards(&self) -> bool {
        self.cards.iter().any(|card| !card.is_face_up())
    }

    /// Turns every face-down card face-up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            if !card.is_face_up() && !card.is_marker() {
                card.flip();
            }
        }
    }

    /// Returns whether the hand is a pair under the given rule.
    #[must_use]
    pub fn can_split(&self, rule: SplitRule) -> bool {
        match (rule, self.cards.as_slice()) {
            (SplitRule::AnyTens, [first, second])
                if first.is_ten_valued() && second.is_ten_valued() =>
            {
                true
            }
            _ => self.can_split_same_rank(),
        }
    }

    /// Returns whether the hand is exactly two cards of identical rank.
    #[must_use]
    pub fn can_split_same_rank(&self) -> bool {
        matches!(self.cards.as_slice(), [first, second] if first == second)
    }

    /// Returns whether the hand is exactly an ace and a six.
    #[must_use]
    pub fn is_soft_17(&self) -> bool {
        matches!(
            self.cards.as_slice(),
            [a, b] if (*a == ACE && *b == 6) || (*a == 6 && *b == ACE)
        )
    }
}
