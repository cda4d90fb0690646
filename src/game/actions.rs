use tracing::debug;

use crate::card::Card;
use crate::error::{RoundError, ValidationError};
use crate::result::Settlement;
use crate::seat::{Action, Actions};

use super::{Game, GameState};

/// Whether a hand's turn continues after it drew a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drawn {
    Continue,
    Finished,
}

impl Game {
    /// Returns the index of the hand in turn, if players are deciding.
    #[must_use]
    pub fn current_hand(&self) -> Option<usize> {
        (self.state == GameState::PlayerTurn).then_some(self.turn)
    }

    /// Returns the actions offered for the hand in turn.
    ///
    /// Hit and stand are always offered. Double down needs the unreserved bankroll to cover the
    /// wager again and, for split hands, the double-after-split rule. Split needs a pair under
    /// the table's split rule, a split count below the limit, and the unreserved bankroll to
    /// cover the new hand's wager.
    #[must_use]
    pub fn available_actions(&self) -> Actions {
        let Some(index) = self.current_hand() else {
            return Actions::NONE;
        };

        let hand = &self.hands[index];
        let wager = self.wagers[index];
        let covered = self.unreserved() >= wager;
        let mut actions = Actions::BASIC;

        if covered && (self.options.double_after_split || hand.split_count() == 0) {
            actions = actions.with(Action::DoubleDown);
        }

        let under_limit = self
            .options
            .max_splits
            .is_none_or(|max| hand.split_count() < usize::from(max));
        if covered && under_limit && hand.can_split(self.options.split_rule()) {
            actions = actions.with(Action::Split);
        }

        actions
    }

    /// Applies a player decision to the hand in turn.
    ///
    /// Returns the card drawn, if the action drew one.
    ///
    /// # Errors
    ///
    /// Returns an error if players are not deciding or the action is not offered for the
    /// hand in turn. Nothing changes when an error is returned.
    pub fn act(&mut self, action: Action) -> Result<Option<Card>, RoundError> {
        match action {
            Action::Hit => self.hit().map(Some),
            Action::Stand => self.stand().map(|()| None),
            Action::DoubleDown => self.double_down().map(Some),
            Action::Split => self.split().map(|()| None),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns an error if players are not deciding.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        let index = self.ensure_offered(Action::Hit)?;

        let (card, drawn) = self.draw_for(index);
        if drawn == Drawn::Finished {
            self.finish_hand();
        }

        Ok(card)
    }

    /// Player action: Stand (end the hand's turn).
    ///
    /// # Errors
    ///
    /// Returns an error if players are not deciding.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_offered(Action::Stand)?;
        self.finish_hand();
        Ok(())
    }

    /// Player action: Double down (double the wager, draw one card, end the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if players are not deciding or doubling is not offered.
    pub fn double_down(&mut self) -> Result<Card, RoundError> {
        let index = self.ensure_offered(Action::DoubleDown)?;

        self.wagers[index] *= 2;
        let (card, _) = self.draw_for(index);
        self.finish_hand();

        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The new hand is inserted directly after the split one, with the same wager, and is
    /// played once the current hand's turn ends.
    ///
    /// # Errors
    ///
    /// Returns an error if players are not deciding or splitting is not offered.
    pub fn split(&mut self) -> Result<(), RoundError> {
        let index = self.ensure_offered(Action::Split)?;

        let new_hand = self.hands[index].split()?;
        let wager = self.wagers[index];

        self.hands.insert(index + 1, new_hand);
        self.wagers.insert(index + 1, wager);
        self.settlements.insert(index + 1, None);

        debug!(
            hand = index,
            splits = self.hands[index].split_count(),
            "hand split"
        );

        self.advance();
        Ok(())
    }

    fn ensure_offered(&self, action: Action) -> Result<usize, RoundError> {
        self.ensure_state(GameState::PlayerTurn)?;
        if !self.available_actions().contains(action) {
            return Err(ValidationError::ActionUnavailable(action).into());
        }
        Ok(self.turn)
    }

    /// Draws a face-up card into hand `index` and settles it on bust or a split natural.
    fn draw_for(&mut self, index: usize) -> (Card, Drawn) {
        let card = self.shoe.draw(false);
        let hand = &mut self.hands[index];
        hand.add(card);

        let wager = self.wagers[index];
        if hand.is_busted() {
            debug!(hand = index, score = hand.score(), "hand busted");
            self.settlements[index] = Some(Settlement::lose(wager));
            return (card, Drawn::Finished);
        }

        if hand.is_21() {
            if self.options.natural_after_split && hand.split_count() > 0 && hand.len() == 2 {
                let payout = self.options.rounding_natural.three_to_two(wager);
                self.settlements[index] = Some(Settlement::natural(payout));
            }
            return (card, Drawn::Finished);
        }

        (card, Drawn::Continue)
    }

    fn finish_hand(&mut self) {
        self.turn += 1;
        self.advance();
    }

    /// Moves the turn to the next hand needing a decision, playing out forced split-ace
    /// hits on the way. Moves to the dealer's turn when no hand is left.
    pub(super) fn advance(&mut self) {
        loop {
            while self.turn < self.hands.len() && self.settlements[self.turn].is_some() {
                self.turn += 1;
            }

            if self.turn >= self.hands.len() {
                self.state = GameState::DealerTurn;
                return;
            }

            if !self.is_forced_split_ace(self.turn) {
                return;
            }

            debug!(hand = self.turn, "split ace receives one card");
            // Forced to stand after the one card, so the draw outcome does not matter.
            self.draw_for(self.turn);
            self.turn += 1;
        }
    }

    fn is_forced_split_ace(&self, index: usize) -> bool {
        let hand = &self.hands[index];
        self.options.one_hit_split_aces
            && hand.split_count() > 0
            && hand.cards().first().is_some_and(Card::is_ace)
    }
}

