use alloc::vec;
use alloc::vec::Vec;

use tracing::{debug, info};

use crate::error::{RoundError, StateError, ValidationError};
use crate::hand::Hand;
use crate::result::Settlement;

use super::{Game, GameState};

impl Game {
    /// Starts a round with `hand_count` empty hands.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, the bankroll is below the minimum
    /// bet, or `hand_count` is outside `1..=max_hands()`.
    pub fn start_round(&mut self, hand_count: usize) -> Result<(), RoundError> {
        if !matches!(self.state, GameState::Idle | GameState::RoundOver) {
            return Err(StateError::InvalidPhase(self.state).into());
        }
        self.ensure_funds()?;

        let max = self.max_hands();
        if !(1..=max).contains(&hand_count) {
            return Err(ValidationError::HandCount {
                count: hand_count,
                max,
            }
            .into());
        }

        self.hands = vec![Hand::new(); hand_count];
        self.wagers = Vec::with_capacity(hand_count);
        self.settlements = Vec::with_capacity(hand_count);
        self.dealer = Hand::new();
        self.turn = 0;
        self.state = GameState::Betting;

        debug!(
            hands = hand_count,
            round = self.session.rounds_played() + 1,
            "round started"
        );
        Ok(())
    }

    /// Returns the allowed wager range for the next hand, if wagers are being collected.
    ///
    /// The maximum is the table maximum, capped so the unreserved bankroll still covers the
    /// minimum bet on every hand after this one. This is stricter than bankroll minus collected
    /// wagers: with a bankroll of 100, two hands and a minimum of 2, the first wager tops out
    /// at 98 so the second hand can still be bet.
    #[must_use]
    pub fn wager_limits(&self) -> Option<(usize, usize)> {
        if self.state != GameState::Betting {
            return None;
        }

        let min = self.options.min_bet;
        let later_hands = self.hands.len() - self.wagers.len() - 1;
        let affordable = self
            .unreserved()
            .saturating_sub(min.saturating_mul(later_hands));
        let max = self.options.max_bet.map_or(affordable, |max| max.min(affordable));
        Some((min, max))
    }

    /// Places the wager for the next hand without a wager.
    ///
    /// Once every hand has a wager the game moves to [`GameState::Dealing`].
    ///
    /// # Errors
    ///
    /// Returns an error if wagers are not being collected or `amount` is outside
    /// [`wager_limits`](Self::wager_limits).
    pub fn place_wager(&mut self, amount: usize) -> Result<(), RoundError> {
        self.ensure_state(GameState::Betting)?;
        let (min, max) = self
            .wager_limits()
            .ok_or(StateError::InvalidPhase(self.state))?;

        if !(min..=max).contains(&amount) {
            return Err(ValidationError::Wager { amount, min, max }.into());
        }

        self.wagers.push(amount);
        self.settlements.push(None);

        if self.wagers.len() == self.hands.len() {
            self.state = GameState::Dealing;
        }

        Ok(())
    }

    /// Deals the opening cards and settles naturals.
    ///
    /// The shoe is reshuffled first if its marker came up last round. Cards go out in two
    /// passes: one face-up card to each hand in order, the dealer's face-down hole card, a
    /// second face-up card to each hand, then the dealer's face-up card.
    ///
    /// Returns `true` if the shoe was reshuffled before dealing.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting to deal.
    pub fn deal(&mut self) -> Result<bool, RoundError> {
        self.ensure_state(GameState::Dealing)?;

        let reshuffled = self.shoe.reshuffle_if_marker_reached();

        for hand in &mut self.hands {
            hand.add(self.shoe.draw(false));
        }
        self.dealer.add(self.shoe.draw(true));

        for hand in &mut self.hands {
            hand.add(self.shoe.draw(false));
        }
        self.dealer.add_to_front(self.shoe.draw(false));

        self.check_naturals();

        self.state = GameState::PlayerTurn;
        self.turn = 0;
        self.advance();

        Ok(reshuffled)
    }

    fn check_naturals(&mut self) {
        let dealer_natural = self.dealer.is_natural();
        if dealer_natural {
            self.dealer.reveal();
            info!(round = self.session.rounds_played() + 1, "dealer has a natural");
        }

        for (index, hand) in self.hands.iter().enumerate() {
            let wager = self.wagers[index];
            self.settlements[index] = match (hand.is_natural(), dealer_natural) {
                (true, false) => Some(Settlement::natural(
                    self.options.rounding_natural.three_to_two(wager),
                )),
                (false, true) => Some(Settlement::lose(wager)),
                (true, true) => Some(Settlement::push()),
                (false, false) => None,
            };
        }
    }
}
