use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::RoundError;
use crate::result::{HandResult, RoundResult, Settlement};

use super::{Game, GameState};

impl Game {
    fn any_pending(&self) -> bool {
        self.settlements.iter().any(Option::is_none)
    }

    fn dealer_must_draw(&self) -> bool {
        let score = self.dealer.score();
        score < 17 || (score == 17 && self.dealer.is_soft_17() && self.options.hit_soft_17)
    }

    /// Dealer plays their hand according to the house rules.
    ///
    /// Skipped entirely when every hand is already settled. Otherwise the hole card is
    /// revealed and the dealer draws below 17, and on an ace-six soft 17 when the table hits
    /// soft 17. A dealer bust wins every hand still pending.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        self.ensure_state(GameState::DealerTurn)?;

        let mut drawn = Vec::new();

        if self.any_pending() {
            self.dealer.reveal();

            while self.dealer_must_draw() {
                let card = self.shoe.draw(false);
                self.dealer.add(card);
                drawn.push(card);
            }
            debug!(score = self.dealer.score(), draws = drawn.len(), "dealer stands");

            if self.dealer.is_busted() {
                for (settlement, &wager) in self.settlements.iter_mut().zip(&self.wagers) {
                    if settlement.is_none() {
                        *settlement = Some(Settlement::win(wager));
                    }
                }
            }
        }

        self.state = GameState::Settling;
        Ok(drawn)
    }

    /// Settles every pending hand against the dealer and updates the bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not played yet.
    pub fn settle(&mut self) -> Result<RoundResult, RoundError> {
        self.ensure_state(GameState::Settling)?;

        let dealer_score = self.dealer.score();
        let dealer_bust = self.dealer.is_busted();
        let dealer_natural = self.dealer.is_natural();

        let mut hands = Vec::with_capacity(self.hands.len());
        let mut net: isize = 0;

        for (hand_index, hand) in self.hands.iter().enumerate() {
            let wager = self.wagers[hand_index];
            let player_score = hand.score();

            let settlement = *self.settlements[hand_index].get_or_insert_with(|| {
                if hand.is_busted() || dealer_natural {
                    Settlement::lose(wager)
                } else if dealer_bust || player_score > dealer_score {
                    Settlement::win(wager)
                } else if player_score < dealer_score {
                    Settlement::lose(wager)
                } else {
                    Settlement::push()
                }
            });

            net += settlement.amount;
            hands.push(HandResult {
                hand_index,
                outcome: settlement.outcome,
                wager,
                amount: settlement.amount,
                player_score,
                dealer_score,
            });
        }

        let round = self.session.rounds_played() + 1;
        self.session.record(net);
        self.state = GameState::RoundOver;

        info!(
            round,
            hands = hands.len(),
            net,
            bankroll = self.session.bankroll(),
            "round settled"
        );

        Ok(RoundResult {
            round,
            hands,
            dealer_score,
            dealer_bust,
            dealer_natural,
            net,
            bankroll: self.session.bankroll(),
        })
    }
}
