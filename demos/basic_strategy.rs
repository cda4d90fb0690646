//! Plays a few seeded sessions with a simplified basic strategy and logs the results.
//!
//! Run with `cargo run --example basic_strategy`.

use bjsim::{Action, Actions, Game, GameOptions, Seat, TableView, ValidationError};
use tracing::{info, warn};

const SEEDS: [u64; 4] = [1, 7, 42, 1337];
const ROUNDS: usize = 200;

/// What the seat last saw of one of its hands.
#[derive(Debug, Clone, Copy)]
struct Seen {
    score: u8,
    pair_rank: Option<u8>,
}

/// Flat-betting seat that plays a cut-down basic strategy chart.
struct BasicStrategy {
    bet: usize,
    rounds_left: usize,
    dealer_up: u8,
    hands: Vec<Seen>,
}

impl BasicStrategy {
    const fn new(bet: usize, rounds: usize) -> Self {
        Self {
            bet,
            rounds_left: rounds,
            dealer_up: 0,
            hands: Vec::new(),
        }
    }

    fn decide(&self, hand: Seen, available: Actions) -> Action {
        let up = self.dealer_up;

        if let Some(rank) = hand.pair_rank {
            if matches!(rank, 1 | 8) && available.contains(Action::Split) {
                return Action::Split;
            }
        }

        if matches!(hand.score, 10 | 11) && up < 10 && available.contains(Action::DoubleDown) {
            return Action::DoubleDown;
        }

        if hand.score < 12 || (hand.score < 17 && up >= 7) {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

impl Seat for BasicStrategy {
    fn hand_count(&mut self, _max: usize) -> usize {
        1
    }

    fn wager(&mut self, _hand_index: usize, min: usize, max: usize) -> usize {
        self.bet.clamp(min, max)
    }

    fn action(&mut self, hand_index: usize, available: Actions) -> Action {
        self.hands
            .get(hand_index)
            .map_or(Action::Stand, |&hand| self.decide(hand, available))
    }

    fn play_again(&mut self) -> bool {
        self.rounds_left = self.rounds_left.saturating_sub(1);
        self.rounds_left > 0
    }

    fn present(&mut self, view: &TableView<'_>) {
        self.dealer_up = view.dealer.visible_score();
        self.hands = view
            .hands
            .iter()
            .map(|hand| Seen {
                score: hand.score(),
                pair_rank: match hand.cards() {
                    [first, second] if first.rank() == second.rank() => Some(first.rank()),
                    _ => None,
                },
            })
            .collect();
    }

    fn rejected(&mut self, error: &ValidationError) {
        warn!(%error, "answer rejected");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = GameOptions::default();

    for seed in SEEDS {
        let mut game = match Game::new(options.clone(), seed) {
            Ok(game) => game,
            Err(err) => {
                warn!(%err, "invalid table options");
                return;
            }
        };

        let mut seat = BasicStrategy::new(10, ROUNDS);
        match game.play_session(&mut seat) {
            Ok(session) => info!(
                seed,
                rounds = session.rounds_played(),
                bankroll = session.bankroll(),
                "session finished"
            ),
            Err(err) => warn!(seed, %err, "session stopped"),
        }
    }
}
