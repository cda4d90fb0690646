//! Seat-driven round and session tests.

use std::collections::VecDeque;

use bjsim::{
    Action, Actions, Card, Game, GameOptions, GameState, HandOutcome, RoundError, Seat, Suit,
    TableView, ValidationError,
};

fn card(rank: u8, suit: Suit) -> Card {
    Card::of(rank, suit).unwrap()
}

fn table() -> GameOptions {
    GameOptions::default()
        .with_marker(false)
        .with_starting_bankroll(100)
}

/// A seat that answers from fixed scripts and records what it was shown.
#[derive(Default)]
struct Scripted {
    hand_counts: VecDeque<usize>,
    wagers: VecDeque<usize>,
    actions: VecDeque<Action>,
    play_again: VecDeque<bool>,
    offered: Vec<Actions>,
    rejections: Vec<ValidationError>,
    presented: usize,
    asked_again: usize,
}

impl Seat for Scripted {
    fn hand_count(&mut self, _max: usize) -> usize {
        self.hand_counts.pop_front().unwrap()
    }

    fn wager(&mut self, _hand_index: usize, _min: usize, _max: usize) -> usize {
        self.wagers.pop_front().unwrap()
    }

    fn action(&mut self, _hand_index: usize, available: Actions) -> Action {
        self.offered.push(available);
        self.actions.pop_front().unwrap()
    }

    fn play_again(&mut self) -> bool {
        self.asked_again += 1;
        self.play_again.pop_front().unwrap()
    }

    fn present(&mut self, _view: &TableView<'_>) {
        self.presented += 1;
    }

    fn rejected(&mut self, error: &ValidationError) {
        self.rejections.push(*error);
    }
}

/// Bets the minimum and hits on every third decision, for a fixed number of rounds.
struct Steady {
    rounds_left: usize,
    decisions: usize,
    snapshots: Option<Vec<(usize, u8, usize)>>,
}

impl Steady {
    const fn new(rounds: usize, record: bool) -> Self {
        Self {
            rounds_left: rounds,
            decisions: 0,
            snapshots: if record { Some(Vec::new()) } else { None },
        }
    }
}

impl Seat for Steady {
    fn hand_count(&mut self, max: usize) -> usize {
        max.min(2)
    }

    fn wager(&mut self, _hand_index: usize, min: usize, _max: usize) -> usize {
        min
    }

    fn action(&mut self, _hand_index: usize, _available: Actions) -> Action {
        self.decisions += 1;
        if self.decisions % 3 == 0 {
            Action::Hit
        } else {
            Action::Stand
        }
    }

    fn play_again(&mut self) -> bool {
        self.rounds_left -= 1;
        self.rounds_left > 0
    }

    fn present(&mut self, view: &TableView<'_>) {
        if let Some(snapshots) = &mut self.snapshots {
            snapshots.push((view.round, view.dealer.visible_score(), view.hands.len()));
        }
    }
}

#[test]
fn rejected_answers_are_asked_again() {
    let mut game = Game::new(table(), 3).unwrap();
    game.shoe_mut().stack(&[
        card(10, Suit::Spades),
        card(9, Suit::Clubs),
        card(7, Suit::Hearts),
        card(8, Suit::Diamonds),
    ]);

    let mut seat = Scripted {
        hand_counts: [0, 1].into(),
        wagers: [1, 10].into(),
        actions: [Action::Split, Action::Stand].into(),
        ..Scripted::default()
    };

    let result = game.play_round(&mut seat).unwrap();
    assert_eq!(result.round, 1);
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.net, 0);

    assert_eq!(
        seat.rejections,
        [
            ValidationError::HandCount { count: 0, max: 7 },
            ValidationError::Wager {
                amount: 1,
                min: 2,
                max: 100,
            },
            ValidationError::ActionUnavailable(Action::Split),
        ]
    );
    assert_eq!(seat.offered.len(), 2);
    assert!(!seat.offered[0].contains(Action::Split));
    assert_eq!(seat.presented, 4);
    assert_eq!(game.state(), GameState::RoundOver);
    assert!(seat.hand_counts.is_empty());
    assert!(seat.actions.is_empty());
}

#[test]
fn single_hand_bankroll_is_not_asked_for_a_count() {
    let mut game = Game::new(table().with_starting_bankroll(10).with_min_bet(10), 3).unwrap();
    game.shoe_mut().stack(&[
        card(10, Suit::Spades),
        card(9, Suit::Clubs),
        card(6, Suit::Hearts),
        card(13, Suit::Diamonds),
    ]);

    let mut seat = Scripted {
        wagers: [10].into(),
        actions: [Action::Stand].into(),
        ..Scripted::default()
    };

    let session = game.play_session(&mut seat).unwrap();
    assert_eq!(session.bankroll(), 0);
    assert_eq!(session.rounds_played(), 1);
    assert_eq!(seat.asked_again, 0);
}

#[test]
fn session_runs_until_the_seat_stops() {
    let mut game = Game::new(table(), 3).unwrap();
    game.shoe_mut().stack(&[
        card(10, Suit::Spades),
        card(9, Suit::Clubs),
        card(10, Suit::Hearts),
        card(8, Suit::Diamonds),
        card(1, Suit::Spades),
        card(9, Suit::Clubs),
        card(13, Suit::Hearts),
        card(8, Suit::Diamonds),
    ]);

    let mut seat = Scripted {
        hand_counts: [1, 1].into(),
        wagers: [10, 10].into(),
        actions: [Action::Stand].into(),
        play_again: [true, false].into(),
        ..Scripted::default()
    };

    let session = game.play_session(&mut seat).unwrap();
    assert_eq!(session.rounds_played(), 2);
    assert_eq!(session.bankroll(), 100 + 10 + 15);
    assert_eq!(seat.asked_again, 2);
    assert_eq!(game.into_session(), session);
}

#[test]
fn broke_session_is_refused() {
    let mut game = Game::new(table().with_starting_bankroll(1), 3).unwrap();
    let mut seat = Scripted::default();

    assert_eq!(
        game.play_session(&mut seat).unwrap_err(),
        RoundError::InsufficientFunds {
            bankroll: 1,
            min_bet: 2,
        }
    );
    assert_eq!(seat.presented, 0);
}

#[test]
fn presenting_does_not_change_play() {
    let options = GameOptions::default().with_starting_bankroll(200);

    let mut watched = Game::new(options.clone(), 21).unwrap();
    let mut watcher = Steady::new(40, true);
    let watched_session = watched.play_session(&mut watcher).unwrap();

    let mut silent = Game::new(options, 21).unwrap();
    let mut quiet = Steady::new(40, false);
    let silent_session = silent.play_session(&mut quiet).unwrap();

    assert_eq!(watched_session, silent_session);
    assert_eq!(watcher.decisions, quiet.decisions);
    assert!(watcher.snapshots.is_some_and(|snapshots| !snapshots.is_empty()));
}

#[test]
fn sessions_are_independent() {
    let options = table();
    let mut first = Game::new(options.clone(), 1).unwrap();
    let mut second = Game::new(options, 2).unwrap();
    let mut first_seat = Steady::new(usize::MAX, false);
    let mut second_seat = Steady::new(usize::MAX, false);

    let mut first_net = 0;
    let mut second_net = 0;
    for _ in 0..10 {
        first_net += first.play_round(&mut first_seat).unwrap().net;
        second_net += second.play_round(&mut second_seat).unwrap().net;
    }

    assert_eq!(first.session().rounds_played(), 10);
    assert_eq!(second.session().rounds_played(), 10);
    assert_eq!(first.session().bankroll() as isize, 100 + first_net);
    assert_eq!(second.session().bankroll() as isize, 100 + second_net);
}
