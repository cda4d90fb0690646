//! Card, hand, and shoe tests.

use bjsim::{Card, ConfigError, DECK_SIZE, Hand, Shoe, SplitRule, StateError, Suit};

fn card(rank: u8, suit: Suit) -> Card {
    Card::of(rank, suit).unwrap()
}

fn hand(ranks: &[u8]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add(card(rank, Suit::Spades));
    }
    hand
}

/// Best blackjack total: aces high unless that busts.
fn best_total(ranks: impl Iterator<Item = u8>) -> u8 {
    let (mut total, mut aces) = (0u8, 0u8);
    for rank in ranks {
        match rank {
            1 => {
                total += 11;
                aces += 1;
            }
            11..=13 => total += 10,
            _ => total += rank,
        }
    }
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }
    total
}

#[test]
fn card_construction_validates_rank_and_suit() {
    assert_eq!(Card::new(14, 1).unwrap_err(), StateError::InvalidRank(14));
    assert_eq!(Card::new(5, 5).unwrap_err(), StateError::InvalidSuit(5));
    assert_eq!(Card::of(0, Suit::Hearts).unwrap_err(), StateError::InvalidRank(0));

    let marker = Card::new(0, 0).unwrap();
    assert!(marker.is_marker());
    assert_eq!(marker.suit(), None);
    assert_eq!(marker.value(), 0);

    let queen = Card::new(12, 3).unwrap();
    assert_eq!(queen.suit(), Some(Suit::Diamonds));
    assert_eq!(queen.value(), 10);
    assert_eq!(card(1, Suit::Clubs).value(), 11);
    assert_eq!(card(7, Suit::Clubs).value(), 7);
}

#[test]
fn only_aces_change_value() {
    let mut ace = card(1, Suit::Hearts);
    ace.set_value(1).unwrap();
    assert_eq!(ace.value(), 1);
    assert_eq!(ace.set_value(5).unwrap_err(), StateError::InvalidAceValue(5));
    assert_eq!(ace.value(), 1);

    let mut king = card(13, Suit::Hearts);
    assert_eq!(king.set_value(1).unwrap_err(), StateError::NotAnAce(13));
    assert_eq!(king.value(), 10);
}

#[test]
fn cards_compare_by_rank_only() {
    assert_eq!(card(5, Suit::Spades), card(5, Suit::Hearts));
    assert!(card(13, Suit::Clubs) > card(12, Suit::Clubs));
    assert!(card(2, Suit::Clubs) < card(3, Suit::Spades));
    assert!(card(5, Suit::Diamonds) == 5);
    assert!(card(5, Suit::Diamonds) > 4);
    assert!(card(5, Suit::Diamonds) <= 5);
}

#[test]
fn visibility_flips_but_marker_stays_hidden() {
    let mut seven = card(7, Suit::Spades);
    assert!(!seven.is_face_up());
    seven.flip();
    assert!(seven.is_face_up());
    seven.flip();
    assert!(!seven.is_face_up());

    let mut marker = Card::marker();
    marker.flip();
    assert!(!marker.is_face_up());
}

#[test]
fn cards_can_be_built_face_up() {
    let king = card(13, Suit::Clubs).face_up();
    assert!(king.is_face_up());
    assert_eq!(king.value(), 10);
    assert!(!Card::marker().face_up().is_face_up());

    let mut hand = Hand::new();
    hand.add(king);
    hand.add(card(5, Suit::Clubs));
    assert_eq!(hand.visible_score(), 10);
}

#[test]
fn aces_drop_to_one_only_when_busted() {
    let mut aces = hand(&[1, 1]);
    assert_eq!(aces.score(), 12);
    assert_eq!(aces.cards()[0].value(), 1);
    assert_eq!(aces.cards()[1].value(), 11);

    aces.add(card(9, Suit::Hearts));
    assert_eq!(aces.score(), 21);
    assert!(aces.is_21());
    assert!(!aces.is_natural());

    aces.add(card(13, Suit::Hearts));
    assert_eq!(aces.score(), 21);
    assert!(aces.cards().iter().all(|card| !card.is_high_ace()));

    let mut busted = hand(&[10, 6]);
    busted.add(card(8, Suit::Clubs));
    assert!(busted.is_busted());
    assert_eq!(busted.score(), 24);
}

#[test]
fn incremental_scoring_matches_best_total() {
    let mut shoe = Shoe::new(2, false, 3).unwrap();

    for size in (2..8).cycle().take(300) {
        let mut hand = Hand::new();
        for _ in 0..size {
            hand.add(shoe.draw(false));
        }

        assert_eq!(
            hand.score(),
            best_total(hand.cards().iter().map(Card::rank)),
            "{:?}",
            hand.cards()
        );
        if hand.cards().iter().any(Card::is_high_ace) {
            assert!(hand.score() <= 21);
        }
    }
}

#[test]
fn add_to_front_keeps_order() {
    let mut dealer = Hand::new();
    dealer.add(card(1, Suit::Spades));
    dealer.add_to_front(card(6, Suit::Hearts));
    assert_eq!(dealer.cards()[0].rank(), 6);
    assert_eq!(dealer.cards()[1].rank(), 1);
    assert!(dealer.is_soft_17());
}

#[test]
fn split_restores_low_ace() {
    let mut aces = hand(&[1, 1]);
    assert_eq!(aces.cards()[0].value(), 1);

    let second = aces.split().unwrap();
    assert_eq!(aces.len(), 1);
    assert_eq!(aces.cards()[0].value(), 11);
    assert_eq!(second.len(), 1);
    assert_eq!(second.cards()[0].value(), 11);
    assert_eq!(aces.split_count(), 1);
    assert_eq!(second.split_count(), 1);
}

#[test]
fn resplitting_increments_split_count() {
    let mut eights = hand(&[8, 8]);
    let mut second = eights.split().unwrap();
    second.add(card(8, Suit::Diamonds));

    let third = second.split().unwrap();
    assert_eq!(eights.split_count(), 1);
    assert_eq!(second.split_count(), 2);
    assert_eq!(third.split_count(), 2);
}

#[test]
fn split_rejects_non_pairs() {
    let mut hand = hand(&[8, 9]);
    assert_eq!(hand.split().unwrap_err(), StateError::NotSplittable);
    assert_eq!(hand.len(), 2);
    assert_eq!(hand.split_count(), 0);
}

#[test]
fn split_rules() {
    let kings_queen = hand(&[13, 12]);
    assert!(kings_queen.can_split(SplitRule::AnyTens));
    assert!(!kings_queen.can_split(SplitRule::SameRank));
    assert!(!kings_queen.can_split_same_rank());

    let ten_king = hand(&[10, 13]);
    assert!(ten_king.can_split(SplitRule::AnyTens));
    assert!(!ten_king.can_split(SplitRule::SameRank));

    let eights = hand(&[8, 8]);
    assert!(eights.can_split(SplitRule::AnyTens));
    assert!(eights.can_split(SplitRule::SameRank));
    assert!(eights.can_split_same_rank());

    assert!(!hand(&[8, 9]).can_split(SplitRule::AnyTens));
    assert!(!hand(&[9, 10]).can_split(SplitRule::AnyTens));
    assert!(!hand(&[8, 8, 8]).can_split(SplitRule::AnyTens));
}

#[test]
fn soft_17_is_ace_six_only() {
    assert!(hand(&[1, 6]).is_soft_17());
    assert!(hand(&[6, 1]).is_soft_17());
    assert!(!hand(&[1, 2, 4]).is_soft_17());
    assert!(!hand(&[10, 7]).is_soft_17());
}

#[test]
fn visible_score_ignores_face_down_cards() {
    let mut shoe = Shoe::new(1, false, 1).unwrap();
    shoe.stack(&[card(9, Suit::Clubs), card(5, Suit::Hearts)]);

    let mut dealer = Hand::new();
    dealer.add(shoe.draw(true));
    dealer.add_to_front(shoe.draw(false));
    assert!(dealer.has_face_down_cards());
    assert_eq!(dealer.visible_score(), 5);
    assert_eq!(dealer.score(), 14);

    dealer.reveal();
    assert!(!dealer.has_face_down_cards());
    assert_eq!(dealer.visible_score(), 14);
}

#[test]
fn fresh_shoe_holds_every_card() {
    let shoe = Shoe::new(6, false, 11).unwrap();
    assert_eq!(shoe.cards_remaining(), 6 * DECK_SIZE);
    assert_eq!(shoe.capacity(), 6 * DECK_SIZE);
    assert_eq!(shoe.cards_before_marker(), None);
    assert!(!shoe.marker_reached());
}

#[test]
fn marker_lands_in_window() {
    for seed in 0..50 {
        let shoe = Shoe::new(6, true, seed).unwrap();
        let capacity = shoe.capacity();
        let before = shoe.cards_before_marker().unwrap();
        assert!((capacity - 75..=capacity - 60).contains(&before), "{before}");
        assert_eq!(shoe.cards_remaining(), capacity);
    }
}

#[test]
fn drawing_a_full_shoe_passes_the_marker() {
    let mut shoe = Shoe::new(2, true, 5).unwrap();
    let mut counts = [0usize; 14];

    for _ in 0..shoe.capacity() {
        let card = shoe.draw(false);
        assert!(!card.is_marker());
        assert!(card.is_face_up());
        counts[card.rank() as usize] += 1;
    }

    assert!(shoe.marker_reached());
    assert_eq!(shoe.cards_remaining(), 0);
    assert_eq!(counts[0], 0);
    assert!(counts[1..].iter().all(|&count| count == 8));
}

#[test]
fn draw_applies_requested_visibility() {
    let mut shoe = Shoe::new(1, false, 2).unwrap();
    assert!(shoe.draw(false).is_face_up());
    assert!(!shoe.draw(true).is_face_up());
}

#[test]
fn empty_shoe_reshuffles_silently() {
    let mut shoe = Shoe::new(2, true, 8).unwrap();
    shoe.stack(&[card(4, Suit::Clubs)]);

    assert_eq!(shoe.draw(false).rank(), 4);
    assert_eq!(shoe.cards_remaining(), 0);

    shoe.draw(false);
    assert_eq!(shoe.cards_remaining(), shoe.capacity() - 1);
    assert!(shoe.cards_before_marker().is_some());
}

#[test]
fn marker_triggers_reshuffle_between_rounds() {
    let mut shoe = Shoe::new(2, true, 4).unwrap();
    shoe.stack(&[card(2, Suit::Clubs), Card::marker(), card(3, Suit::Clubs)]);

    assert_eq!(shoe.draw(false).rank(), 2);
    assert!(!shoe.marker_reached());
    assert_eq!(shoe.draw(false).rank(), 3);
    assert!(shoe.marker_reached());

    assert!(shoe.reshuffle_if_marker_reached());
    assert!(!shoe.marker_reached());
    assert_eq!(shoe.cards_remaining(), shoe.capacity());
    assert!(!shoe.reshuffle_if_marker_reached());
}

#[test]
fn shoe_config_errors() {
    assert_eq!(Shoe::new(0, false, 1).unwrap_err(), ConfigError::Decks(0));
    assert_eq!(
        Shoe::new(1, true, 1).unwrap_err(),
        ConfigError::MarkerNeedsDecks(1)
    );
    assert_eq!(
        Shoe::with_marker_window(2, true, 0..=200, 1).unwrap_err(),
        ConfigError::MarkerWindow {
            start: 0,
            end: 200,
            cards: 104,
        }
    );
    assert!(Shoe::new(1, false, 1).is_ok());
}

#[test]
fn same_seed_same_order() {
    let mut first = Shoe::new(4, true, 99).unwrap();
    let mut second = Shoe::new(4, true, 99).unwrap();

    for _ in 0..50 {
        let (a, b) = (first.draw(false), second.draw(false));
        assert_eq!((a.rank(), a.suit()), (b.rank(), b.suit()));
    }
}
