use poker_odds::cards::{Card, Rank, Suit};
use poker_odds::classify::Category;
use poker_odds::counts::HandCounts;
use poker_odds::deck::Deck;
use poker_odds::hand::{Hand, HAND_SIZE};
use proptest::prelude::*;

/// Five distinct cards, drawn as a set of deck indices.
fn any_hand() -> impl Strategy<Value = Hand> {
    prop::collection::btree_set(0usize..52, HAND_SIZE).prop_map(|indices| {
        let deck = Deck::standard();
        let cards: Vec<Card> = indices.into_iter().map(|i| deck.cards()[i]).collect();
        Hand::from_slice(&cards).expect("distinct deck indices give distinct cards")
    })
}

proptest! {
    #[test]
    fn frequency_tables_sum_to_hand_size(hand in any_hand()) {
        let c = HandCounts::of(&hand);
        let rank_sum: u8 = Rank::ALL.iter().map(|&r| c.rank_count(r)).sum();
        let suit_sum: u8 = Suit::ALL.iter().map(|&s| c.suit_count(s)).sum();
        prop_assert_eq!(rank_sum, HAND_SIZE as u8);
        prop_assert_eq!(suit_sum, HAND_SIZE as u8);
    }

    #[test]
    fn x_of_a_kind_tables_are_weighted_histograms(hand in any_hand()) {
        let c = HandCounts::of(&hand);
        // Summing x * rank_x_of_a_kind(x) recovers the 5 cards, and the
        // table rows cover all 13 ranks (slot 0 holds the absent ones).
        let weighted: usize = (0..=HAND_SIZE).map(|x| x * c.rank_x_of_a_kind(x) as usize).sum();
        let rows: usize = (0..=HAND_SIZE).map(|x| c.rank_x_of_a_kind(x) as usize).sum();
        prop_assert_eq!(weighted, HAND_SIZE);
        prop_assert_eq!(rows, Rank::ALL.len());

        let weighted: usize = (0..=HAND_SIZE).map(|x| x * c.suit_x_of_a_kind(x) as usize).sum();
        let rows: usize = (0..=HAND_SIZE).map(|x| c.suit_x_of_a_kind(x) as usize).sum();
        prop_assert_eq!(weighted, HAND_SIZE);
        prop_assert_eq!(rows, Suit::ALL.len());
    }

    #[test]
    fn extrema_bound_every_rank_in_hand(hand in any_hand()) {
        let c = HandCounts::of(&hand);
        for card in hand.iter() {
            prop_assert!(c.min_rank() <= card.rank());
            prop_assert!(card.rank() <= c.max_rank());
        }
        prop_assert!(c.rank_count(c.min_rank()) > 0);
        prop_assert!(c.rank_count(c.max_rank()) > 0);
    }

    #[test]
    fn full_house_always_fires_trips_and_one_pair(hand in any_hand()) {
        let c = HandCounts::of(&hand);
        if Category::FullHouse.matches(&c) {
            prop_assert!(Category::ThreeOfAKind.matches(&c));
            prop_assert!(Category::OnePair.matches(&c));
        }
    }

    #[test]
    fn one_pair_and_two_pair_are_exclusive(hand in any_hand()) {
        let c = HandCounts::of(&hand);
        prop_assert!(!(Category::OnePair.matches(&c) && Category::TwoPair.matches(&c)));
    }

    #[test]
    fn straight_implies_five_distinct_ranks_spanning_five(hand in any_hand()) {
        let c = HandCounts::of(&hand);
        if Category::Straight.matches(&c) {
            prop_assert_eq!(c.rank_x_of_a_kind(1), HAND_SIZE as u8);
            prop_assert_eq!(c.max_rank().value() - c.min_rank().value(), HAND_SIZE as u8 - 1);
        }
    }

    #[test]
    fn flush_means_one_suit_holds_the_whole_hand(hand in any_hand()) {
        let c = HandCounts::of(&hand);
        let single_suited = hand.iter().all(|card| card.suit() == hand.cards()[0].suit());
        prop_assert_eq!(Category::Flush.matches(&c), single_suited);
    }

    #[test]
    fn quads_exclude_straight_and_flush(hand in any_hand()) {
        let c = HandCounts::of(&hand);
        if Category::FourOfAKind.matches(&c) {
            prop_assert!(!Category::Straight.matches(&c));
            prop_assert!(!Category::Flush.matches(&c));
            prop_assert!(!Category::FullHouse.matches(&c));
        }
    }
}
