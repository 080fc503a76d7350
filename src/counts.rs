use crate::cards::{Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};

/// Occurrence counts for one hand: cards per rank and suit, the derived
/// count-of-counts tables, and the rank extrema.
///
/// Everything here is recomputed from scratch for every hand; nothing
/// carries over between deals.
///
/// The count-of-counts tables answer "how many ranks (suits) occur
/// exactly `x` times in the hand". Slot 0 collects the ranks and suits
/// absent from the hand; no classifier predicate reads it.
///
/// ```
/// use poker_odds::counts::HandCounts;
/// use poker_odds::hand::Hand;
///
/// let hand: Hand = "3c 3h 3s 9d 9c".parse().unwrap();
/// let counts = HandCounts::of(&hand);
/// assert_eq!(counts.rank_x_of_a_kind(3), 1);
/// assert_eq!(counts.rank_x_of_a_kind(2), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandCounts {
    rank_count: [u8; 13],
    suit_count: [u8; 4],
    rank_x_of_a_kind: [u8; HAND_SIZE + 1],
    suit_x_of_a_kind: [u8; HAND_SIZE + 1],
    min_rank: Rank,
    max_rank: Rank,
}

impl HandCounts {
    /// Count the hand: one pass over the five cards, then derive the
    /// count-of-counts tables from the per-rank and per-suit totals.
    pub fn of(hand: &Hand) -> Self {
        let mut rank_count = [0u8; 13];
        let mut suit_count = [0u8; 4];
        let mut min_rank = Rank::King;
        let mut max_rank = Rank::Ace;

        for card in hand.iter() {
            rank_count[card.rank().index()] += 1;
            suit_count[card.suit().index()] += 1;
            if card.rank() < min_rank {
                min_rank = card.rank();
            }
            if card.rank() > max_rank {
                max_rank = card.rank();
            }
        }

        // Count-of-counts: every rank slot contributes, including the
        // zero-count ones, which land in slot 0.
        let mut rank_x_of_a_kind = [0u8; HAND_SIZE + 1];
        for &n in &rank_count {
            rank_x_of_a_kind[n as usize] += 1;
        }
        let mut suit_x_of_a_kind = [0u8; HAND_SIZE + 1];
        for &n in &suit_count {
            suit_x_of_a_kind[n as usize] += 1;
        }

        Self { rank_count, suit_count, rank_x_of_a_kind, suit_x_of_a_kind, min_rank, max_rank }
    }

    /// How many cards of `rank` the hand holds.
    pub fn rank_count(&self, rank: Rank) -> u8 {
        self.rank_count[rank.index()]
    }

    /// How many cards of `suit` the hand holds.
    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suit_count[suit.index()]
    }

    /// Number of ranks occurring exactly `x` times, `x` in `0..=5`.
    pub fn rank_x_of_a_kind(&self, x: usize) -> u8 {
        self.rank_x_of_a_kind[x]
    }

    /// Number of suits occurring exactly `x` times, `x` in `0..=5`.
    pub fn suit_x_of_a_kind(&self, x: usize) -> u8 {
        self.suit_x_of_a_kind[x]
    }

    /// Lowest rank in the hand.
    pub fn min_rank(&self) -> Rank {
        self.min_rank
    }

    /// Highest rank in the hand.
    pub fn max_rank(&self) -> Rank {
        self.max_rank
    }

    /// Inclusive numeric span from lowest to highest rank.
    pub fn rank_span(&self) -> u8 {
        self.max_rank.value() - self.min_rank.value() + 1
    }
}
