use crate::counts::HandCounts;
use crate::hand::HAND_SIZE;
use std::fmt;

/// The seven tracked hand categories.
///
/// Categories are NOT mutually exclusive: each predicate reads the
/// count-of-counts tables independently, so a full house also satisfies
/// three of a kind and one pair, and both get counted. That overlap is
/// the documented behavior of this simulator, not an accident to be
/// corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    OnePair = 0,
    TwoPair = 1,
    ThreeOfAKind = 2,
    FourOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Short column label for tabular output.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Category::OnePair => "1P",
            Category::TwoPair => "2P",
            Category::ThreeOfAKind => "3K",
            Category::FourOfAKind => "4K",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "F. House",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::FourOfAKind => "four of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
        }
    }

    /// Closed-form membership test over the count-of-counts tables.
    ///
    /// Straights are detected by numeric span over distinct ranks, and the
    /// ace is rank 1: A-2-3-4-5 qualifies, 10-J-Q-K-A does not (its span
    /// is 13). Known, preserved asymmetry.
    pub fn matches(self, counts: &HandCounts) -> bool {
        match self {
            Category::OnePair => counts.rank_x_of_a_kind(2) == 1,
            Category::TwoPair => counts.rank_x_of_a_kind(2) == 2,
            Category::ThreeOfAKind => counts.rank_x_of_a_kind(3) == 1,
            Category::FourOfAKind => counts.rank_x_of_a_kind(4) == 1,
            Category::Straight => {
                counts.rank_x_of_a_kind(1) == HAND_SIZE as u8
                    && counts.rank_span() == HAND_SIZE as u8
            }
            Category::Flush => counts.suit_x_of_a_kind(HAND_SIZE) > 0,
            Category::FullHouse => {
                counts.rank_x_of_a_kind(3) > 0 && counts.rank_x_of_a_kind(2) > 0
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Running per-category occurrence counters for a simulation.
///
/// Counters only ever grow; a fresh simulation starts from a fresh tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u64; Category::COUNT],
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test all seven predicates against one hand's counts and bump every
    /// category that matches.
    pub fn record(&mut self, counts: &HandCounts) {
        for cat in Category::ALL {
            if cat.matches(counts) {
                self.counts[cat.ordinal()] += 1;
            }
        }
    }

    pub fn count(&self, category: Category) -> u64 {
        self.counts[category.ordinal()]
    }

    /// Odds against the category as the `N` of `N:1`, i.e.
    /// `floor(dealt / count)`. `None` when the category never occurred;
    /// division by zero is never attempted.
    pub fn odds_against(&self, category: Category, dealt: u64) -> Option<u64> {
        match self.count(category) {
            0 => None,
            n => Some(dealt / n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    fn counts(s: &str) -> HandCounts {
        HandCounts::of(&s.parse::<Hand>().expect("valid hand literal"))
    }

    fn matching(s: &str) -> Vec<Category> {
        let c = counts(s);
        Category::ALL.into_iter().filter(|cat| cat.matches(&c)).collect()
    }

    #[test]
    fn one_pair_only() {
        assert_eq!(matching("2c 2h 5s 9d Kc"), vec![Category::OnePair]);
    }

    #[test]
    fn two_pair_does_not_read_as_one_pair() {
        assert_eq!(matching("2c 2h 5s 5d Kc"), vec![Category::TwoPair]);
    }

    #[test]
    fn trips_also_read_as_nothing_else() {
        assert_eq!(matching("3c 3h 3s 7d Kc"), vec![Category::ThreeOfAKind]);
    }

    #[test]
    fn quads() {
        assert_eq!(matching("7c 7h 7s 7d Kc"), vec![Category::FourOfAKind]);
    }

    #[test]
    fn straight_by_span() {
        assert_eq!(matching("4c 5h 6s 7d 8c"), vec![Category::Straight]);
    }

    #[test]
    fn wheel_is_a_straight_because_ace_is_one() {
        assert_eq!(matching("Ac 2h 3s 4d 5c"), vec![Category::Straight]);
    }

    #[test]
    fn broadway_is_not_a_straight() {
        // Ranks {1,10,11,12,13}: span 13, not 5.
        assert_eq!(matching("10c Jh Qs Kd Ac"), Vec::<Category>::new());
    }

    #[test]
    fn flush() {
        assert_eq!(matching("2c 5c 7c 9c Kc"), vec![Category::Flush]);
    }

    #[test]
    fn full_house_overlaps_trips_and_one_pair() {
        // The predicates are independent table reads; all three fire.
        assert_eq!(
            matching("3c 3h 3s 9d 9c"),
            vec![Category::OnePair, Category::ThreeOfAKind, Category::FullHouse]
        );
    }

    #[test]
    fn tally_records_all_matching_categories() {
        let mut tally = Tally::new();
        tally.record(&counts("3c 3h 3s 9d 9c"));
        assert_eq!(tally.count(Category::FullHouse), 1);
        assert_eq!(tally.count(Category::ThreeOfAKind), 1);
        assert_eq!(tally.count(Category::OnePair), 1);
        assert_eq!(tally.count(Category::Flush), 0);
    }

    #[test]
    fn odds_against_floors_and_guards_zero() {
        let mut tally = Tally::new();
        tally.record(&counts("2c 2h 5s 9d Kc"));
        tally.record(&counts("2c 2h 5s 9d Kc"));
        tally.record(&counts("2c 2h 5s 9d Kc"));
        assert_eq!(tally.odds_against(Category::OnePair, 7), Some(2));
        assert_eq!(tally.odds_against(Category::Flush, 7), None);
    }
}
