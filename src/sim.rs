use crate::classify::{Category, Tally};
use crate::counts::HandCounts;
use crate::deck::Dealer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A self-contained Monte Carlo run: deck, draw tracker, RNG, and the
/// per-category tally all live here. Independent instances never share
/// state, so callers are free to run several side by side and merge the
/// numbers themselves.
///
/// ```
/// use poker_odds::classify::Category;
/// use poker_odds::sim::Simulation;
///
/// let mut sim = Simulation::seeded(42);
/// sim.run(10_000);
/// assert_eq!(sim.hands_dealt(), 10_000);
/// // Pairs turn up roughly every 2-3 hands.
/// assert!(sim.tally().count(Category::OnePair) > 0);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    dealer: Dealer,
    tally: Tally,
    dealt: u64,
    rng: ChaCha8Rng,
}

/// Snapshot handed to the progress callback at each reporting interval
/// and once after the loop.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    dealt: u64,
    requested: u64,
    tally: &'a Tally,
}

impl Progress<'_> {
    pub fn hands_dealt(&self) -> u64 {
        self.dealt
    }

    pub fn hands_requested(&self) -> u64 {
        self.requested
    }

    /// Whole-number percent of the requested hands dealt so far; 100 for
    /// a zero-hand run.
    pub fn percent_complete(&self) -> u64 {
        if self.requested == 0 {
            100
        } else {
            self.dealt * 100 / self.requested
        }
    }

    pub fn count(&self, category: Category) -> u64 {
        self.tally.count(category)
    }

    /// See [`Tally::odds_against`].
    pub fn odds_against(&self, category: Category) -> Option<u64> {
        self.tally.odds_against(category, self.dealt)
    }
}

impl Simulation {
    /// A simulation seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_os_rng())
    }

    /// A reproducible simulation: the same seed deals the same hands and
    /// produces the same tally.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self { dealer: Dealer::new(), tally: Tally::new(), dealt: 0, rng }
    }

    /// Deal, count, classify, and return `hands` hands. Zero is a valid
    /// no-op request.
    pub fn run(&mut self, hands: u64) {
        self.run_with_progress(hands, 0, |_| {});
    }

    /// Like [`Simulation::run`], but invokes `report` every `every` hands
    /// (0 disables in-loop reporting). The hot path does nothing but deal
    /// and count; reporting is the caller's side channel.
    pub fn run_with_progress<F>(&mut self, hands: u64, every: u64, mut report: F)
    where
        F: FnMut(Progress<'_>),
    {
        for i in 1..=hands {
            self.deal_one();
            if every != 0 && i % every == 0 {
                report(Progress { dealt: self.dealt, requested: hands, tally: &self.tally });
            }
        }
    }

    /// One full deal / count / classify / return cycle.
    fn deal_one(&mut self) {
        let hand = self.dealer.deal(&mut self.rng);
        let counts = HandCounts::of(&hand);
        self.tally.record(&counts);
        self.dealer.return_hand(&hand);
        self.dealt += 1;
    }

    pub fn hands_dealt(&self) -> u64 {
        self.dealt
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// See [`Tally::odds_against`].
    pub fn odds_against(&self, category: Category) -> Option<u64> {
        self.tally.odds_against(category, self.dealt)
    }

    /// Final snapshot, usable after `run` returns.
    pub fn progress(&self, requested: u64) -> Progress<'_> {
        Progress { dealt: self.dealt, requested, tally: &self.tally }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
