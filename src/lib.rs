//! poker-odds: Monte Carlo estimation of five-card poker hand odds
//!
//! Goals:
//! - Deal random five-card hands from a standard 52-card deck and tally
//!   how often each of seven hand categories turns up
//! - Deterministic replay from a seed; no panics in the simulation path
//! - Small, well-documented public API; I/O stays in the binary
//!
//! The classifier works from per-rank and per-suit frequency tables, not
//! card-by-card pattern matching, and it keeps two historical quirks of
//! this simulator: categories overlap (a full house also counts as three
//! of a kind and one pair) and the ace is rank 1, so only ace-low
//! straights are recognized.
//!
//! ## Quick start: estimate odds against a flush
//! ```
//! use poker_odds::classify::Category;
//! use poker_odds::sim::Simulation;
//!
//! let mut sim = Simulation::seeded(7);
//! sim.run(100_000);
//! let odds = sim.odds_against(Category::Flush).unwrap();
//! // True odds against a flush are about 508:1.
//! assert!((300..=800).contains(&odds));
//! ```
//!
//! ## CLI
//! Run the simulator with a live odds display:
//! ```sh
//! cargo run --release --bin poker-odds -- 10000000
//! ```

pub mod cards;
pub mod classify;
pub mod counts;
pub mod deck;
pub mod hand;
pub mod sim;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
