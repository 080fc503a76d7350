use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};
use rand::Rng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// A standard 52-card deck in a fixed rank-major order.
///
/// The deck is never shuffled: the dealer draws by uniform random index,
/// so positional order carries no information.
///
/// ```
/// use poker_odds::deck::{Deck, DECK_SIZE};
///
/// let deck = Deck::standard();
/// assert_eq!(deck.cards().len(), DECK_SIZE);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = [Card::new(Rank::Ace, Suit::Clubs); DECK_SIZE];
        let mut i = 0;
        for &r in &Rank::ALL {
            for &s in &Suit::ALL {
                cards[i] = Card::new(r, s);
                i += 1;
            }
        }
        Self { cards }
    }

    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// Per-card drawn flags for one deal/return cycle.
///
/// Invariant: exactly the cards of the live hand are flagged; everything
/// else is clear. The slot formula `rank_index * 4 + suit_index` is an
/// internal detail, not part of the public contract.
#[derive(Debug, Clone)]
pub struct DrawTracker {
    drawn: [bool; DECK_SIZE],
}

impl DrawTracker {
    pub fn new() -> Self {
        Self { drawn: [false; DECK_SIZE] }
    }

    const fn slot(card: Card) -> usize {
        card.rank().index() * Suit::ALL.len() + card.suit().index()
    }

    pub fn is_drawn(&self, card: Card) -> bool {
        self.drawn[Self::slot(card)]
    }

    /// Idempotent: setting the same value twice is a no-op.
    pub fn set_drawn(&mut self, card: Card, drawn: bool) {
        self.drawn[Self::slot(card)] = drawn;
    }

    pub fn drawn_count(&self) -> usize {
        self.drawn.iter().filter(|&&d| d).count()
    }
}

impl Default for DrawTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Deals five-card hands from a deck by rejection sampling.
///
/// Each slot samples a uniform index into the deck and retries while the
/// sampled card is already flagged drawn. With at most 5 of 52 cards out,
/// the rejection probability never exceeds 4/52, so the loop terminates
/// quickly in practice and is bounded as long as the tracker invariant
/// holds.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    deck: Deck,
    tracker: DrawTracker,
}

impl Dealer {
    pub fn new() -> Self {
        Self { deck: Deck::standard(), tracker: DrawTracker::new() }
    }

    /// Draw five distinct cards. Every dealt hand must be handed back via
    /// [`Dealer::return_hand`] before the next deal.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Hand {
        let mut cards = [self.deck.cards()[0]; HAND_SIZE];
        for slot in cards.iter_mut() {
            let card = loop {
                let pick = self.deck.cards()[rng.random_range(0..DECK_SIZE)];
                if !self.tracker.is_drawn(pick) {
                    break pick;
                }
            };
            self.tracker.set_drawn(card, true);
            *slot = card;
        }
        Hand::from_dealt(cards)
    }

    /// Clear the drawn flags for all five cards, restoring the full deck.
    pub fn return_hand(&mut self, hand: &Hand) {
        for c in hand.iter() {
            self.tracker.set_drawn(c, false);
        }
    }

    /// Number of cards currently out in a hand.
    pub fn cards_out(&self) -> usize {
        self.tracker.drawn_count()
    }
}
