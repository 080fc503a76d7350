use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a dealt hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("expected exactly {HAND_SIZE} cards, got {0}")]
    CardCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Five distinct cards drawn from the deck for classification.
///
/// Distinctness is guaranteed by construction: `try_new` rejects
/// duplicates, and the dealer's draw loop never produces them.
///
/// ```
/// use poker_odds::hand::Hand;
///
/// let hand: Hand = "2c 2h 5s 9d Kc".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for &c in &cards {
            if !seen.insert(c) {
                return Err(HandError::DuplicateCard(c));
            }
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Self::try_new(cards)
    }

    /// Construct from cards already known to be distinct (the dealer's
    /// rejection-sampling loop upholds this).
    pub(crate) fn from_dealt(cards: [Card; HAND_SIZE]) -> Self {
        debug_assert!(
            {
                let set: HashSet<Card> = cards.iter().copied().collect();
                set.len() == HAND_SIZE
            },
            "dealt hand contains a duplicate card"
        );
        Self(cards)
    }

    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn hand_requires_five_cards() {
        let cards = parse_cards("2c 3c 4c").unwrap();
        assert!(matches!(Hand::from_slice(&cards), Err(HandError::CardCount(3))));
    }

    #[test]
    fn hand_rejects_duplicates() {
        let c = Card::new(Rank::Ace, Suit::Spades);
        let cards = [
            c,
            c,
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
        ];
        assert!(matches!(Hand::try_new(cards), Err(HandError::DuplicateCard(_))));
    }

    #[test]
    fn parse_and_display_round_trip() {
        let hand: Hand = "2c 2h 5s 9d Kc".parse().unwrap();
        assert_eq!(hand.to_string(), "2c 2h 5s 9d Kc");
    }

    #[test]
    fn parse_rejects_duplicate_text() {
        assert!(matches!("As As 2c 3c 4c".parse::<Hand>(), Err(HandError::DuplicateCard(_))));
    }
}
