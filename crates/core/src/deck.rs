use crate::{Card, Rank, Suit};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("cards not available in the deck: {0}")]
    Missing(String),
}

/// The cards still waiting to be drawn, kept in standard order so that every
/// computation over the deck is deterministic. The deck only shrinks: cards
/// leave when they enter a hand and never come back within a session.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove cards as they enter a hand. All requested cards must still be
    /// present; otherwise nothing is removed and the missing ones are listed.
    pub fn remove(&mut self, cards: &[Card]) -> Result<(), DeckError> {
        let missing: Vec<Card> = cards
            .iter()
            .copied()
            .filter(|card| !self.contains(*card))
            .collect();
        if !missing.is_empty() {
            let listed = missing
                .iter()
                .map(|card| format!("{} {}", card.rank.name(), card.suit.name()))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(DeckError::Missing(listed));
        }
        self.cards.retain(|card| !cards.contains(card));
        Ok(())
    }

    pub fn count_suit(&self, suit: Suit) -> usize {
        self.cards.iter().filter(|card| card.suit == suit).count()
    }

    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }
}
