//! The deck dealt from during a round.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};

/// A single 52-card deck.
///
/// Cards are drawn from the end of the sequence, so the last card is the top
/// of the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck with every suit and rank exactly once, shuffled with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in ACE..=KING {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck whose draws come out in the order given.
    ///
    /// ```
    /// use bjsolo::{Card, Deck, Suit};
    ///
    /// let first = Card::new(Suit::Hearts, 9);
    /// let second = Card::new(Suit::Clubs, 1);
    /// let mut deck = Deck::from_draws(&[first, second]);
    /// assert_eq!(deck.draw(), Some(first));
    /// assert_eq!(deck.draw(), Some(second));
    /// assert_eq!(deck.draw(), None);
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card, or `None` once the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
