//! Ordered, named piles of cards.

use alloc::vec::Vec;
use core::slice;

use crate::card::{Card, Position};
use crate::error::PileError;

/// The role a pile plays on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileKind {
    /// One of the seven main playing piles.
    Tableau,
    /// The undealt remainder of the deck.
    Stock,
    /// Face-up pile receiving cards drawn from the stock.
    Waste,
    /// One of the four goal piles, built up per suit.
    Foundation,
}

/// An ordered collection of cards with a role and an optional slot number.
///
/// Index 0 is the bottom (first-dealt) card; the last index is the top.
/// Tableaus and foundations are numbered; the stock and waste are
/// singletons and carry no number.
#[derive(Debug, Clone)]
pub struct Pile {
    /// The role of the pile.
    pub kind: PileKind,
    /// Which tableau/foundation slot this pile occupies, if any.
    pub number: Option<u8>,
    /// Cards in the pile, bottom first.
    cards: Vec<Card>,
}

impl Pile {
    /// Creates a new empty, unnumbered pile.
    ///
    /// Every call allocates its own card storage; piles never share a
    /// default collection.
    #[must_use]
    pub const fn new(kind: PileKind) -> Self {
        Self {
            kind,
            number: None,
            cards: Vec::new(),
        }
    }

    /// Creates a new empty pile occupying the given slot number.
    #[must_use]
    pub const fn numbered(kind: PileKind, number: u8) -> Self {
        Self {
            kind,
            number: Some(number),
            cards: Vec::new(),
        }
    }

    /// Creates a pile that adopts the given card sequence, bottom first.
    #[must_use]
    pub const fn with_cards(kind: PileKind, cards: Vec<Card>, number: Option<u8>) -> Self {
        Self {
            kind,
            number,
            cards,
        }
    }

    /// Stamps every card with its current `(pile number, index)` position,
    /// in insertion order.
    ///
    /// This is the sole writer of [`Card::position`](Card::position); any
    /// operation that moves a card between piles must call it on both
    /// affected piles afterwards.
    pub fn update_card_positions(&mut self) {
        let number = self.number;
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.set_position(Position {
                pile: number,
                index,
            });
        }
    }

    /// Returns the card at `index`, counting from the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::IndexOutOfRange`] if `index` is outside
    /// `[0, len)`.
    pub fn card(&self, index: usize) -> Result<&Card, PileError> {
        self.cards.get(index).ok_or(PileError::IndexOutOfRange)
    }

    /// Returns the card at `index`, or `None` if the index is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the top card, if the pile is not empty.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the cards in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns an iterator over the cards in index order.
    ///
    /// Re-iterating yields the same sequence unless the pile is mutated.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
