//! Error types for card and pile operations.

use thiserror::Error;

/// Errors that can occur when constructing a card from names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit name is not one of the four suits.
    #[error("suit does not exist")]
    InvalidSuit,
    /// Rank name is not one of the thirteen ranks.
    #[error("rank does not exist")]
    InvalidRank,
}

/// Errors that can occur when accessing a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// Card index is outside the pile.
    #[error("card index out of range")]
    IndexOutOfRange,
}

/// Errors reported by [`GameState::validate`](crate::GameState::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// The game does not hold exactly 13 piles.
    #[error("game does not hold exactly 13 piles")]
    WrongPileCount,
    /// A pile's kind or slot number does not match the fixed layout order.
    #[error("pile kind or number does not match the fixed layout")]
    UnexpectedPile,
    /// The same card appears more than once across the piles.
    #[error("duplicate card across piles")]
    DuplicateCard,
    /// The piles do not add up to a full 52-card deck.
    #[error("piles do not contain a full 52-card deck")]
    MissingCards,
}
