//! A Klondike solitaire game core with optional `no_std` support.
//!
//! The crate provides the deck-and-pile data model for a Klondike game:
//! [`Card`], [`Pile`], and [`GameState`], which performs the initial
//! randomized deal and keeps every card stamped with its
//! `(pile number, index)` position. A renderer or session layer reads the
//! piles to draw them; move legality, scoring, and persistence live above
//! this crate.
//!
//! # Example
//!
//! ```
//! use klrs::{GameState, PILE_COUNT};
//!
//! let game = GameState::with_seed(42);
//! assert_eq!(game.piles().len(), PILE_COUNT);
//! assert!(game.validate().is_ok());
//! println!("{game}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod pile;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Position, Rank, Suit};
pub use error::{CardError, PileError, ValidateError};
pub use game::{FOUNDATION_COUNT, GameState, PILE_COUNT, STOCK_SIZE, TABLEAU_COUNT};
pub use pile::{Pile, PileKind};
