//! Opt-in full-deck validation.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::DECK_SIZE;
use crate::error::ValidateError;
use crate::pile::PileKind;

use super::{GameState, PILE_COUNT, TABLEAU_COUNT};

/// Expected kind and slot number for the pile at `index` in layout order.
const fn expected_slot(index: usize) -> (PileKind, Option<u8>) {
    if index < TABLEAU_COUNT {
        (PileKind::Tableau, Some(index as u8))
    } else if index == TABLEAU_COUNT {
        (PileKind::Stock, None)
    } else if index == TABLEAU_COUNT + 1 {
        (PileKind::Waste, None)
    } else {
        (PileKind::Foundation, Some((index - TABLEAU_COUNT - 2) as u8))
    }
}

impl GameState {
    /// Checks that the piles form a complete, well-laid-out game.
    ///
    /// Verifies the fixed 13-pile layout (kind and slot number at every
    /// index) and that the union of cards across all piles is exactly one
    /// of each (suit, rank) pair. Fresh deals always pass; adopted pile
    /// lists ([`from_piles`](Self::from_piles)) are only checked when the
    /// caller opts in here.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: [`ValidateError::WrongPileCount`],
    /// [`ValidateError::UnexpectedPile`], [`ValidateError::DuplicateCard`],
    /// or [`ValidateError::MissingCards`].
    pub fn validate(&self) -> Result<(), ValidateError> {
        if self.piles.len() != PILE_COUNT {
            return Err(ValidateError::WrongPileCount);
        }

        for (index, pile) in self.piles.iter().enumerate() {
            let (kind, number) = expected_slot(index);
            if pile.kind != kind || pile.number != number {
                return Err(ValidateError::UnexpectedPile);
            }
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let mut total = 0_usize;

        for pile in &self.piles {
            for card in pile {
                if !seen.insert((card.suit, card.rank)) {
                    return Err(ValidateError::DuplicateCard);
                }
                total += 1;
            }
        }

        // All cards are distinct at this point, so a count of 52 means the
        // full deck is present.
        if total != DECK_SIZE {
            return Err(ValidateError::MissingCards);
        }

        Ok(())
    }
}
