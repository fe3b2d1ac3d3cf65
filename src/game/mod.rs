//! Game state and the initial deal.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::pile::Pile;

mod deal;
mod display;
mod validate;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Total number of piles on the table: 7 tableaus, stock, waste, and
/// 4 foundations, in that fixed order.
pub const PILE_COUNT: usize = TABLEAU_COUNT + 2 + FOUNDATION_COUNT;

/// Cards left for the stock after the tableaus take 1 + 2 + … + 7 = 28.
pub const STOCK_SIZE: usize = 24;

/// The full state of a Klondike game: all piles, in fixed layout order.
///
/// The layout is piles 0–6 = tableaus 0–6, pile 7 = stock, pile 8 = waste,
/// piles 9–12 = foundations 0–3. A renderer reads the piles through
/// [`piles`](Self::piles) and must mutate cards only through pile
/// operations.
///
/// # Example
///
/// ```
/// use klrs::{GameState, STOCK_SIZE};
///
/// let game = GameState::with_seed(42);
/// assert_eq!(game.tableaus().len(), 7);
/// assert_eq!(game.stock().map(klrs::Pile::len), Some(STOCK_SIZE));
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    piles: Vec<Pile>,
}

impl GameState {
    /// Deals a fresh game from a uniformly shuffled deck.
    ///
    /// Every call shuffles from OS entropy and yields an independent
    /// permutation. Use [`with_seed`](Self::with_seed) for a reproducible
    /// deal.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new() -> Self {
        Self::deal_with(&mut rand::rng())
    }

    /// Deals a fresh game from a deck shuffled with the given seed.
    ///
    /// The same seed always produces the same deal.
    ///
    /// # Example
    ///
    /// ```
    /// use klrs::GameState;
    ///
    /// let a = GameState::with_seed(7);
    /// let b = GameState::with_seed(7);
    /// assert_eq!(a.tableaus()[0].cards(), b.tableaus()[0].cards());
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::deal_with(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Adopts an externally supplied pile list as-is.
    ///
    /// No deck-completeness check is performed, so partial decks (test
    /// fixtures, future save/load) are accepted; call
    /// [`validate`](Self::validate) to opt into the full check. Card
    /// positions are stamped once, after the piles are adopted.
    #[must_use]
    pub fn from_piles(piles: Vec<Pile>) -> Self {
        let mut state = Self { piles };
        state.update_all_card_positions();
        state
    }

    /// Stamps positions on every pile, in layout order.
    fn update_all_card_positions(&mut self) {
        for pile in &mut self.piles {
            pile.update_card_positions();
        }
    }

    /// Returns all piles in fixed layout order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Returns the tableau piles: a view of the first seven piles.
    #[must_use]
    pub fn tableaus(&self) -> &[Pile] {
        let end = self.piles.len().min(TABLEAU_COUNT);
        &self.piles[..end]
    }

    /// Returns the stock pile, if present.
    #[must_use]
    pub fn stock(&self) -> Option<&Pile> {
        self.piles.get(TABLEAU_COUNT)
    }

    /// Returns the waste pile, if present.
    #[must_use]
    pub fn waste(&self) -> Option<&Pile> {
        self.piles.get(TABLEAU_COUNT + 1)
    }

    /// Returns the foundation piles: a view of the last four piles.
    #[must_use]
    pub fn foundations(&self) -> &[Pile] {
        self.piles.get(TABLEAU_COUNT + 2..).unwrap_or(&[])
    }
}

#[cfg(feature = "std")]
impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
