//! Deck generation and the initial deal.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::pile::{Pile, PileKind};

use super::{FOUNDATION_COUNT, GameState, PILE_COUNT, TABLEAU_COUNT};

impl GameState {
    /// Generates the 52-card deck in canonical suit-major order, then
    /// shuffles it uniformly in place.
    fn random_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Deals a shuffled deck into the fixed 13-pile layout.
    ///
    /// Cards are consumed strictly left to right: tableau `n` takes
    /// `n + 1` cards (28 in total), the stock takes the remaining 24, and
    /// the waste and foundations start empty.
    pub(super) fn deal_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::random_deck(rng).into_iter();
        let mut piles = Vec::with_capacity(PILE_COUNT);

        for number in 0..TABLEAU_COUNT {
            let cards = deck.by_ref().take(number + 1).collect();
            piles.push(Pile::with_cards(PileKind::Tableau, cards, Some(number as u8)));
        }

        piles.push(Pile::with_cards(PileKind::Stock, deck.collect(), None));
        piles.push(Pile::new(PileKind::Waste));

        for number in 0..FOUNDATION_COUNT {
            piles.push(Pile::numbered(PileKind::Foundation, number as u8));
        }

        let mut state = Self { piles };
        state.update_all_card_positions();

        debug_assert!(state.validate().is_ok());
        state
    }
}
