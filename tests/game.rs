//! Game integration tests.

use std::collections::HashSet;

use klrs::{
    Card, CardError, Color, DECK_SIZE, FOUNDATION_COUNT, GameState, PILE_COUNT, Pile, PileError,
    PileKind, Position, Rank, STOCK_SIZE, Suit, TABLEAU_COUNT, ValidateError,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Rebuilds a game's piles as an owned list so fixtures can tamper with
/// individual piles.
fn piles_of(game: &GameState) -> Vec<Pile> {
    game.piles().to_vec()
}

/// Rebuilds one pile with a replacement card list, keeping kind and number.
fn rebuild(pile: &Pile, cards: Vec<Card>) -> Pile {
    Pile::with_cards(pile.kind, cards, pile.number)
}

#[test]
fn fresh_deal_contains_full_deck() {
    let game = GameState::with_seed(1);
    assert!(game.validate().is_ok());

    let mut seen = HashSet::new();
    let mut total = 0;
    for pile in game.piles() {
        for card in pile {
            assert!(seen.insert((card.suit, card.rank)));
            total += 1;
        }
    }
    assert_eq!(total, DECK_SIZE);
}

#[test]
fn fresh_deal_layout_and_sizes() {
    let game = GameState::with_seed(2);
    let piles = game.piles();
    assert_eq!(piles.len(), PILE_COUNT);

    for number in 0..TABLEAU_COUNT {
        let pile = &piles[number];
        assert_eq!(pile.kind, PileKind::Tableau);
        assert_eq!(pile.number, Some(number as u8));
        assert_eq!(pile.len(), number + 1);
    }

    let stock = game.stock().unwrap();
    assert_eq!(stock.kind, PileKind::Stock);
    assert_eq!(stock.number, None);
    assert_eq!(stock.len(), STOCK_SIZE);

    let waste = game.waste().unwrap();
    assert_eq!(waste.kind, PileKind::Waste);
    assert_eq!(waste.number, None);
    assert!(waste.is_empty());

    let foundations = game.foundations();
    assert_eq!(foundations.len(), FOUNDATION_COUNT);
    for (number, pile) in foundations.iter().enumerate() {
        assert_eq!(pile.kind, PileKind::Foundation);
        assert_eq!(pile.number, Some(number as u8));
        assert!(pile.is_empty());
    }

    // 28 tableau cards plus the 24-card stock account for the whole deck.
    let tableau_cards: usize = game.tableaus().iter().map(Pile::len).sum();
    assert_eq!(tableau_cards + stock.len(), DECK_SIZE);
}

#[test]
fn every_card_is_stamped_with_pile_and_index() {
    let game = GameState::with_seed(3);
    for pile in game.piles() {
        for (index, card) in pile.iter().enumerate() {
            assert_eq!(
                card.position(),
                Some(Position {
                    pile: pile.number,
                    index
                })
            );
        }
    }

    // Stock cards carry no pile number.
    let stock = game.stock().unwrap();
    for card in stock {
        assert_eq!(card.position().unwrap().pile, None);
    }
}

#[test]
fn card_colors_and_names() {
    let king = card(Suit::Spades, Rank::King);
    assert_eq!(king.color(), Color::Black);
    assert_eq!(king.display_name(), "King of Spades");

    let ace = card(Suit::Hearts, Rank::Ace);
    assert_eq!(ace.color(), Color::Red);
    assert_eq!(ace.display_name(), "Ace of Hearts");

    let ten = card(Suit::Clubs, Rank::Ten);
    assert_eq!(ten.image_filename(), "10_of_clubs.png");
    assert_eq!(ten.display_name(), "10 of Clubs");

    let queen = card(Suit::Diamonds, Rank::Queen);
    assert_eq!(queen.image_filename(), "queen_of_diamonds.png");
    assert!(!queen.face_up);
}

#[test]
fn malformed_names_are_rejected() {
    assert_eq!(
        Card::from_names("joker", "ace").unwrap_err(),
        CardError::InvalidSuit
    );
    assert_eq!(
        Card::from_names("hearts", "14").unwrap_err(),
        CardError::InvalidRank
    );
    assert_eq!(
        Card::from_names("Hearts", "ace").unwrap_err(),
        CardError::InvalidSuit
    );

    let ace = Card::from_names("spades", "ace").unwrap();
    assert_eq!(ace.image_filename(), "ace_of_spades.png");
}

#[test]
fn seeded_deals_are_reproducible() {
    let a = GameState::with_seed(7);
    let b = GameState::with_seed(7);
    for (pa, pb) in a.piles().iter().zip(b.piles()) {
        assert_eq!(pa.cards(), pb.cards());
    }
}

#[test]
fn different_seeds_shuffle_differently() {
    let mut any_differ = false;
    let baseline = GameState::with_seed(0);
    for seed in 1..32 {
        let other = GameState::with_seed(seed);
        if other.tableaus()[0].cards() != baseline.tableaus()[0].cards() {
            any_differ = true;
            break;
        }
    }
    assert!(any_differ);
}

#[test]
fn fresh_deals_shuffle_differently() {
    let mut any_differ = false;
    let baseline = GameState::new();
    for _ in 0..16 {
        let other = GameState::new();
        if other
            .piles()
            .iter()
            .zip(baseline.piles())
            .any(|(a, b)| a.cards() != b.cards())
        {
            any_differ = true;
            break;
        }
    }
    assert!(any_differ);
}

#[test]
fn tableaus_are_the_first_seven_piles() {
    let game = GameState::with_seed(4);
    let tableaus = game.tableaus();
    assert_eq!(tableaus.len(), TABLEAU_COUNT);
    for (view, pile) in tableaus.iter().zip(&game.piles()[..TABLEAU_COUNT]) {
        assert_eq!(view.cards(), pile.cards());
    }

    // Emptying the stock leaves the tableau view untouched.
    let mut piles = piles_of(&game);
    piles[TABLEAU_COUNT] = rebuild(&piles[TABLEAU_COUNT], Vec::new());
    let emptied = GameState::from_piles(piles);
    for (before, after) in game.tableaus().iter().zip(emptied.tableaus()) {
        assert_eq!(before.cards(), after.cards());
    }
}

#[test]
fn pile_indexing_and_iteration() {
    let cards = vec![
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Two),
        card(Suit::Clubs, Rank::Three),
    ];
    let pile = Pile::with_cards(PileKind::Tableau, cards, Some(0));

    assert_eq!(pile.len(), 3);
    assert_eq!(pile.card(0).unwrap().rank, Rank::Ace);
    assert_eq!(pile.card(2).unwrap().rank, Rank::Three);
    assert_eq!(pile.card(3).unwrap_err(), PileError::IndexOutOfRange);
    assert_eq!(pile.get(3), None);
    assert_eq!(pile.top().unwrap().rank, Rank::Three);

    // Re-iterating an unchanged pile yields the same sequence.
    let first: Vec<_> = pile.iter().collect();
    let second: Vec<_> = pile.iter().collect();
    assert_eq!(first, second);

    let empty = Pile::new(PileKind::Waste);
    assert!(empty.is_empty());
    assert_eq!(empty.top(), None);
    assert_eq!(empty.card(0).unwrap_err(), PileError::IndexOutOfRange);
}

#[test]
fn update_card_positions_restamps_in_insertion_order() {
    let cards = vec![
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Two),
    ];
    let mut pile = Pile::with_cards(PileKind::Foundation, cards, Some(2));

    assert_eq!(pile.card(0).unwrap().position(), None);
    pile.update_card_positions();
    assert_eq!(
        pile.card(0).unwrap().position(),
        Some(Position {
            pile: Some(2),
            index: 0
        })
    );
    assert_eq!(
        pile.card(1).unwrap().position(),
        Some(Position {
            pile: Some(2),
            index: 1
        })
    );

    // A card adopted by another pile is restamped with the new slot.
    let moved = *pile.card(1).unwrap();
    let mut other = Pile::with_cards(PileKind::Tableau, vec![moved], Some(5));
    other.update_card_positions();
    assert_eq!(
        other.card(0).unwrap().position(),
        Some(Position {
            pile: Some(5),
            index: 0
        })
    );
}

#[test]
fn from_piles_adopts_without_validation() {
    // A partial layout is accepted as-is; validation is opt-in.
    let piles = vec![Pile::with_cards(
        PileKind::Tableau,
        vec![card(Suit::Hearts, Rank::Ace)],
        Some(0),
    )];
    let game = GameState::from_piles(piles);
    assert_eq!(game.piles().len(), 1);
    assert_eq!(game.validate().unwrap_err(), ValidateError::WrongPileCount);

    // Adoption still stamps card positions.
    assert_eq!(
        game.piles()[0].card(0).unwrap().position(),
        Some(Position {
            pile: Some(0),
            index: 0
        })
    );
}

#[test]
fn validate_flags_duplicates_and_shortfalls() {
    let game = GameState::with_seed(5);

    // Duplicate a stock card.
    let mut piles = piles_of(&game);
    let mut cards = piles[TABLEAU_COUNT].cards().to_vec();
    cards[0] = cards[1];
    piles[TABLEAU_COUNT] = rebuild(&piles[TABLEAU_COUNT], cards);
    let duplicated = GameState::from_piles(piles);
    assert_eq!(
        duplicated.validate().unwrap_err(),
        ValidateError::DuplicateCard
    );

    // Drop a stock card.
    let mut piles = piles_of(&game);
    let mut cards = piles[TABLEAU_COUNT].cards().to_vec();
    cards.pop();
    piles[TABLEAU_COUNT] = rebuild(&piles[TABLEAU_COUNT], cards);
    let short = GameState::from_piles(piles);
    assert_eq!(short.validate().unwrap_err(), ValidateError::MissingCards);

    // Put a waste pile in the stock slot.
    let mut piles = piles_of(&game);
    piles[TABLEAU_COUNT] = Pile::with_cards(
        PileKind::Waste,
        piles[TABLEAU_COUNT].cards().to_vec(),
        None,
    );
    let misplaced = GameState::from_piles(piles);
    assert_eq!(
        misplaced.validate().unwrap_err(),
        ValidateError::UnexpectedPile
    );
}

#[test]
fn display_renders_padded_tableau_grid() {
    let mut piles = vec![
        Pile::with_cards(
            PileKind::Tableau,
            vec![card(Suit::Spades, Rank::Ace)],
            Some(0),
        ),
        Pile::with_cards(
            PileKind::Tableau,
            vec![card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Ten)],
            Some(1),
        ),
    ];
    for number in 2..TABLEAU_COUNT {
        piles.push(Pile::numbered(PileKind::Tableau, number as u8));
    }
    piles.push(Pile::new(PileKind::Stock));
    piles.push(Pile::new(PileKind::Waste));
    for number in 0..FOUNDATION_COUNT {
        piles.push(Pile::numbered(PileKind::Foundation, number as u8));
    }

    let game = GameState::from_piles(piles);

    // Column 0 is "Ace of Spades" wide (13), column 1 is "2 of Hearts" /
    // "10 of Clubs" wide (11), the empty columns contribute only the
    // three-space separator.
    let empty_cols = "   ".repeat(5);
    let expected = format!(
        "{a:<13}   {b:<11}   {empty_cols}\n{blank:<13}   {c:<11}   {empty_cols}\n",
        a = "Ace of Spades",
        b = "2 of Hearts",
        c = "10 of Clubs",
        blank = "",
    );
    assert_eq!(game.to_string(), expected);
}

#[test]
fn display_of_fresh_deal_has_one_row_per_card_row() {
    let game = GameState::with_seed(6);
    let text = game.to_string();
    // The largest tableau has seven cards, so the grid has seven rows.
    assert_eq!(text.lines().count(), TABLEAU_COUNT);
    for line in text.lines() {
        assert!(line.ends_with("   "));
    }
}
