//! Fresh-deal example: deals a new game and prints the tableau grid.

use std::env;

use klrs::{GameState, Pile};

fn main() {
    let game = match env::args().nth(1).and_then(|arg| arg.parse().ok()) {
        Some(seed) => GameState::with_seed(seed),
        None => GameState::new(),
    };

    println!("{game}");
    println!(
        "Stock: {} cards, waste: {}, foundations: {}",
        game.stock().map_or(0, Pile::len),
        game.waste().map_or(0, Pile::len),
        game.foundations().iter().map(Pile::len).sum::<usize>(),
    );
}
