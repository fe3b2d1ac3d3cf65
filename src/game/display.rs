//! Text rendering of the tableau layout, for console display and debugging.

use alloc::vec::Vec;
use core::fmt;

use crate::pile::Pile;

use super::GameState;

const SEPARATOR: &str = "   ";

impl GameState {
    /// Returns the tableau with the most cards, ties going to the lowest
    /// pile number.
    fn largest_tableau(&self) -> Option<&Pile> {
        let mut largest: Option<&Pile> = None;
        for tableau in self.tableaus() {
            if largest.is_none_or(|pile| tableau.len() > pile.len()) {
                largest = Some(tableau);
            }
        }
        largest
    }
}

/// Renders the tableaus as a text grid: one row per card-row, one column
/// per tableau. Each cell is the card's display name padded to the
/// column's widest name, followed by a three-space separator; tableaus
/// shorter than the current row render as blank padding.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tableaus = self.tableaus();
        let widths: Vec<usize> = tableaus
            .iter()
            .map(|tableau| {
                tableau
                    .iter()
                    .map(|card| card.display_name().len())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rows = self.largest_tableau().map_or(0, Pile::len);

        for row in 0..rows {
            for (col, tableau) in tableaus.iter().enumerate() {
                let width = widths[col];
                match tableau.get(row) {
                    Some(card) => {
                        let name = card.display_name();
                        write!(f, "{name:<width$}{SEPARATOR}")?;
                    }
                    None => write!(f, "{:width$}{SEPARATOR}", "")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
