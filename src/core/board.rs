//! Board state.
//!
//! Cells live in a fixed 9-slot array indexed by `place - 1`. Alongside the
//! cells the board keeps each side's occupied places, which is what threat
//! and outcome evaluation actually read.
//!
//! Invariants maintained by `set_symbol`:
//! - a cell goes from blank to a symbol at most once
//! - the two sides' marks are disjoint
//! - marks and cells always agree

use serde::{Deserialize, Serialize};

use super::history::MoveRecord;
use super::place::{Place, PlaceSet, Side, SideMap, Symbol};
use crate::error::{Error, Result};

const ROW_SEPARATOR: &str = "----------";

/// 3x3 board with per-side occupancy tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Symbol>; 9],
    symbols: SideMap<Symbol>,
    marks: SideMap<PlaceSet>,
    history: Vec<MoveRecord>,
}

impl Board {
    /// Create an empty board. The computer plays the other symbol.
    #[must_use]
    pub fn new(player_symbol: Symbol) -> Self {
        Self {
            cells: [None; 9],
            symbols: SideMap::new(|side| match side {
                Side::Player => player_symbol,
                Side::Computer => player_symbol.other(),
            }),
            marks: SideMap::with_default(),
            history: Vec::new(),
        }
    }

    /// Symbol played by a side.
    #[must_use]
    pub fn symbol_of(&self, side: Side) -> Symbol {
        self.symbols[side]
    }

    /// Side playing a symbol.
    #[must_use]
    pub fn side_of(&self, symbol: Symbol) -> Side {
        if symbol == self.symbols[Side::Computer] {
            Side::Computer
        } else {
            Side::Player
        }
    }

    /// Symbol at a place, `None` if blank.
    #[must_use]
    pub fn symbol_at(&self, place: Place) -> Option<Symbol> {
        self.cells[place.index()]
    }

    #[must_use]
    pub fn is_blank(&self, place: Place) -> bool {
        self.symbol_at(place).is_none()
    }

    /// Mark a blank cell and record it for the owning side.
    ///
    /// Returns the side that owns `symbol`. Fails with `CellOccupied` if the
    /// cell already holds a symbol; the board is left unchanged.
    pub fn set_symbol(&mut self, place: Place, symbol: Symbol) -> Result<Side> {
        if !self.is_blank(place) {
            return Err(Error::CellOccupied { place: place.get() });
        }

        let side = self.side_of(symbol);
        self.cells[place.index()] = Some(symbol);
        self.marks[side].insert(place);

        let number = self.history.len() as u8 + 1;
        self.history.push(MoveRecord::new(side, place, symbol, number));

        Ok(side)
    }

    /// Places occupied by a side.
    #[must_use]
    pub fn marks(&self, side: Side) -> PlaceSet {
        self.marks[side]
    }

    /// Places occupied by either side.
    #[must_use]
    pub fn occupied(&self) -> PlaceSet {
        self.marks[Side::Player].union(self.marks[Side::Computer])
    }

    /// Places still blank.
    #[must_use]
    pub fn blanks(&self) -> PlaceSet {
        PlaceSet::full().difference(self.occupied())
    }

    /// Number of moves made so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.occupied().len()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.move_count() == 9
    }

    /// Moves in the order they were applied.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Header line naming both symbols, e.g. `Player - X , Computer - O`.
    #[must_use]
    pub fn header(&self) -> String {
        format!(
            "Player - {} , Computer - {}",
            self.symbols[Side::Player],
            self.symbols[Side::Computer]
        )
    }

    /// The grid with separators; blank cells show their place number.
    #[must_use]
    pub fn render_grid(&self) -> String {
        let mut out = String::new();
        for row in Place::all().collect::<Vec<_>>().chunks(3) {
            out.push_str(ROW_SEPARATOR);
            out.push('\n');
            let cells: Vec<String> = row
                .iter()
                .map(|&place| match self.symbol_at(place) {
                    Some(symbol) => symbol.to_string(),
                    None => place.to_string(),
                })
                .collect();
            out.push_str(&cells.join(" | "));
            out.push('\n');
        }
        out.push_str(ROW_SEPARATOR);
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_grid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: i64) -> Place {
        Place::new(raw).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(Symbol::X);

        assert_eq!(board.move_count(), 0);
        assert_eq!(board.blanks().len(), 9);
        assert!(Place::all().all(|place| board.is_blank(place)));
        assert_eq!(board.symbol_of(Side::Player), Symbol::X);
        assert_eq!(board.symbol_of(Side::Computer), Symbol::O);
    }

    #[test]
    fn test_set_symbol_records_owner() {
        let mut board = Board::new(Symbol::O);

        assert_eq!(board.set_symbol(p(5), Symbol::O).unwrap(), Side::Player);
        assert_eq!(board.set_symbol(p(1), Symbol::X).unwrap(), Side::Computer);

        assert!(board.marks(Side::Player).contains(p(5)));
        assert!(board.marks(Side::Computer).contains(p(1)));
        assert_eq!(board.symbol_at(p(5)), Some(Symbol::O));
        assert_eq!(board.move_count(), 2);
    }

    #[test]
    fn test_set_symbol_rejects_occupied() {
        let mut board = Board::new(Symbol::X);
        board.set_symbol(p(3), Symbol::X).unwrap();

        let err = board.set_symbol(p(3), Symbol::O).unwrap_err();
        assert!(matches!(err, Error::CellOccupied { place: 3 }));

        // Unchanged: still the player's mark, computer owns nothing
        assert_eq!(board.symbol_at(p(3)), Some(Symbol::X));
        assert!(board.marks(Side::Computer).is_empty());
        assert_eq!(board.history().len(), 1);
    }

    #[test]
    fn test_history_numbers_moves() {
        let mut board = Board::new(Symbol::X);
        board.set_symbol(p(1), Symbol::X).unwrap();
        board.set_symbol(p(9), Symbol::O).unwrap();

        let history = board.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], MoveRecord::new(Side::Player, p(1), Symbol::X, 1));
        assert_eq!(history[1], MoveRecord::new(Side::Computer, p(9), Symbol::O, 2));
    }

    #[test]
    fn test_render_empty_grid() {
        let board = Board::new(Symbol::X);
        let expected = "----------\n\
                        1 | 2 | 3\n\
                        ----------\n\
                        4 | 5 | 6\n\
                        ----------\n\
                        7 | 8 | 9\n\
                        ----------\n";
        assert_eq!(board.render_grid(), expected);
    }

    #[test]
    fn test_render_marks_and_header() {
        let mut board = Board::new(Symbol::X);
        board.set_symbol(p(1), Symbol::X).unwrap();
        board.set_symbol(p(5), Symbol::O).unwrap();

        let grid = board.to_string();
        assert!(grid.contains("X | 2 | 3"));
        assert!(grid.contains("4 | O | 6"));
        assert_eq!(board.header(), "Player - X , Computer - O");
    }
}
