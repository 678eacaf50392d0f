//! Winning lines and threat detection.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Place, PlaceSet, Side, SideMap};

const fn line(a: u8, b: u8, c: u8) -> [Place; 3] {
    [Place::new_unchecked(a), Place::new_unchecked(b), Place::new_unchecked(c)]
}

/// The 8 triples that win, in evaluation order.
pub const WINNING_LINES: [[Place; 3]; 8] = [
    line(1, 2, 3),
    line(4, 5, 6),
    line(7, 8, 9), // rows
    line(1, 4, 7),
    line(2, 5, 8),
    line(3, 6, 9), // columns
    line(1, 5, 9),
    line(3, 5, 7), // diagonals
];

/// Iterate over the winning lines as place sets.
pub fn line_sets() -> impl Iterator<Item = PlaceSet> {
    WINNING_LINES.iter().map(|line| line.iter().copied().collect())
}

/// Blank places that would complete a line for each side if claimed next.
///
/// A place may be a threat for both sides at once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threats {
    sets: SideMap<PlaceSet>,
}

impl Threats {
    /// Threat set for a side.
    #[must_use]
    pub fn for_side(&self, side: Side) -> PlaceSet {
        self.sets[side]
    }

    /// Places where the human would complete a line.
    #[must_use]
    pub fn player(&self) -> PlaceSet {
        self.sets[Side::Player]
    }

    /// Places where the computer would complete a line.
    #[must_use]
    pub fn computer(&self) -> PlaceSet {
        self.sets[Side::Computer]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.player().is_empty() && self.computer().is_empty()
    }
}

/// Recompute both sides' threat sets from scratch.
///
/// For every line where a side holds exactly two places, the third place is
/// a threat if neither side holds it.
#[must_use]
pub fn compute_threats(board: &Board) -> Threats {
    let occupied = board.occupied();
    let mut threats = Threats::default();

    for line in line_sets() {
        for side in Side::BOTH {
            if line.intersection(board.marks(side)).len() != 2 {
                continue;
            }
            let gap = line.difference(occupied);
            if gap.len() == 1 {
                for place in gap.iter() {
                    threats.sets[side].insert(place);
                }
            }
        }
    }

    threats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    fn p(raw: i64) -> Place {
        Place::new(raw).unwrap()
    }

    fn raw(set: PlaceSet) -> Vec<u8> {
        set.iter().map(Place::get).collect()
    }

    /// Board with the human playing X, placing the given moves in order.
    fn board_with(player: &[i64], computer: &[i64]) -> Board {
        let mut board = Board::new(Symbol::X);
        for &place in player {
            board.set_symbol(p(place), Symbol::X).unwrap();
        }
        for &place in computer {
            board.set_symbol(p(place), Symbol::O).unwrap();
        }
        board
    }

    #[test]
    fn test_line_table_shape() {
        assert_eq!(WINNING_LINES.len(), 8);
        assert!(line_sets().all(|set| set.len() == 3));

        let center = p(5);
        let through_center = line_sets().filter(|set| set.contains(center)).count();
        assert_eq!(through_center, 4);
    }

    #[test]
    fn test_empty_board_has_no_threats() {
        let threats = compute_threats(&Board::new(Symbol::X));
        assert!(threats.is_empty());
    }

    #[test]
    fn test_computer_pair_threatens_third() {
        // O.O at 1,2 -> 3 completes the top row
        let board = board_with(&[5], &[1, 2]);
        let threats = compute_threats(&board);

        assert!(threats.computer().contains(p(3)));
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        // X X O across the top row
        let board = board_with(&[1, 2], &[3]);
        let threats = compute_threats(&board);

        assert!(!threats.player().contains(p(3)));
        assert!(threats.player().is_empty());
    }

    #[test]
    fn test_multiple_threats_for_one_side() {
        // X at 1, 5 -> threat at 9 (diagonal); X at 1, 2 -> threat at 3
        let board = board_with(&[1, 2, 5], &[]);
        let threats = compute_threats(&board);

        assert_eq!(raw(threats.player()), vec![3, 8, 9]);
        assert!(threats.computer().is_empty());
    }

    #[test]
    fn test_double_threat_cell() {
        // X at 1,2 wants 3; O at 6,9 also wants 3
        let board = board_with(&[1, 2], &[6, 9]);
        let threats = compute_threats(&board);

        assert!(threats.player().contains(p(3)));
        assert!(threats.computer().contains(p(3)));
    }

    #[test]
    fn test_threats_serialization() {
        let board = board_with(&[1, 2], &[]);
        let threats = compute_threats(&board);

        let json = serde_json::to_string(&threats).unwrap();
        let back: Threats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, threats);
    }
}
