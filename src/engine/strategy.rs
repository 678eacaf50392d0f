//! Computer move selection.
//!
//! Priority order, each tier broken uniformly at random by the injected
//! `Chooser`:
//! 1. complete one of the computer's own lines
//! 2. block one of the human's lines
//! 3. any blank cell
//!
//! There is no lookahead beyond the next move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Chooser, Place, PlaceSet};
use crate::error::{Error, Result};
use crate::rules::Threats;

/// Why the computer picked a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementReason {
    /// Completes a computer line.
    Win,
    /// Denies a human line.
    Block,
    /// No threat on the board; any blank cell.
    Open,
}

impl std::fmt::Display for PlacementReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementReason::Win => write!(f, "win"),
            PlacementReason::Block => write!(f, "block"),
            PlacementReason::Open => write!(f, "open"),
        }
    }
}

/// A chosen computer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub place: Place,
    pub reason: PlacementReason,
}

/// The candidate tier the computer will choose from.
#[must_use]
pub fn candidates(board: &Board, threats: &Threats) -> (PlacementReason, PlaceSet) {
    if !threats.computer().is_empty() {
        (PlacementReason::Win, threats.computer())
    } else if !threats.player().is_empty() {
        (PlacementReason::Block, threats.player())
    } else {
        (PlacementReason::Open, board.blanks())
    }
}

/// Pick the computer's next cell.
///
/// `threats` should be freshly computed for `board`. Fails with
/// `NoCandidateMoves` when the board has no blank cells left.
pub fn choose_next_placement<C>(board: &Board, threats: &Threats, chooser: &mut C) -> Result<Placement>
where
    C: Chooser + ?Sized,
{
    let (reason, tier) = candidates(board, threats);
    let pool: SmallVec<[Place; 9]> = tier.iter().collect();

    let place = chooser
        .choose_place(&pool)
        .ok_or(Error::NoCandidateMoves)?;

    Ok(Placement { place, reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Symbol};
    use crate::rules::compute_threats;

    fn p(raw: i64) -> Place {
        Place::new(raw).unwrap()
    }

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
    fn test_open_board_offers_all_blanks() {
        let board = board_with(&[5], &[]);
        let threats = compute_threats(&board);

        let (reason, tier) = candidates(&board, &threats);
        assert_eq!(reason, PlacementReason::Open);
        assert_eq!(tier.len(), 8);
        assert!(!tier.contains(p(5)));
    }

    #[test]
    fn test_win_beats_block() {
        // Human threatens 3 (row), computer threatens 6 (column 4-5-6 via 4,5)
        let board = board_with(&[1, 2, 9], &[4, 5]);
        let threats = compute_threats(&board);
        assert!(!threats.player().is_empty());

        let mut rng = GameRng::new(3);
        for _ in 0..20 {
            let placement = choose_next_placement(&board, &threats, &mut rng).unwrap();
            assert_eq!(placement.reason, PlacementReason::Win);
            assert!(threats.computer().contains(placement.place));
        }
    }

    #[test]
    fn test_block_when_no_win() {
        let board = board_with(&[1, 2], &[5]);
        let threats = compute_threats(&board);

        let mut rng = GameRng::new(11);
        let placement = choose_next_placement(&board, &threats, &mut rng).unwrap();
        assert_eq!(placement, Placement { place: p(3), reason: PlacementReason::Block });
    }

    #[test]
    fn test_candidates_are_ascending() {
        let board = board_with(&[1], &[]);
        let threats = compute_threats(&board);

        let mut seen = Vec::new();
        let mut record = |c: &[Place]| {
            seen.extend_from_slice(c);
            c.last().copied()
        };
        let placement = choose_next_placement(&board, &threats, &mut record).unwrap();

        assert_eq!(placement.place, p(9));
        let raw: Vec<u8> = seen.iter().map(|p| p.get()).collect();
        assert_eq!(raw, vec![2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let board = board_with(&[2, 5, 6, 7], &[1, 3, 4, 8, 9]);
        let threats = compute_threats(&board);

        let mut rng = GameRng::new(1);
        let err = choose_next_placement(&board, &threats, &mut rng).unwrap_err();
        assert!(matches!(err, Error::NoCandidateMoves));
    }
}
