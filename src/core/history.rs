//! Move history.
//!
//! Every applied move is recorded with the side that made it, so a finished
//! game can be logged or replayed move by move.

use serde::{Deserialize, Serialize};

use super::place::{Place, Side, Symbol};

/// A recorded move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    /// The cell that was marked.
    pub place: Place,

    /// The symbol written into the cell.
    pub symbol: Symbol,

    /// 1-based move number across both sides.
    pub number: u8,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(side: Side, place: Place, symbol: Symbol, number: u8) -> Self {
        Self {
            side,
            place,
            symbol,
            number,
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} {} at {}", self.number, self.side, self.symbol, self.place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record_display() {
        let record = MoveRecord::new(Side::Computer, Place::new(5).unwrap(), Symbol::O, 2);
        assert_eq!(record.to_string(), "#2 computer O at 5");
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Side::Player, Place::new(1).unwrap(), Symbol::X, 1);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
