//! Places, symbols, and sides.
//!
//! ## Place
//!
//! Validated cell identifier 1-9, laid out row by row:
//!
//! ```text
//! 1 | 2 | 3
//! 4 | 5 | 6
//! 7 | 8 | 9
//! ```
//!
//! ## PlaceSet
//!
//! Small bit set of places. Iteration is always in ascending place order,
//! which keeps seeded move selection reproducible.
//!
//! ## Side / SideMap
//!
//! The two participants and per-side storage with O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// A cell identifier in `1..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Place(u8);

impl Place {
    /// Lowest valid place.
    pub const MIN: u8 = 1;
    /// Highest valid place.
    pub const MAX: u8 = 9;

    /// Validate a raw integer as a place.
    ///
    /// ```
    /// use rust_ttt::core::Place;
    ///
    /// assert_eq!(Place::new(5).unwrap().get(), 5);
    /// assert!(Place::new(0).is_err());
    /// assert!(Place::new(10).is_err());
    /// ```
    pub fn new(raw: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&raw) {
            Ok(Self(raw as u8))
        } else {
            Err(Error::InvalidPlace { place: raw })
        }
    }

    /// Build a place from a literal known to be in range.
    pub(crate) const fn new_unchecked(raw: u8) -> Self {
        assert!(raw >= Self::MIN && raw <= Self::MAX, "place out of range");
        Self(raw)
    }

    /// The raw 1-based identifier.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot index (`place - 1`).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Zero-based row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    /// Zero-based column.
    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % 3
    }

    /// All nine places in ascending order.
    pub fn all() -> impl Iterator<Item = Place> {
        (Self::MIN..=Self::MAX).map(Place)
    }
}

impl TryFrom<u8> for Place {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self> {
        Self::new(i64::from(raw))
    }
}

impl From<Place> for u8 {
    fn from(place: Place) -> u8 {
        place.0
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of places backed by a bit mask (bit `n` = place `n`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceSet(u16);

impl PlaceSet {
    const FULL: u16 = 0b11_1111_1110;

    /// Empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Set holding every place.
    #[must_use]
    pub const fn full() -> Self {
        Self(Self::FULL)
    }

    /// Insert a place. Returns true if it was not already present.
    pub fn insert(&mut self, place: Place) -> bool {
        let bit = 1 << place.get();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[must_use]
    pub const fn contains(self, place: Place) -> bool {
        self.0 & (1 << place.get()) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Places in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Place> {
        Place::all().filter(move |&p| self.contains(p))
    }
}

impl FromIterator<Place> for PlaceSet {
    fn from_iter<I: IntoIterator<Item = Place>>(iter: I) -> Self {
        let mut set = PlaceSet::new();
        for place in iter {
            set.insert(place);
        }
        set
    }
}

/// A mark on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// The symbol the other side plays.
    #[must_use]
    pub const fn other(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }

    /// Parse an upper-case `X` or `O`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Symbol> {
        match c {
            'X' => Some(Symbol::X),
            'O' => Some(Symbol::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One of the two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The human at the keyboard.
    Player,
    /// The engine's heuristic opponent.
    Computer,
}

impl Side {
    /// Both sides, player first.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Computer];

    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Computer => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Per-side data storage.
///
/// ```
/// use rust_ttt::core::{Side, SideMap};
///
/// let mut moves: SideMap<u32> = SideMap::with_value(0);
/// moves[Side::Computer] += 1;
/// assert_eq!(moves[Side::Player], 0);
/// assert_eq!(moves[Side::Computer], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Computer)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_bounds() {
        assert!(Place::new(1).is_ok());
        assert!(Place::new(9).is_ok());
        assert!(matches!(Place::new(0), Err(Error::InvalidPlace { place: 0 })));
        assert!(matches!(Place::new(10), Err(Error::InvalidPlace { place: 10 })));
        assert!(matches!(Place::new(-3), Err(Error::InvalidPlace { place: -3 })));
    }

    #[test]
    fn test_place_coordinates() {
        let p = Place::new(6).unwrap();
        assert_eq!(p.index(), 5);
        assert_eq!(p.row(), 1);
        assert_eq!(p.col(), 2);

        let corner = Place::new(7).unwrap();
        assert_eq!((corner.row(), corner.col()), (2, 0));
    }

    #[test]
    fn test_place_all() {
        let raw: Vec<u8> = Place::all().map(Place::get).collect();
        assert_eq!(raw, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_place_serde_validates() {
        let p = Place::new(4).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "4");
        assert_eq!(serde_json::from_str::<Place>("4").unwrap(), p);
        assert!(serde_json::from_str::<Place>("0").is_err());
        assert!(serde_json::from_str::<Place>("12").is_err());
    }

    #[test]
    fn test_place_set_basics() {
        let mut set = PlaceSet::new();
        assert!(set.is_empty());

        let five = Place::new(5).unwrap();
        assert!(set.insert(five));
        assert!(!set.insert(five));
        assert!(set.contains(five));
        assert_eq!(set.len(), 1);

        assert_eq!(PlaceSet::full().len(), 9);
    }

    #[test]
    fn test_place_set_algebra() {
        let a: PlaceSet = [1, 2, 3].into_iter().map(|p| Place::new(p).unwrap()).collect();
        let b: PlaceSet = [3, 5].into_iter().map(|p| Place::new(p).unwrap()).collect();

        let raw = |s: PlaceSet| s.iter().map(Place::get).collect::<Vec<_>>();
        assert_eq!(raw(a.intersection(b)), vec![3]);
        assert_eq!(raw(a.union(b)), vec![1, 2, 3, 5]);
        assert_eq!(raw(a.difference(b)), vec![1, 2]);
        assert!(!a.is_disjoint(b));
        assert!(a.difference(b).is_disjoint(b));
    }

    #[test]
    fn test_symbol_other_and_chars() {
        assert_eq!(Symbol::X.other(), Symbol::O);
        assert_eq!(Symbol::O.other(), Symbol::X);
        assert_eq!(Symbol::from_char('X'), Some(Symbol::X));
        assert_eq!(Symbol::from_char('O'), Some(Symbol::O));
        assert_eq!(Symbol::from_char('x'), None);
        assert_eq!(format!("{}", Symbol::O), "O");
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Player.to_string(), "player");
        assert_eq!(Side::Computer.to_string(), "computer");
        assert_eq!(Side::Player.opponent(), Side::Computer);
    }

    #[test]
    fn test_side_map() {
        let mut map: SideMap<Vec<u8>> = SideMap::with_default();
        map[Side::Player].push(1);
        map[Side::Computer].push(2);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (Side::Player, &vec![1]));
        assert_eq!(pairs[1], (Side::Computer, &vec![2]));
    }
}
