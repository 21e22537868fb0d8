//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat index. A table holds 1-6 seats, chosen once at game
//! start and fixed for the lifetime of the match.
//!
//! ## SeatMap
//!
//! Fixed-length per-seat storage backed by `SmallVec` (inline for up to
//! 6 seats). Supports iteration and indexing by `SeatId`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Maximum number of seats at a table.
pub const MAX_SEATS: usize = 6;

/// Seat identifier.
///
/// Seat indices are 0-based: the first seat is `SeatId(0)`. Display is
/// 1-based to match what players see at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seat IDs at a table with `seat_count` seats.
    ///
    /// ```
    /// use commander_tally::core::SeatId;
    ///
    /// let seats: Vec<_> = SeatId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[0], SeatId::new(0));
    /// assert_eq!(seats[3], SeatId::new(3));
    /// ```
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data storage with O(1) access.
///
/// One entry per seat, length fixed at construction. Use `SeatMap::new()`
/// to create with a factory function, or `SeatMap::with_value()` to
/// initialize every seat to the same value.
///
/// ## Example
///
/// ```
/// use commander_tally::core::{SeatId, SeatMap};
///
/// let mut life: SeatMap<i64> = SeatMap::with_value(4, 40);
///
/// assert_eq!(life[SeatId::new(0)], 40);
///
/// life[SeatId::new(1)] = 33;
/// assert_eq!(life[SeatId::new(1)], 33);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: SmallVec<[T; MAX_SEATS]>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    ///
    /// The factory receives the `SeatId` for each seat.
    pub fn new(seat_count: usize, factory: impl Fn(SeatId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(
            seat_count <= MAX_SEATS,
            "At most {MAX_SEATS} seats supported"
        );

        let data = (0..seat_count as u8).map(|i| factory(SeatId(i))).collect();

        Self { data }
    }

    /// Create a new SeatMap with every seat set to the same value.
    pub fn with_value(seat_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(seat_count, |_| value.clone())
    }

    /// Get the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (SeatId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over all seat IDs.
    pub fn seat_ids(&self) -> impl Iterator<Item = SeatId> {
        (0..self.data.len() as u8).map(SeatId)
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_basics() {
        let s0 = SeatId::new(0);
        let s1 = SeatId::new(1);

        assert_eq!(s0.index(), 0);
        assert_eq!(s1.index(), 1);
        assert_eq!(format!("{}", s0), "Player 1");
        assert_eq!(format!("{}", s1), "Player 2");
    }

    #[test]
    fn test_seat_id_all() {
        let seats: Vec<_> = SeatId::all(3).collect();
        assert_eq!(seats, vec![SeatId::new(0), SeatId::new(1), SeatId::new(2)]);
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<i64> = SeatMap::new(4, |s| s.index() as i64 * 10);

        assert_eq!(map[SeatId::new(0)], 0);
        assert_eq!(map[SeatId::new(1)], 10);
        assert_eq!(map[SeatId::new(3)], 30);
    }

    #[test]
    fn test_seat_map_with_value() {
        let map: SeatMap<i64> = SeatMap::with_value(3, 40);

        assert_eq!(map[SeatId::new(0)], 40);
        assert_eq!(map[SeatId::new(2)], 40);
        assert_eq!(map.seat_count(), 3);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<i64> = SeatMap::with_value(2, 0);

        map[SeatId::new(0)] = 10;
        map[SeatId::new(1)] = 20;

        assert_eq!(map[SeatId::new(0)], 10);
        assert_eq!(map[SeatId::new(1)], 20);
    }

    #[test]
    fn test_seat_map_iter() {
        let map: SeatMap<i64> = SeatMap::new(3, |s| s.index() as i64);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (SeatId::new(0), &0));
        assert_eq!(pairs[2], (SeatId::new(2), &2));
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<i64> = SeatMap::new(2, |s| s.index() as i64 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 seat")]
    fn test_seat_map_zero_seats() {
        let _: SeatMap<i64> = SeatMap::with_value(0, 0);
    }

    #[test]
    #[should_panic(expected = "At most 6 seats supported")]
    fn test_seat_map_too_many_seats() {
        let _: SeatMap<i64> = SeatMap::with_value(7, 0);
    }
}
