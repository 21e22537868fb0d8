//! Commander-damage ledger.
//!
//! Each seat tracks the damage its owner has taken from every *other*
//! seat's commander, one counter per source. The entry for the owner's
//! own seat is a sentinel "not applicable" and never holds a number.
//!
//! 21+ damage from any single source is lethal regardless of the total
//! across sources. The threshold is per-source, never a sum.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::seat::{SeatId, MAX_SEATS};

/// Commander damage from one source that eliminates the victim.
pub const LETHAL_COMMANDER_DAMAGE: i64 = 21;

/// Per-source commander-damage counters for one seat.
///
/// Indexed by source seat. `None` marks the owner's own entry; every
/// other entry is a counter `>= 0`, starting at 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageLedger {
    entries: SmallVec<[Option<i64>; MAX_SEATS]>,
}

impl DamageLedger {
    /// Create a ledger for `owner` at a table of `seat_count` seats,
    /// every counter at 0.
    #[must_use]
    pub fn new(owner: SeatId, seat_count: usize) -> Self {
        let entries = SeatId::all(seat_count)
            .map(|s| if s == owner { None } else { Some(0) })
            .collect();
        Self { entries }
    }

    /// Damage taken from `source`. `None` only for the owner's own seat.
    #[must_use]
    pub fn from_source(&self, source: SeatId) -> Option<i64> {
        self.entries[source.index()]
    }

    /// Overwrite the counter for `source`.
    ///
    /// Panics on the owner's own seat; self-damage is never stored.
    pub(crate) fn set(&mut self, source: SeatId, value: i64) {
        debug_assert!(value >= 0, "commander damage counter must stay >= 0");
        let entry = &mut self.entries[source.index()];
        assert!(
            entry.is_some(),
            "commander damage from a seat's own commander is not tracked"
        );
        *entry = Some(value);
    }

    /// True if any single source has dealt lethal commander damage.
    #[must_use]
    pub fn lethal_from_any(&self) -> bool {
        self.entries
            .iter()
            .flatten()
            .any(|&d| d >= LETHAL_COMMANDER_DAMAGE)
    }

    /// Iterate over (source, counter) pairs, skipping the owner's seat.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, i64)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|d| (SeatId::new(i as u8), d)))
    }
}
