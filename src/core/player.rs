//! Per-seat player state.
//!
//! A `Player` holds everything tracked for one seat: life, poison,
//! display color, status flags, the chosen commander, and the
//! commander-damage ledger. Mutation goes through `GameState`; the
//! elimination predicate here is pure and recomputed on every read.

use serde::{Deserialize, Serialize};

use super::color::SeatColor;
use super::damage::DamageLedger;
use super::seat::SeatId;
use super::status::StatusFlags;
use crate::cards::Commander;

/// Poison-counter total that eliminates a player.
pub const LETHAL_POISON: i64 = 10;

/// State for one seat.
///
/// `life` and `poison` are clamped to `>= 0` by the direct setters on
/// `GameState`. The commander-damage path debits life by the counter
/// delta without re-clamping, so `life` can sit below zero between that
/// mutation and the next elimination check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Life total.
    pub life: i64,
    /// Poison counters, lethal at 10.
    pub poison: i64,
    /// Display color; no uniqueness constraint across seats.
    pub color: SeatColor,
    /// Monarch / initiative / city's blessing.
    pub status: StatusFlags,
    /// Chosen commander, absent until set via lookup.
    pub commander: Option<Commander>,
    /// Damage taken from each other seat's commander.
    pub damage: DamageLedger,
}

impl Player {
    /// Create a freshly-seated player.
    #[must_use]
    pub fn new(seat: SeatId, seat_count: usize, starting_life: i64) -> Self {
        Self {
            life: starting_life,
            poison: 0,
            color: SeatColor::default_for(seat),
            status: StatusFlags::default(),
            commander: None,
            damage: DamageLedger::new(seat, seat_count),
        }
    }

    /// Whether this player is out of the game.
    ///
    /// True when life is at or below zero, poison has reached 10, or any
    /// single commander has dealt 21+ damage. Derived on every call,
    /// never cached.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.life <= 0 || self.poison >= LETHAL_POISON || self.damage.lethal_from_any()
    }
}
