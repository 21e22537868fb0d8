//! The authoritative game state and its mutation operations.
//!
//! ## GameState
//!
//! One owned value per match: a fixed-length seat list created at game
//! start and discarded on reset. Every mutation is an atomic, validated
//! operation taking a seat index; out-of-range seats, self-targeted
//! commander damage, and the like are contract violations and panic.
//!
//! ## Outcome
//!
//! Victory/draw is derived from the current counters on every read,
//! never stored. Once an outcome exists the match is over; the input
//! surface stops issuing mutations, the engine does not enforce a lock.

use serde::{Deserialize, Serialize};

use super::color::SeatColor;
use super::player::Player;
use super::seat::{SeatId, SeatMap};
use super::status::StatusFlag;
use crate::cards::Commander;

/// Result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Exactly one seat left standing.
    Victory(SeatId),
    /// Every seat eliminated in the same update.
    Draw,
}

impl Outcome {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: SeatId) -> bool {
        match self {
            Outcome::Victory(s) => *s == seat,
            Outcome::Draw => false,
        }
    }
}

/// Authoritative state for one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    seats: SeatMap<Player>,
}

impl GameState {
    /// Create a match with `seat_count` freshly-initialized players.
    ///
    /// Prefer `GameSetup`, which validates user input before reaching
    /// this constructor. `starting_life < 1` or a seat count outside
    /// 1..=6 is a contract violation here.
    #[must_use]
    pub fn new(seat_count: usize, starting_life: i64) -> Self {
        assert!(starting_life >= 1, "starting life must be at least 1");
        let seats = SeatMap::new(seat_count, |seat| {
            Player::new(seat, seat_count, starting_life)
        });
        Self { seats }
    }

    /// Number of seats, fixed for the lifetime of the match.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.seat_count()
    }

    /// Read one seat's state.
    #[must_use]
    pub fn player(&self, seat: SeatId) -> &Player {
        &self.seats[seat]
    }

    /// Iterate over (SeatId, &Player) pairs.
    pub fn players(&self) -> impl Iterator<Item = (SeatId, &Player)> {
        self.seats.iter()
    }

    // === Mutation operations ===

    /// Set a seat's life total, clamped to `max(0, value)`.
    pub fn set_life(&mut self, seat: SeatId, value: i64) {
        let life = value.max(0);
        tracing::debug!(%seat, life, "set life");
        self.seats[seat].life = life;
    }

    /// Set a seat's poison counters, clamped to `max(0, value)`.
    pub fn set_poison(&mut self, seat: SeatId, value: i64) {
        let poison = value.max(0);
        tracing::debug!(%seat, poison, "set poison");
        self.seats[seat].poison = poison;
    }

    /// Set a seat's display color.
    pub fn set_color(&mut self, seat: SeatId, color: SeatColor) {
        self.seats[seat].color = color;
    }

    /// Flip one of a seat's status flags.
    pub fn toggle_status(&mut self, seat: SeatId, flag: StatusFlag) {
        self.seats[seat].status.toggle(flag);
        tracing::debug!(%seat, ?flag, on = self.seats[seat].status.get(flag), "toggled status");
    }

    /// Attach (or replace) a seat's commander metadata.
    pub fn set_commander(&mut self, seat: SeatId, commander: Commander) {
        tracing::debug!(%seat, commander = %commander.name, "set commander");
        self.seats[seat].commander = Some(commander);
    }

    /// Set the commander damage `seat` has taken from `source`.
    ///
    /// The victim's life moves by the *change* in the counter, so
    /// correcting a misclick restores life along with the counter. One
    /// carve-out: when the counter is already 0 and `value` is negative,
    /// nothing happens at all — clamping and then debiting would bump
    /// the life total without the counter moving.
    ///
    /// The life debit does not re-clamp; a large downward correction can
    /// leave life above where `set_life` would cap it, and a large hit
    /// can push life below zero until the next elimination check.
    ///
    /// Panics if `source == seat`.
    pub fn set_commander_damage(&mut self, seat: SeatId, source: SeatId, value: i64) {
        assert!(
            source != seat,
            "seat {seat} cannot take commander damage from itself"
        );

        let player = &mut self.seats[seat];
        let current = player
            .damage
            .from_source(source)
            .unwrap_or_else(|| unreachable!("non-self ledger entry is always numeric"));

        if current == 0 && value < 0 {
            tracing::trace!(%seat, %source, "commander damage already floored, ignoring");
            return;
        }

        let clamped = value.max(0);
        let delta = clamped - current;
        player.damage.set(source, clamped);
        player.life -= delta;
        tracing::debug!(%seat, %source, counter = clamped, life = player.life, "set commander damage");
    }

    // === Derived values ===

    /// Whether the player at `seat` is out of the game.
    #[must_use]
    pub fn is_eliminated(&self, seat: SeatId) -> bool {
        self.seats[seat].is_eliminated()
    }

    /// Derive the match outcome from the current counters.
    ///
    /// A single-seat game never finishes; otherwise one survivor is a
    /// victory, zero survivors a draw, and two or more means play on.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.seat_count() == 1 {
            return None;
        }

        let mut survivors = self
            .seats
            .iter()
            .filter(|(_, p)| !p.is_eliminated())
            .map(|(s, _)| s);

        match (survivors.next(), survivors.next()) {
            (Some(winner), None) => Some(Outcome::Victory(winner)),
            (None, _) => Some(Outcome::Draw),
            (Some(_), Some(_)) => None,
        }
    }
}
