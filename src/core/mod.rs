//! Core engine types: seats, players, counters, state, setup.
//!
//! This module is the authoritative game-state model. The presentation
//! layer consumes it read-only and drives it through the mutation
//! operations on `GameState`.

pub mod color;
pub mod damage;
pub mod player;
pub mod seat;
pub mod setup;
pub mod state;
pub mod status;

pub use color::SeatColor;
pub use damage::{DamageLedger, LETHAL_COMMANDER_DAMAGE};
pub use player::{Player, LETHAL_POISON};
pub use seat::{SeatId, SeatMap, MAX_SEATS};
pub use setup::{parse_starting_life, GameSetup, SetupError, LIFE_PRESETS};
pub use state::{GameState, Outcome};
pub use status::{StatusFlag, StatusFlags};
