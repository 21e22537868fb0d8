//! # commander-tally
//!
//! Game-state engine for a multiplayer Commander life counter.
//!
//! Tracks each seat's life total, poison counters, per-source commander
//! damage, and status flags, and derives the match outcome once all but
//! one seat is eliminated. The presentation layer and the card-lookup
//! service are external collaborators: one renders this state and drives
//! the mutation operations, the other answers commander-name searches.
//!
//! ## Design Principles
//!
//! 1. **One owned state value**: a match is a single `GameState` driven
//!    through a narrow set of atomic operations; no ambient globals.
//!
//! 2. **Derived, never stored**: elimination and the match outcome are
//!    pure functions over the current counters, recomputed on read, so
//!    they cannot desynchronize from the state that implies them.
//!
//! 3. **Fail fast on contract errors**: out-of-range seats, self-targeted
//!    commander damage, and invalid seat counts panic. The only
//!    recoverable error is user input on the configuration screen.
//!
//! ## Modules
//!
//! - `core`: seats, players, counters, game state, setup validation
//! - `cards`: commander metadata from the lookup collaborator
//! - `lookup`: debouncing and stale-response cancellation for searches
//!
//! ## Example
//!
//! ```
//! use commander_tally::core::{GameSetup, Outcome, SeatId};
//!
//! let mut state = GameSetup::new().starting_life(40).seat_count(2).start();
//!
//! let p0 = SeatId::new(0);
//! let p1 = SeatId::new(1);
//!
//! state.set_commander_damage(p0, p1, 21);
//! assert!(state.is_eliminated(p0));
//! assert_eq!(state.outcome(), Some(Outcome::Victory(p1)));
//! ```

pub mod cards;
pub mod core;
pub mod lookup;

// Re-export commonly used types
pub use crate::core::{
    parse_starting_life, DamageLedger, GameSetup, GameState, Outcome, Player, SeatColor, SeatId,
    SeatMap, SetupError, StatusFlag, StatusFlags, LETHAL_COMMANDER_DAMAGE, LETHAL_POISON,
    LIFE_PRESETS, MAX_SEATS,
};

pub use crate::cards::{Commander, ImageUris};

pub use crate::lookup::{
    parse_search_payload, CardSource, Debouncer, QueryToken, SearchQuery, SearchSession,
    DEBOUNCE_WINDOW, MAX_RESULTS,
};
