//! Per-seat status flags: monarch, initiative, city's blessing.
//!
//! The three flags are independent booleans. They carry no weight in the
//! elimination model; the table tracks them purely for display.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the three toggleable status flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFlag {
    /// The monarch (draws a card at end of turn).
    Monarch,
    /// The initiative (ventures into Undercity).
    Initiative,
    /// The city's blessing (permanent once earned).
    CityBlessing,
}

impl FromStr for StatusFlag {
    type Err = String;

    /// Parse the flag keys used by the input surface.
    ///
    /// Only `"monarch"`, `"initiative"`, and `"city"` are valid; anything
    /// else is a caller bug, not user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monarch" => Ok(StatusFlag::Monarch),
            "initiative" => Ok(StatusFlag::Initiative),
            "city" => Ok(StatusFlag::CityBlessing),
            other => Err(format!("unknown status flag key: {other:?}")),
        }
    }
}

/// The full status-flag set for one seat. All false at game start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFlags {
    pub monarch: bool,
    pub initiative: bool,
    pub city_blessing: bool,
}

impl StatusFlags {
    /// Read one flag.
    #[must_use]
    pub fn get(&self, flag: StatusFlag) -> bool {
        match flag {
            StatusFlag::Monarch => self.monarch,
            StatusFlag::Initiative => self.initiative,
            StatusFlag::CityBlessing => self.city_blessing,
        }
    }

    /// Flip one flag, leaving the other two untouched.
    pub fn toggle(&mut self, flag: StatusFlag) {
        match flag {
            StatusFlag::Monarch => self.monarch = !self.monarch,
            StatusFlag::Initiative => self.initiative = !self.initiative,
            StatusFlag::CityBlessing => self.city_blessing = !self.city_blessing,
        }
    }
}
