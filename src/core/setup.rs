//! Pre-game configuration and user-input validation.
//!
//! Starting life comes from either a preset button (20/30/40) or a
//! free-text field, so the text path gets real validation with a message
//! the configuration screen can show verbatim. Everything that survives
//! validation is a hard contract from here on.

use thiserror::Error;

use super::seat::MAX_SEATS;
use super::state::GameState;

/// Preset starting-life choices offered before the custom field.
pub const LIFE_PRESETS: [i64; 3] = [20, 30, 40];

/// Rejected pre-game input. The message is shown to the user as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("Starting life must be a whole number greater than or equal to 1.")]
    InvalidStartingLife,
}

/// Parse a custom starting-life entry.
///
/// Accepts positive whole numbers only: `"25"` passes, while `"20.5"`,
/// `"0"`, `"-3"`, and `"abc"` are all rejected with the same
/// user-facing message. Surrounding whitespace is tolerated, matching
/// what a text field delivers.
pub fn parse_starting_life(input: &str) -> Result<i64, SetupError> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|&life| life >= 1)
        .ok_or(SetupError::InvalidStartingLife)
}

/// Builder for a new match.
///
/// ```
/// use commander_tally::core::GameSetup;
///
/// let state = GameSetup::new()
///     .starting_life(40)
///     .seat_count(4)
///     .start();
///
/// assert_eq!(state.seat_count(), 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GameSetup {
    starting_life: i64,
    seat_count: usize,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            starting_life: 40,
            seat_count: 4,
        }
    }
}

impl GameSetup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting life. Values below 1 are a contract violation;
    /// run user input through `parse_starting_life` first.
    #[must_use]
    pub fn starting_life(mut self, life: i64) -> Self {
        assert!(life >= 1, "starting life must be at least 1");
        self.starting_life = life;
        self
    }

    /// Set the seat count (1-6).
    #[must_use]
    pub fn seat_count(mut self, count: usize) -> Self {
        assert!(
            (1..=MAX_SEATS).contains(&count),
            "seat count must be 1-{MAX_SEATS}"
        );
        self.seat_count = count;
        self
    }

    /// Build the initial game state.
    #[must_use]
    pub fn start(self) -> GameState {
        tracing::info!(
            seats = self.seat_count,
            starting_life = self.starting_life,
            "starting game"
        );
        GameState::new(self.seat_count, self.starting_life)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_positive_integers() {
        assert_eq!(parse_starting_life("25"), Ok(25));
        assert_eq!(parse_starting_life("1"), Ok(1));
        assert_eq!(parse_starting_life(" 40 "), Ok(40));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for bad in ["20.5", "0", "-3", "abc", "", "  "] {
            assert_eq!(
                parse_starting_life(bad),
                Err(SetupError::InvalidStartingLife),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_validation_message_is_user_facing() {
        let err = parse_starting_life("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Starting life must be a whole number greater than or equal to 1."
        );
    }

    #[test]
    fn test_start_applies_life_to_all_seats() {
        let life = parse_starting_life("25").unwrap();
        let state = GameSetup::new().starting_life(life).seat_count(3).start();

        for (_, p) in state.players() {
            assert_eq!(p.life, 25);
        }
    }

    #[test]
    fn test_presets() {
        for life in LIFE_PRESETS {
            let state = GameSetup::new().starting_life(life).seat_count(2).start();
            assert_eq!(state.player(crate::core::SeatId::new(0)).life, life);
        }
    }

    #[test]
    #[should_panic(expected = "seat count must be 1-6")]
    fn test_seat_count_out_of_range_panics() {
        let _ = GameSetup::new().seat_count(7);
    }
}
