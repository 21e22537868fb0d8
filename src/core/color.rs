//! Seat display colors.
//!
//! Colors are purely cosmetic: any seat may pick any color and duplicates
//! are allowed. Seats get a default color by position from a fixed
//! palette order.

use serde::{Deserialize, Serialize};

use super::seat::SeatId;

/// A display color from the fixed palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
}

impl SeatColor {
    /// Palette in seat-default order: seat 0 is red, seat 1 blue, and so
    /// on through pink for seat 5.
    pub const PALETTE: [SeatColor; 6] = [
        SeatColor::Red,
        SeatColor::Blue,
        SeatColor::Green,
        SeatColor::Yellow,
        SeatColor::Purple,
        SeatColor::Pink,
    ];

    /// Default color for a seat, assigned by position.
    #[must_use]
    pub fn default_for(seat: SeatId) -> Self {
        Self::PALETTE[seat.index()]
    }
}
