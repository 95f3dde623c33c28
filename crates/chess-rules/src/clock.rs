//! A simple per-side countdown.

use std::time::Duration;

use chess_core::Color;

/// Remaining thinking time for each side.
///
/// The clock does not run by itself; the owner charges elapsed time to the
/// side to move with [`Clock::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    remaining: [Duration; 2],
}

impl Clock {
    /// Creates a clock giving each side `per_side`.
    pub fn new(per_side: Duration) -> Self {
        Clock {
            remaining: [per_side; 2],
        }
    }

    #[inline]
    pub fn remaining(&self, color: Color) -> Duration {
        self.remaining[color.index()]
    }

    /// Returns true once `color` has no time left.
    #[inline]
    pub fn is_expired(&self, color: Color) -> bool {
        self.remaining(color).is_zero()
    }

    /// Charges `elapsed` to `color`. Returns true if this tick ran it out.
    pub fn tick(&mut self, color: Color, elapsed: Duration) -> bool {
        if self.is_expired(color) {
            return false;
        }
        let remaining = &mut self.remaining[color.index()];
        *remaining = remaining.saturating_sub(elapsed);
        remaining.is_zero()
    }
}
