//! Board square representation.

use std::fmt;

/// A square on the board, addressed by `(row, col)` in `[0, 8) × [0, 8)`.
///
/// Row 0 is Black's back rank and row 7 is White's.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from signed coordinates, returning `None` when either
    /// lies outside the board.
    #[inline]
    pub const fn from_coords(row: i32, col: i32) -> Option<Self> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square `(row + dr, col + dc)` if it is on the board.
    #[inline]
    pub const fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::from_coords(self.row as i32 + dr, self.col as i32 + dc)
    }

    /// Iterates over all 64 squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Square {
            row: i / 8,
            col: i % 8,
        })
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
