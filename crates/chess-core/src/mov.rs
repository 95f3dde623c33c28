//! Move representation.

use crate::Square;
use std::fmt;

/// A proposed relocation of the piece on `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Signed row distance, `to.row - from.row`.
    #[inline]
    pub const fn row_delta(self) -> i32 {
        self.to.row() as i32 - self.from.row() as i32
    }

    /// Signed column distance, `to.col - from.col`.
    #[inline]
    pub const fn col_delta(self) -> i32 {
        self.to.col() as i32 - self.from.col() as i32
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::from_coords(row, col).unwrap()
    }

    #[test]
    fn deltas() {
        let m = Move::new(sq(6, 4), sq(4, 5));
        assert_eq!(m.row_delta(), -2);
        assert_eq!(m.col_delta(), 1);
    }

    #[test]
    fn display() {
        let m = Move::new(sq(6, 4), sq(4, 4));
        assert_eq!(m.to_string(), "(6, 4) -> (4, 4)");
    }
}
