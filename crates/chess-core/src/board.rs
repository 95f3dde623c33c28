//! The 8×8 piece grid and its placement text format.
//!
//! Placement text lists the eight rows separated by `/`, row 0 first. Within a
//! row, a letter is a piece (uppercase White, lowercase Black) and a digit is a
//! run of empty squares:
//!
//! ```
//! use chess_core::Board;
//!
//! let board = Board::from_placement(Board::STANDARD).unwrap();
//! assert_eq!(board.to_placement(), Board::STANDARD);
//! ```

use crate::{Color, Piece, PieceKind, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing placement text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} has {squares} squares, expected 8")]
    RowLength { row: usize, squares: usize },

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { row: usize, ch: char },
}

/// A fixed 8×8 mapping from square to an optional piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Placement of the standard initial position.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard initial position.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::ALL {
            for (col, kind) in back.iter().enumerate() {
                board.cells[color.back_row() as usize][col] = Some(Piece::new(*kind, color));
                board.cells[color.pawn_row() as usize][col] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Parses placement text.
    pub fn from_placement(text: &str) -> Result<Self, PlacementError> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, row_text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in row_text.chars() {
                if let Some(run) = ch.to_digit(10) {
                    col += run as usize;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if col < 8 {
                        board.cells[row][col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter { row, ch });
                }
            }
            if col != 8 {
                return Err(PlacementError::RowLength { row, squares: col });
            }
        }
        Ok(board)
    }

    /// Serializes the board to placement text.
    pub fn to_placement(&self) -> String {
        let mut text = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                text.push('/');
            }
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
        }
        text
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns true if `sq` holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Writes `piece` (or clears the cell) and returns what was there.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[sq.row() as usize][sq.col() as usize], piece)
    }

    /// Removes and returns the piece on `sq`.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.set(sq, None)
    }

    /// Finds the king of `color`.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.get(sq)
                .is_some_and(|piece| piece.is(PieceKind::King, color))
        })
    }

    /// Iterates over the occupied squares of `color`.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", row)?;
            for cell in cells {
                write!(f, " {}", cell.map_or('.', Piece::to_char))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::from_coords(row, col).unwrap()
    }

    #[test]
    fn standard_matches_placement() {
        let parsed = Board::from_placement(Board::STANDARD).unwrap();
        assert_eq!(parsed, Board::standard());
    }

    #[test]
    fn standard_layout() {
        let board = Board::standard();
        assert_eq!(
            board.get(sq(7, 4)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.get(sq(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            board.get(sq(6, 0)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(board.is_empty(sq(4, 4)));
    }

    #[test]
    fn placement_round_trip() {
        let text = "4k3/8/8/3pP3/8/8/8/4K2R";
        assert_eq!(Board::from_placement(text).unwrap().to_placement(), text);
    }

    #[test]
    fn wrong_row_count() {
        assert_eq!(
            Board::from_placement("8/8/8"),
            Err(PlacementError::RowCount(3))
        );
    }

    #[test]
    fn wrong_row_length() {
        assert!(matches!(
            Board::from_placement("9/8/8/8/8/8/8/8"),
            Err(PlacementError::RowLength { row: 0, squares: 9 })
        ));
        assert!(matches!(
            Board::from_placement("8/8/8/8/8/8/8/7"),
            Err(PlacementError::RowLength { row: 7, squares: 7 })
        ));
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/7x"),
            Err(PlacementError::InvalidCharacter { row: 7, ch: 'x' })
        );
    }

    #[test]
    fn set_and_take() {
        let mut board = Board::empty();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert_eq!(board.set(sq(3, 3), Some(rook)), None);
        assert_eq!(board.take(sq(3, 3)), Some(rook));
        assert!(board.is_empty(sq(3, 3)));
    }

    #[test]
    fn find_king() {
        let board = Board::standard();
        assert_eq!(board.find_king(Color::White), Some(sq(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(sq(0, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn squares_of_color() {
        let board = Board::standard();
        assert_eq!(board.squares_of(Color::White).count(), 16);
        assert!(board
            .squares_of(Color::Black)
            .all(|(sq, piece)| sq.row() <= 1 && piece.color == Color::Black));
    }
}
