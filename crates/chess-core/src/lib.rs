//! Core types for chess.
//!
//! This crate provides the fundamental types used by the rules engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for `(row, col)` board coordinates
//! - [`Move`] for a proposed relocation
//! - [`Board`], the 8×8 grid, with placement text parsing

mod board;
mod color;
mod mov;
mod piece;
mod square;

pub use board::{Board, PlacementError};
pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
