//! Committing a validated move to the game state.

use chess_core::{Move, Piece, PieceKind, Square};

use crate::patterns::{castling_side, en_passant_victim};
use crate::promotion::{resolve, Promotion, PromotionChooser};
use crate::{CastleSide, GameState};

/// What applying a move did beyond relocating the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// The piece that moved, before any promotion.
    pub piece: Piece,
    /// The captured piece, including an en-passant victim.
    pub captured: Option<Piece>,
    /// Square emptied by an en-passant capture.
    pub en_passant_capture: Option<Square>,
    /// Side castled toward, if the move was castling.
    pub castled: Option<CastleSide>,
    /// The promotion performed, if any.
    pub promotion: Option<Promotion>,
}

/// Applies `mv`, which must already have passed the legality evaluator.
///
/// Returns `None` only if the origin is empty. Effects, in order: en-passant
/// victim removal, relocation, en-passant target update, castling flag
/// update, rook relocation for castling, promotion.
pub fn apply_move(
    state: &mut GameState,
    mv: Move,
    chooser: &mut dyn PromotionChooser,
) -> Option<Applied> {
    let piece = state.board.get(mv.from)?;
    let color = piece.color;

    let en_passant_capture = en_passant_victim(&state.board, mv, piece, state.en_passant);
    let mut captured = en_passant_capture.and_then(|sq| state.board.take(sq));

    state.board.take(mv.from);
    if let Some(taken) = state.board.set(mv.to, Some(piece)) {
        captured = Some(taken);
    }

    state.en_passant = if piece.kind == PieceKind::Pawn && mv.row_delta().abs() == 2 {
        mv.from.offset(mv.row_delta() / 2, 0)
    } else {
        None
    };

    match piece.kind {
        PieceKind::King => state.castling.mark_king_moved(color),
        PieceKind::Rook if mv.from.row() == color.back_row() => {
            if let Some(side) = CastleSide::from_rook_col(mv.from.col()) {
                state.castling.mark_rook_moved(color, side);
            }
        }
        _ => {}
    }

    let castled = if piece.kind == PieceKind::King && mv.col_delta().abs() == 2 {
        castling_side(mv, color)
    } else {
        None
    };
    if let Some(side) = castled {
        let row = mv.to.row() as i32;
        let corner = Square::from_coords(row, side.rook_col() as i32);
        let landing = Square::from_coords(row, side.rook_target_col() as i32);
        if let (Some(corner), Some(landing)) = (corner, landing) {
            let rook = state.board.take(corner);
            state.board.set(landing, rook);
        }
    }

    let promotion = if piece.kind == PieceKind::Pawn && mv.to.row() == color.promotion_row() {
        let promotion = resolve(chooser, color, mv.to);
        state
            .board
            .set(mv.to, Some(Piece::new(promotion.kind, color)));
        Some(promotion)
    } else {
        None
    };

    Some(Applied {
        piece,
        captured,
        en_passant_capture,
        castled,
        promotion,
    })
}
