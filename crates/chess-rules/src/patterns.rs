//! Path clearance and per-piece movement patterns.
//!
//! These are pure geometry checks plus board lookups. They know nothing about
//! whose turn it is, castling rights, or king safety; the legality evaluator
//! layers those on top.

use chess_core::{Board, Color, Move, Piece, PieceKind, Square};

use crate::CastleSide;

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// Only meaningful when the two squares share a row, column, or diagonal;
/// returns false for any other pair. Adjacent squares have no interior and are
/// trivially clear.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let mv = Move::new(from, to);
    let (dr, dc) = (mv.row_delta(), mv.col_delta());
    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return false;
    }

    let (step_r, step_c) = (dr.signum(), dc.signum());
    let mut current = from.offset(step_r, step_c);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(step_r, step_c);
    }
    true
}

/// Knight: an L-shape, `{|Δrow|, |Δcol|} = {1, 2}`. Knights jump.
#[inline]
pub fn knight_pattern(mv: Move) -> bool {
    let (dr, dc) = (mv.row_delta().abs(), mv.col_delta().abs());
    (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
}

/// Bishop: a nonzero diagonal with a clear path.
pub fn bishop_pattern(board: &Board, mv: Move) -> bool {
    let (dr, dc) = (mv.row_delta().abs(), mv.col_delta().abs());
    dr == dc && dr != 0 && is_path_clear(board, mv.from, mv.to)
}

/// Rook: a nonzero straight line with a clear path.
pub fn rook_pattern(board: &Board, mv: Move) -> bool {
    let (dr, dc) = (mv.row_delta(), mv.col_delta());
    ((dr == 0) != (dc == 0)) && is_path_clear(board, mv.from, mv.to)
}

/// Queen: bishop or rook pattern.
#[inline]
pub fn queen_pattern(board: &Board, mv: Move) -> bool {
    bishop_pattern(board, mv) || rook_pattern(board, mv)
}

/// King: one step in any direction. Castling is checked separately.
#[inline]
pub fn king_step_pattern(mv: Move) -> bool {
    let (dr, dc) = (mv.row_delta().abs(), mv.col_delta().abs());
    dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
}

/// Pawn: single or initial double advance onto empty squares, a diagonal
/// capture, or an en-passant capture.
pub fn pawn_pattern(board: &Board, mv: Move, color: Color, en_passant: Option<Square>) -> bool {
    let dir = color.pawn_direction() as i32;
    let (dr, dc) = (mv.row_delta(), mv.col_delta());

    if dc == 0 {
        if !board.is_empty(mv.to) {
            return false;
        }
        if dr == dir {
            return true;
        }
        return dr == 2 * dir
            && mv.from.row() == color.pawn_row()
            && mv.from.offset(dir, 0).is_some_and(|sq| board.is_empty(sq));
    }

    if dc.abs() != 1 || dr != dir {
        return false;
    }
    match board.get(mv.to) {
        Some(target) => target.color != color,
        None => en_passant_victim(board, mv, Piece::new(PieceKind::Pawn, color), en_passant)
            .is_some(),
    }
}

/// If `mv` is an en-passant capture by `piece`, returns the square of the
/// pawn it removes.
///
/// The target must equal the destination, the destination must be empty, and
/// an opposing pawn must sit beside the mover on its origin row.
pub fn en_passant_victim(
    board: &Board,
    mv: Move,
    piece: Piece,
    en_passant: Option<Square>,
) -> Option<Square> {
    if piece.kind != PieceKind::Pawn
        || en_passant != Some(mv.to)
        || mv.col_delta().abs() != 1
        || mv.row_delta() != piece.color.pawn_direction() as i32
        || !board.is_empty(mv.to)
    {
        return None;
    }
    let beside = Square::from_coords(mv.from.row() as i32, mv.to.col() as i32)?;
    board
        .get(beside)
        .filter(|victim| victim.is(PieceKind::Pawn, piece.color.opposite()))
        .map(|_| beside)
}

/// If `mv` has the shape of a castling move for `color`'s king, returns which
/// side it castles toward.
///
/// Shape only: king origin square, two files along the back row.
pub fn castling_side(mv: Move, color: Color) -> Option<CastleSide> {
    let row = color.back_row();
    if mv.from.row() != row || mv.to.row() != row || mv.from.col() != 4 {
        return None;
    }
    CastleSide::from_king_target_col(mv.to.col())
}

/// Dispatches to the pattern for `piece`'s kind. Kings get the single-step
/// pattern only.
pub fn matches_pattern(board: &Board, mv: Move, piece: Piece, en_passant: Option<Square>) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_pattern(board, mv, piece.color, en_passant),
        PieceKind::Knight => knight_pattern(mv),
        PieceKind::Bishop => bishop_pattern(board, mv),
        PieceKind::Rook => rook_pattern(board, mv),
        PieceKind::Queen => queen_pattern(board, mv),
        PieceKind::King => king_step_pattern(mv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::from_coords(row, col).unwrap()
    }

    fn mv(fr: i32, fc: i32, tr: i32, tc: i32) -> Move {
        Move::new(sq(fr, fc), sq(tr, tc))
    }

    fn board(text: &str) -> Board {
        Board::from_placement(text).unwrap()
    }

    #[test]
    fn path_clear_on_lines() {
        let b = board("8/8/8/3p4/8/8/8/R7");
        assert!(is_path_clear(&b, sq(7, 0), sq(7, 7)));
        assert!(is_path_clear(&b, sq(7, 0), sq(0, 0)));
        assert!(is_path_clear(&b, sq(7, 0), sq(0, 7)));
        assert!(is_path_clear(&b, sq(6, 0), sq(3, 3)));
        assert!(!is_path_clear(&b, sq(6, 0), sq(2, 4)));
    }

    #[test]
    fn path_clear_adjacent_and_unaligned() {
        let b = Board::standard();
        assert!(is_path_clear(&b, sq(7, 0), sq(6, 0)));
        assert!(!is_path_clear(&b, sq(4, 4), sq(2, 5)));
    }

    #[test]
    fn knight_jumps() {
        assert!(knight_pattern(mv(7, 1, 5, 2)));
        assert!(knight_pattern(mv(7, 1, 6, 3)));
        assert!(!knight_pattern(mv(7, 1, 5, 1)));
        assert!(!knight_pattern(mv(7, 1, 4, 2)));
    }

    #[test]
    fn bishop_needs_clear_diagonal() {
        let b = Board::standard();
        assert!(!bishop_pattern(&b, mv(7, 2, 5, 4)));
        let open = board("8/8/8/8/8/8/8/2B5");
        assert!(bishop_pattern(&open, mv(7, 2, 2, 7)));
        assert!(!bishop_pattern(&open, mv(7, 2, 7, 2)));
        assert!(!bishop_pattern(&open, mv(7, 2, 5, 3)));
    }

    #[test]
    fn rook_needs_straight_line() {
        let b = board("8/8/8/8/8/8/8/R3K3");
        assert!(rook_pattern(&b, mv(7, 0, 0, 0)));
        assert!(rook_pattern(&b, mv(7, 0, 7, 3)));
        assert!(rook_pattern(&b, mv(7, 0, 7, 4)));
        assert!(!rook_pattern(&b, mv(7, 0, 7, 5)));
        assert!(!rook_pattern(&b, mv(7, 0, 6, 1)));
        assert!(!rook_pattern(&b, mv(7, 0, 7, 0)));
    }

    #[test]
    fn queen_combines_both() {
        let b = board("8/8/8/8/3Q4/8/8/8");
        assert!(queen_pattern(&b, mv(4, 3, 0, 3)));
        assert!(queen_pattern(&b, mv(4, 3, 1, 6)));
        assert!(!queen_pattern(&b, mv(4, 3, 2, 4)));
    }

    #[test]
    fn king_steps() {
        assert!(king_step_pattern(mv(7, 4, 6, 4)));
        assert!(king_step_pattern(mv(7, 4, 6, 5)));
        assert!(!king_step_pattern(mv(7, 4, 7, 4)));
        assert!(!king_step_pattern(mv(7, 4, 7, 6)));
    }

    #[test]
    fn pawn_advances() {
        let b = Board::standard();
        assert!(pawn_pattern(&b, mv(6, 4, 5, 4), Color::White, None));
        assert!(pawn_pattern(&b, mv(6, 4, 4, 4), Color::White, None));
        assert!(!pawn_pattern(&b, mv(6, 4, 3, 4), Color::White, None));
        assert!(!pawn_pattern(&b, mv(6, 4, 7, 4), Color::White, None));
        assert!(pawn_pattern(&b, mv(1, 3, 3, 3), Color::Black, None));
    }

    #[test]
    fn pawn_double_advance_needs_both_squares() {
        let blocked = board("8/8/8/8/8/4n3/4P3/8");
        assert!(!pawn_pattern(&blocked, mv(6, 4, 4, 4), Color::White, None));
        let far_blocked = board("8/8/8/8/4n3/8/4P3/8");
        assert!(!pawn_pattern(&far_blocked, mv(6, 4, 4, 4), Color::White, None));
        assert!(pawn_pattern(&far_blocked, mv(6, 4, 5, 4), Color::White, None));
        let moved = board("8/8/8/8/8/4P3/8/8");
        assert!(!pawn_pattern(&moved, mv(5, 4, 3, 4), Color::White, None));
    }

    #[test]
    fn pawn_captures_diagonally() {
        let b = board("8/8/8/8/3p1P2/4P3/8/8");
        assert!(pawn_pattern(&b, mv(5, 4, 4, 3), Color::White, None));
        assert!(!pawn_pattern(&b, mv(5, 4, 4, 5), Color::White, None));
        assert!(!pawn_pattern(&b, mv(4, 3, 5, 2), Color::Black, None));
        assert!(pawn_pattern(&b, mv(4, 3, 5, 4), Color::Black, None));
    }

    #[test]
    fn en_passant_requires_adjacent_pawn_and_target() {
        // Black pawn just advanced (1,3) -> (3,3); white pawn on (3,4).
        let b = board("8/8/8/3pP3/8/8/8/8");
        let target = Some(sq(2, 3));
        assert!(pawn_pattern(&b, mv(3, 4, 2, 3), Color::White, target));
        assert!(!pawn_pattern(&b, mv(3, 4, 2, 3), Color::White, None));
        assert!(!pawn_pattern(&b, mv(3, 4, 2, 5), Color::White, target));
        assert_eq!(
            en_passant_victim(&b, mv(3, 4, 2, 3), Piece::from_char('P').unwrap(), target),
            Some(sq(3, 3))
        );

        let knight_beside = board("8/8/8/3nP3/8/8/8/8");
        assert!(!pawn_pattern(&knight_beside, mv(3, 4, 2, 3), Color::White, target));
    }

    #[test]
    fn en_passant_victim_only_for_pawns() {
        let b = board("8/8/8/3pN3/8/8/8/8");
        let knight = Piece::from_char('N').unwrap();
        assert_eq!(en_passant_victim(&b, mv(3, 4, 2, 3), knight, Some(sq(2, 3))), None);
    }

    #[test]
    fn castling_shape() {
        assert_eq!(
            castling_side(mv(7, 4, 7, 6), Color::White),
            Some(CastleSide::Kingside)
        );
        assert_eq!(
            castling_side(mv(0, 4, 0, 2), Color::Black),
            Some(CastleSide::Queenside)
        );
        assert_eq!(castling_side(mv(0, 4, 0, 6), Color::White), None);
        assert_eq!(castling_side(mv(7, 3, 7, 5), Color::White), None);
        assert_eq!(castling_side(mv(7, 4, 6, 6), Color::White), None);
    }

    #[test]
    fn dispatch_by_kind() {
        let b = Board::standard();
        let knight = Piece::from_char('N').unwrap();
        let king = Piece::from_char('K').unwrap();
        assert!(matches_pattern(&b, mv(7, 1, 5, 2), knight, None));
        assert!(!matches_pattern(&b, mv(7, 4, 7, 6), king, None));
    }
}
