//! Move legality evaluation.
//!
//! A move is judged against these rules: a piece must stand on the origin, it
//! must belong to the side to move (for [`Purpose::Play`]), it may not capture
//! a piece of its own color, it must match the piece's movement pattern, and
//! it may not leave its own king in check. The pattern is tested before the
//! self-check filter; both are pure, so the order only saves work.

use chess_core::{Color, Move, Piece, PieceKind, Square};

use crate::detector::king_in_check;
use crate::patterns::{castling_side, is_path_clear, matches_pattern};
use crate::simulate::Simulation;
use crate::GameState;

/// Why a move is being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    /// A move by the side to move in normal play.
    Play,
    /// Whether the piece could reach the square regardless of whose turn it
    /// is. The self-check filter still applies.
    AttackScan,
    /// Free placement: no turn ownership, no self-check filter. Geometry and
    /// the no-self-capture rule still hold.
    Unrestricted,
}

/// Returns true if `mv` is legal in `state` for the given purpose.
///
/// The board may be mutated while the self-check filter runs but is always
/// restored before this returns.
pub fn is_legal(state: &mut GameState, mv: Move, purpose: Purpose) -> bool {
    let Some(piece) = state.board.get(mv.from) else {
        return false;
    };
    if purpose == Purpose::Play && piece.color != state.turn {
        return false;
    }
    if state
        .board
        .get(mv.to)
        .is_some_and(|target| target.color == piece.color)
    {
        return false;
    }
    if !geometry_allows(state, mv, piece) {
        return false;
    }
    purpose == Purpose::Unrestricted || !leaves_king_in_check(state, mv, piece.color)
}

/// Self-check filter: would `color`'s king be in check after `mv`?
fn leaves_king_in_check(state: &mut GameState, mv: Move, color: Color) -> bool {
    let mut simulated = Simulation::new(state, mv);
    king_in_check(&mut simulated, color)
}

/// Pattern check for `piece`, with castling as the king's alternative.
pub fn geometry_allows(state: &mut GameState, mv: Move, piece: Piece) -> bool {
    matches_pattern(&state.board, mv, piece, state.en_passant)
        || (piece.kind == PieceKind::King && castling_allowed(state, mv, piece.color))
}

/// Castling eligibility for `color`'s king making `mv`.
///
/// Requires the castling shape, unmoved king and rook, the rook still on its
/// corner, every square between king and rook empty, and the king not
/// currently in check. Squares the king passes over are not tested.
pub fn castling_allowed(state: &mut GameState, mv: Move, color: Color) -> bool {
    let Some(side) = castling_side(mv, color) else {
        return false;
    };
    if !state.castling.can_castle(color, side) {
        return false;
    }
    let Some(corner) = Square::from_coords(color.back_row() as i32, side.rook_col() as i32) else {
        return false;
    };
    let rook_home = state
        .board
        .get(corner)
        .is_some_and(|rook| rook.is(PieceKind::Rook, color));
    rook_home && is_path_clear(&state.board, mv.from, corner) && !king_in_check(state, color)
}

/// Every square the piece on `from` may legally move to.
pub fn legal_destinations(state: &mut GameState, from: Square, purpose: Purpose) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal(state, Move::new(from, to), purpose))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CastleSide;

    fn sq(row: i32, col: i32) -> Square {
        Square::from_coords(row, col).unwrap()
    }

    fn mv(fr: i32, fc: i32, tr: i32, tc: i32) -> Move {
        Move::new(sq(fr, fc), sq(tr, tc))
    }

    fn state(text: &str, turn: Color) -> GameState {
        GameState::from_placement(text, turn).unwrap()
    }

    #[test]
    fn empty_origin_is_illegal() {
        let mut s = GameState::new();
        assert!(!is_legal(&mut s, mv(4, 4, 3, 4), Purpose::Play));
    }

    #[test]
    fn ownership_follows_turn() {
        let mut s = GameState::new();
        assert!(is_legal(&mut s, mv(6, 4, 4, 4), Purpose::Play));
        assert!(!is_legal(&mut s, mv(1, 4, 3, 4), Purpose::Play));
        assert!(is_legal(&mut s, mv(1, 4, 3, 4), Purpose::AttackScan));
        assert!(is_legal(&mut s, mv(1, 4, 3, 4), Purpose::Unrestricted));
    }

    #[test]
    fn no_self_capture() {
        let mut s = GameState::new();
        assert!(!is_legal(&mut s, mv(7, 0, 6, 0), Purpose::Play));
        assert!(!is_legal(&mut s, mv(7, 0, 6, 0), Purpose::Unrestricted));
    }

    #[test]
    fn pinned_piece_cannot_move_off_line() {
        // White bishop on (6,4) pinned against king (7,4) by rook on (0,4).
        let mut s = state("4r1k1/8/8/8/8/8/4B3/4K3", Color::White);
        assert!(!is_legal(&mut s, mv(6, 4, 5, 5), Purpose::Play));
        assert!(is_legal(&mut s, mv(6, 4, 5, 5), Purpose::Unrestricted));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut s = state("5r1k/8/8/8/8/8/8/4K3", Color::White);
        assert!(!is_legal(&mut s, mv(7, 4, 7, 5), Purpose::Play));
        assert!(is_legal(&mut s, mv(7, 4, 7, 3), Purpose::Play));
    }

    #[test]
    fn pinned_attacker_does_not_block_quiet_moves() {
        // Black rook (3,4) eyes the king on (7,4) but is pinned to its own
        // king on (3,0) by the white rook on (3,7).
        let mut s = state("8/8/8/k3r2R/8/8/P7/4K3", Color::White);
        assert!(is_legal(&mut s, mv(6, 0, 5, 0), Purpose::Play));
        assert!(is_legal(&mut s, mv(7, 4, 7, 3), Purpose::Play));
    }

    #[test]
    fn king_may_enter_line_of_pinned_piece() {
        let mut s = state("8/8/8/k3r2R/8/8/8/3K4", Color::White);
        assert!(is_legal(&mut s, mv(7, 3, 7, 4), Purpose::Play));
    }

    #[test]
    fn en_passant_discovered_check_rejected() {
        // Capturing en passant would clear row 3 between king and rook.
        let mut s = state("7k/8/8/K2pP2r/8/8/8/8", Color::White);
        s.en_passant = Some(sq(2, 3));
        assert!(!is_legal(&mut s, mv(3, 4, 2, 3), Purpose::Play));
    }

    #[test]
    fn evaluation_leaves_state_untouched() {
        let mut s = state("r3k2r/8/8/3pP3/8/8/8/R3K2R", Color::White);
        s.en_passant = Some(sq(2, 3));
        let before = s.clone();
        for from in Square::all() {
            for to in Square::all() {
                is_legal(&mut s, Move::new(from, to), Purpose::Play);
                is_legal(&mut s, Move::new(from, to), Purpose::AttackScan);
            }
        }
        assert_eq!(s, before);
    }

    #[test]
    fn castling_requires_clear_path_and_rights() {
        let mut s = state("r3k2r/8/8/8/8/8/8/R3K2R", Color::White);
        assert!(is_legal(&mut s, mv(7, 4, 7, 6), Purpose::Play));
        assert!(is_legal(&mut s, mv(7, 4, 7, 2), Purpose::Play));

        s.castling.mark_rook_moved(Color::White, CastleSide::Kingside);
        assert!(!is_legal(&mut s, mv(7, 4, 7, 6), Purpose::Play));
        assert!(is_legal(&mut s, mv(7, 4, 7, 2), Purpose::Play));

        s.castling.mark_king_moved(Color::White);
        assert!(!is_legal(&mut s, mv(7, 4, 7, 2), Purpose::Play));
    }

    #[test]
    fn queenside_castling_needs_knight_square_empty() {
        let mut s = state("4k3/8/8/8/8/8/8/RN2K3", Color::White);
        assert!(!is_legal(&mut s, mv(7, 4, 7, 2), Purpose::Play));
    }

    #[test]
    fn castling_needs_rook_on_corner() {
        let mut s = state("4k3/8/8/8/8/8/8/4K3", Color::White);
        assert!(!is_legal(&mut s, mv(7, 4, 7, 6), Purpose::Play));
    }

    #[test]
    fn castling_out_of_check_rejected() {
        let mut s = state("4r1k1/8/8/8/8/8/8/4K2R", Color::White);
        assert!(!is_legal(&mut s, mv(7, 4, 7, 6), Purpose::Play));
    }

    #[test]
    fn castling_through_attacked_square_allowed() {
        // Rook on (0,5) covers (7,5), which the king crosses but does not land on.
        let mut s = state("5rk1/8/8/8/8/8/8/4K2R", Color::White);
        assert!(is_legal(&mut s, mv(7, 4, 7, 6), Purpose::Play));
    }

    #[test]
    fn castling_onto_attacked_square_rejected() {
        let mut s = state("k5r1/8/8/8/8/8/8/4K2R", Color::White);
        assert!(!is_legal(&mut s, mv(7, 4, 7, 6), Purpose::Play));
    }

    #[test]
    fn destinations_from_start() {
        let mut s = GameState::new();
        let knight = legal_destinations(&mut s, sq(7, 1), Purpose::Play);
        assert_eq!(knight, vec![sq(5, 0), sq(5, 2)]);
        let pawn = legal_destinations(&mut s, sq(6, 4), Purpose::Play);
        assert_eq!(pawn, vec![sq(4, 4), sq(5, 4)]);
        assert!(legal_destinations(&mut s, sq(7, 0), Purpose::Play).is_empty());
    }
}
