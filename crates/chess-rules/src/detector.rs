//! Check and checkmate detection.
//!
//! A king is in check when some opposing piece could legally move onto its
//! square. "Legally" includes the self-check filter, so an attacker pinned
//! against its own king does not give check. The same scan backs the filter
//! itself: nested scans end because each level captures a king on the
//! simulated board, and a side without a king is never in check there.

use chess_core::{Color, Move, Square};

use crate::legality::{is_legal, Purpose};
use crate::simulate::Simulation;
use crate::{EngineError, GameState};

/// Returns true if `side`'s king is in check.
///
/// Fails with [`EngineError::MissingKing`] if `side` has no king.
pub fn is_in_check(state: &mut GameState, side: Color) -> Result<bool, EngineError> {
    let king = state
        .board
        .find_king(side)
        .ok_or(EngineError::MissingKing(side))?;
    Ok(scan(state, king, side.opposite()))
}

/// Check status used inside legality evaluation. A missing king is not in
/// check, which happens when an enclosing scan simulated its capture.
pub(crate) fn king_in_check(state: &mut GameState, side: Color) -> bool {
    match state.board.find_king(side) {
        Some(king) => scan(state, king, side.opposite()),
        None => false,
    }
}

fn scan(state: &mut GameState, king: Square, by: Color) -> bool {
    for from in Square::all() {
        let attacker = state.board.get(from).is_some_and(|p| p.color == by);
        if attacker && is_legal(state, Move::new(from, king), Purpose::AttackScan) {
            return true;
        }
    }
    false
}

/// Returns true if `side` is in check and no legal move gets it out.
///
/// Exhaustive: every origin holding a piece of `side` is paired with every
/// destination. The search runs as if `side` were to move; the turn is
/// restored afterwards.
pub fn is_checkmate(state: &mut GameState, side: Color) -> Result<bool, EngineError> {
    if !is_in_check(state, side)? {
        return Ok(false);
    }
    let previous = std::mem::replace(&mut state.turn, side);
    let escape = find_escape(state, side);
    state.turn = previous;
    Ok(escape?.is_none())
}

/// First move by `side` that leaves its king out of check, if any.
fn find_escape(state: &mut GameState, side: Color) -> Result<Option<Move>, EngineError> {
    for from in Square::all() {
        if !state.board.get(from).is_some_and(|p| p.color == side) {
            continue;
        }
        for to in Square::all() {
            let mv = Move::new(from, to);
            if !is_legal(state, mv, Purpose::Play) {
                continue;
            }
            let mut committed = Simulation::new(state, mv);
            if !is_in_check(&mut committed, side)? {
                return Ok(Some(mv));
            }
        }
    }
    Ok(None)
}
