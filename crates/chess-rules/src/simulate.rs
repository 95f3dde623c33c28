//! Scoped, self-reverting board mutation.

use std::ops::{Deref, DerefMut};

use chess_core::{Move, Piece, Square};

use crate::patterns::en_passant_victim;
use crate::GameState;

/// A tentative move that is undone when the guard drops.
///
/// The guard applies the minimal diff of a move (mover to destination, origin
/// cleared, en-passant victim lifted) and restores the touched cells and the
/// en-passant target on drop, so every return path reverts it.
pub(crate) struct Simulation<'a> {
    state: &'a mut GameState,
    mv: Move,
    moved: Option<Piece>,
    displaced: Option<Piece>,
    victim: Option<(Square, Piece)>,
    en_passant: Option<Square>,
}

impl<'a> Simulation<'a> {
    pub(crate) fn new(state: &'a mut GameState, mv: Move) -> Self {
        let en_passant = state.en_passant;
        let victim = state
            .board
            .get(mv.from)
            .and_then(|piece| en_passant_victim(&state.board, mv, piece, en_passant))
            .and_then(|sq| state.board.take(sq).map(|piece| (sq, piece)));
        let moved = state.board.take(mv.from);
        let displaced = state.board.set(mv.to, moved);
        Simulation {
            state,
            mv,
            moved,
            displaced,
            victim,
            en_passant,
        }
    }
}

impl Deref for Simulation<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for Simulation<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.state.board.set(self.mv.to, self.displaced);
        self.state.board.set(self.mv.from, self.moved);
        if let Some((sq, piece)) = self.victim {
            self.state.board.set(sq, Some(piece));
        }
        self.state.en_passant = self.en_passant;
    }
}
