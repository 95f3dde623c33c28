//! Full game management.
//!
//! The [`Game`] struct owns a [`GameState`] and provides the outward surface:
//! - Proposing moves by coordinates and reporting check/checkmate
//! - Turn switching and the unrestricted (free placement) mode
//! - The promotion collaborator and the game-end listener
//! - A countdown clock that ends the game when a side runs out
//! - Read-only queries over the current state

use std::fmt;
use std::time::Duration;

use chess_core::{Board, Color, Move, Piece, PieceKind, Square};

use crate::apply::apply_move;
use crate::detector;
use crate::legality::{self, Purpose};
use crate::promotion::{AlwaysQueen, Promotion, PromotionChooser};
use crate::{CastleSide, CastlingRights, Clock, EngineError, GameConfig, GameState};

/// Outcome of a proposed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveReport {
    /// Whether the move was legal and applied.
    pub accepted: bool,
    /// Whether the side now to move is in check.
    pub check: bool,
    /// Whether the side now to move is checkmated.
    pub checkmate: bool,
    /// Winner, if the move ended the game.
    pub winner: Option<Color>,
    /// Promotion performed by the move, if any.
    pub promotion: Option<Promotion>,
}

impl MoveReport {
    fn rejected() -> Self {
        MoveReport::default()
    }
}

/// A move recorded in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The move played.
    pub mov: Move,
    /// The piece that moved, before any promotion.
    pub piece: Piece,
    /// The captured piece, if any.
    pub captured: Option<Piece>,
    /// Side castled toward, if the move was castling.
    pub castled: Option<CastleSide>,
    /// True if the capture was en passant.
    pub en_passant: bool,
    /// Kind the pawn promoted to, if any.
    pub promotion: Option<PieceKind>,
}

type GameEndListener = Box<dyn FnMut(Color)>;

/// A chess game driven by coordinate move proposals.
pub struct Game {
    /// Current state.
    state: GameState,
    /// Free placement mode: no turns, no self-check filter.
    unrestricted: bool,
    /// Countdown, if the game is timed.
    clock: Option<Clock>,
    /// Asked whenever a pawn promotes.
    chooser: Box<dyn PromotionChooser>,
    /// Notified once when the game ends.
    on_end: Option<GameEndListener>,
    /// Accepted moves in order.
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("unrestricted", &self.unrestricted)
            .field("clock", &self.clock)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a new untimed game from the standard starting position.
    pub fn new() -> Self {
        Self::build(GameState::new())
    }

    /// Creates an untimed game from a custom state.
    ///
    /// A running game needs both kings on the board; otherwise this fails
    /// with [`EngineError::MissingKing`].
    pub fn from_state(state: GameState) -> Result<Self, EngineError> {
        if !state.ended {
            ensure_kings(&state.board)?;
        }
        Ok(Self::build(state))
    }

    fn build(state: GameState) -> Self {
        Game {
            state,
            unrestricted: false,
            clock: None,
            chooser: Box::new(AlwaysQueen),
            on_end: None,
            history: Vec::new(),
        }
    }

    /// Creates a standard game configured by `config`.
    pub fn with_config(config: &GameConfig, chooser: impl PromotionChooser + 'static) -> Self {
        let mut game = Self::new();
        game.unrestricted = config.unrestricted;
        game.clock = config.clock.per_side().map(Clock::new);
        game.chooser = Box::new(chooser);
        game
    }

    /// Replaces the promotion collaborator.
    pub fn set_promotion_chooser(&mut self, chooser: impl PromotionChooser + 'static) {
        self.chooser = Box::new(chooser);
    }

    /// Registers the listener told the winner when the game ends.
    pub fn on_game_end(&mut self, listener: impl FnMut(Color) + 'static) {
        self.on_end = Some(Box::new(listener));
    }

    /// Starts a countdown giving each side `per_side`.
    pub fn set_clock(&mut self, per_side: Duration) {
        self.clock = Some(Clock::new(per_side));
    }

    /// Enables or disables unrestricted mode.
    pub fn set_unrestricted_mode(&mut self, enabled: bool) {
        self.unrestricted = enabled;
    }

    /// Returns true in unrestricted mode.
    pub fn is_unrestricted(&self) -> bool {
        self.unrestricted
    }

    fn purpose(&self) -> Purpose {
        if self.unrestricted {
            Purpose::Unrestricted
        } else {
            Purpose::Play
        }
    }

    /// Proposes moving the piece on `(from_row, from_col)` to
    /// `(to_row, to_col)`.
    ///
    /// Illegal moves and moves after the game ended come back with
    /// `accepted: false`. Coordinates off the board are an error.
    pub fn propose_move(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<MoveReport, EngineError> {
        let from = square(from_row, from_col)?;
        let to = square(to_row, to_col)?;
        self.make_move(Move::new(from, to))
    }

    /// Proposes `mv`. See [`propose_move`](Game::propose_move).
    pub fn make_move(&mut self, mv: Move) -> Result<MoveReport, EngineError> {
        if self.state.ended {
            tracing::debug!(%mv, "move rejected: game has ended");
            return Ok(MoveReport::rejected());
        }
        ensure_kings(&self.state.board)?;
        let purpose = self.purpose();
        if !legality::is_legal(&mut self.state, mv, purpose) {
            tracing::debug!(%mv, turn = %self.state.turn, "move rejected");
            return Ok(MoveReport::rejected());
        }
        let Some(applied) = apply_move(&mut self.state, mv, self.chooser.as_mut()) else {
            return Ok(MoveReport::rejected());
        };
        tracing::debug!(%mv, piece = %applied.piece, "move applied");

        self.history.push(MoveRecord {
            mov: mv,
            piece: applied.piece,
            captured: applied.captured,
            castled: applied.castled,
            en_passant: applied.en_passant_capture.is_some(),
            promotion: applied.promotion.map(|p| p.kind),
        });

        let mover = applied.piece.color;
        let mut report = MoveReport {
            accepted: true,
            promotion: applied.promotion,
            ..MoveReport::default()
        };

        if applied.captured.is_some_and(|p| p.kind == PieceKind::King) {
            tracing::info!(winner = %mover, "king captured");
            self.end_game(mover);
            report.winner = Some(mover);
            return Ok(report);
        }

        if !self.unrestricted {
            self.state.turn = self.state.turn.opposite();
        }

        let side = self.state.turn;
        report.check = detector::is_in_check(&mut self.state, side)?;
        if report.check {
            report.checkmate = detector::is_checkmate(&mut self.state, side)?;
        }
        if report.checkmate {
            let winner = side.opposite();
            tracing::info!(%winner, "checkmate");
            self.end_game(winner);
            report.winner = Some(winner);
        } else if report.check {
            tracing::info!(%side, "check");
        }
        Ok(report)
    }

    /// Ends the game with `winner`. Does nothing if it already ended.
    pub fn end_game(&mut self, winner: Color) {
        if self.state.ended {
            return;
        }
        self.state.ended = true;
        self.state.winner = Some(winner);
        tracing::info!(%winner, "game over");
        if let Some(listener) = self.on_end.as_mut() {
            listener(winner);
        }
    }

    /// Charges `elapsed` to the side to move. Returns the winner if this ran
    /// that side's time out.
    pub fn tick_clock(&mut self, elapsed: Duration) -> Option<Color> {
        if self.state.ended {
            return None;
        }
        let side = self.state.turn;
        let expired = self.clock.as_mut()?.tick(side, elapsed);
        if !expired {
            return None;
        }
        let winner = side.opposite();
        tracing::info!(loser = %side, "clock expired");
        self.end_game(winner);
        Some(winner)
    }

    /// Returns the clock, if the game is timed.
    pub fn clock(&self) -> Option<&Clock> {
        self.clock.as_ref()
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.state.turn
    }

    /// Returns the castling has-moved flags.
    pub fn castling_rights(&self) -> CastlingRights {
        self.state.castling
    }

    /// Returns the en-passant target square, if any.
    pub fn en_passant_target(&self) -> Option<Square> {
        self.state.en_passant
    }

    /// Returns true once the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state.ended
    }

    /// Returns the winner of an ended game.
    pub fn winner(&self) -> Option<Color> {
        self.state.winner
    }

    /// Returns the accepted moves so far.
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns true if `side`'s king is in check.
    pub fn is_in_check(&self, side: Color) -> Result<bool, EngineError> {
        let mut scratch = self.state.clone();
        detector::is_in_check(&mut scratch, side)
    }

    /// Returns true if `side` is checkmated.
    pub fn is_checkmate(&self, side: Color) -> Result<bool, EngineError> {
        let mut scratch = self.state.clone();
        detector::is_checkmate(&mut scratch, side)
    }

    /// Returns true if `mv` would be accepted now, without playing it.
    pub fn is_legal(&self, mv: Move) -> bool {
        if self.state.ended {
            return false;
        }
        let mut scratch = self.state.clone();
        legality::is_legal(&mut scratch, mv, self.purpose())
    }

    /// Every square the piece on `from` may legally move to now.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if self.state.ended {
            return Vec::new();
        }
        let mut scratch = self.state.clone();
        legality::legal_destinations(&mut scratch, from, self.purpose())
    }
}

fn ensure_kings(board: &Board) -> Result<(), EngineError> {
    for color in Color::ALL {
        board.find_king(color).ok_or(EngineError::MissingKing(color))?;
    }
    Ok(())
}

fn square(row: i32, col: i32) -> Result<Square, EngineError> {
    Square::from_coords(row, col).ok_or(EngineError::InvalidCoordinate { row, col })
}
