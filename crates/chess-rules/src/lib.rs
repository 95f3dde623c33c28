//! Chess rules engine: move legality, check and checkmate detection, and
//! special-move bookkeeping over an 8×8 board.
//!
//! This crate provides:
//! - [`GameState`] - board, side to move, castling flags, en-passant target
//! - [`patterns`] - path clearance and per-piece movement patterns
//! - [`legality`] - the move legality evaluator with its self-check filter
//! - [`detector`] - check and exhaustive checkmate detection
//! - [`apply`] - committing a validated move
//! - [`Game`] - coordinate move proposals, turns, clock, and game end
//!
//! # Example
//!
//! ```
//! use chess_rules::Game;
//! use chess_core::Color;
//!
//! let mut game = Game::new();
//! let report = game.propose_move(6, 4, 4, 4).unwrap();
//! assert!(report.accepted);
//! assert_eq!(game.turn(), Color::Black);
//! assert!(game.en_passant_target().is_some());
//! ```

pub mod apply;
mod clock;
mod config;
pub mod detector;
mod error;
mod game;
pub mod legality;
pub mod patterns;
mod promotion;
mod simulate;
mod state;

pub use apply::{apply_move, Applied};
pub use clock::Clock;
pub use config::{ClockConfig, ConfigError, GameConfig};
pub use detector::{is_checkmate, is_in_check};
pub use error::EngineError;
pub use game::{Game, MoveRecord, MoveReport};
pub use legality::{is_legal, Purpose};
pub use promotion::{AlwaysQueen, Promotion, PromotionChooser};
pub use state::{CastleSide, CastlingRights, GameState};
