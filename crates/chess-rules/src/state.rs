//! Game state: the board plus the context legality depends on.

use chess_core::{Board, Color, PlacementError, Square};

/// The two castling directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastleSide {
    Queenside = 0,
    Kingside = 1,
}

impl CastleSide {
    /// Returns the index (0 for queenside, 1 for kingside).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column the rook starts on.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 7,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Queenside => 2,
            CastleSide::Kingside => 6,
        }
    }

    /// Column the rook lands on.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Queenside => 3,
            CastleSide::Kingside => 5,
        }
    }

    /// The side whose rook starts on `col`, if any.
    #[inline]
    pub const fn from_rook_col(col: u8) -> Option<Self> {
        match col {
            0 => Some(CastleSide::Queenside),
            7 => Some(CastleSide::Kingside),
            _ => None,
        }
    }

    /// The side whose king lands on `col`, if any.
    #[inline]
    pub const fn from_king_target_col(col: u8) -> Option<Self> {
        match col {
            2 => Some(CastleSide::Queenside),
            6 => Some(CastleSide::Kingside),
            _ => None,
        }
    }
}

/// Has-moved flags for each king and each rook origin square.
///
/// Flags only ever go from `false` to `true`. A rook flag is set when a rook
/// leaves its origin corner; a rook captured in place never sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CastlingRights {
    king_moved: [bool; 2],
    rook_moved: [[bool; 2]; 2],
}

impl CastlingRights {
    /// Rights at the start of a game: nothing has moved.
    pub const UNMOVED: CastlingRights = CastlingRights {
        king_moved: [false; 2],
        rook_moved: [[false; 2]; 2],
    };

    #[inline]
    pub const fn king_moved(self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    #[inline]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.rook_moved[color.index()][side.index()]
    }

    /// Returns true if neither the king nor the rook on `side` has moved.
    #[inline]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.king_moved[color.index()] = true;
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.rook_moved[color.index()][side.index()] = true;
    }
}

/// Complete rules-relevant state of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Piece placement.
    pub board: Board,

    /// The side to move.
    pub turn: Color,

    /// King and rook has-moved flags.
    pub castling: CastlingRights,

    /// Square a pawn passed over on the previous move, if it advanced two.
    pub en_passant: Option<Square>,

    /// Set once the game reaches a terminal condition.
    pub ended: bool,

    /// Winner of an ended game.
    pub winner: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates the standard starting state, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Creates a state around an arbitrary board with nothing yet moved.
    pub fn from_board(board: Board, turn: Color) -> Self {
        GameState {
            board,
            turn,
            castling: CastlingRights::UNMOVED,
            en_passant: None,
            ended: false,
            winner: None,
        }
    }

    /// Creates a state from placement text.
    pub fn from_placement(text: &str, turn: Color) -> Result<Self, PlacementError> {
        Ok(Self::from_board(Board::from_placement(text)?, turn))
    }
}
