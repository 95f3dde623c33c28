//! The promotion-choice collaborator.

use chess_core::{Color, PieceKind, Square};

/// Picks the replacement for a pawn reaching its last row.
///
/// Implemented for any `FnMut(Color, Square) -> Option<PieceKind>`. A choice
/// outside queen, rook, bishop, knight (or no choice) promotes to a queen.
pub trait PromotionChooser {
    fn choose_promotion(&mut self, color: Color, square: Square) -> Option<PieceKind>;
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color, Square) -> Option<PieceKind>,
{
    fn choose_promotion(&mut self, color: Color, square: Square) -> Option<PieceKind> {
        self(color, square)
    }
}

/// Always promotes to a queen.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysQueen;

impl PromotionChooser for AlwaysQueen {
    fn choose_promotion(&mut self, _color: Color, _square: Square) -> Option<PieceKind> {
        Some(PieceKind::Queen)
    }
}

/// The outcome of a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promotion {
    /// The kind the pawn became.
    pub kind: PieceKind,
    /// True if the chooser's answer was invalid and queen was used instead.
    pub defaulted: bool,
}

/// Asks `chooser` and validates the answer.
pub(crate) fn resolve(
    chooser: &mut dyn PromotionChooser,
    color: Color,
    square: Square,
) -> Promotion {
    match chooser.choose_promotion(color, square) {
        Some(kind) if kind.is_promotion_target() => Promotion {
            kind,
            defaulted: false,
        },
        other => {
            tracing::warn!(
                ?other,
                %square,
                "invalid promotion piece, promoting to queen by default"
            );
            Promotion {
                kind: PieceKind::Queen,
                defaulted: true,
            }
        }
    }
}
