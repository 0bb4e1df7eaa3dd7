//! Static evaluation and positional preference.

use super::super::rules::LINES;
use super::super::{Board, PieceState, Position, Style};

/// Weight of a single line cell in [`evaluate`].
const CELL_WEIGHT: i32 = 10;

/// Scores a board from `style`'s point of view without searching.
///
/// Every cell of every line contributes +10 when it holds `style` and -10
/// when it holds the opponent. Cells on several lines count once per line,
/// so the center weighs 4 times, corners 3 times and edges twice.
pub fn evaluate(board: &Board, style: Style) -> i32 {
    LINES
        .iter()
        .flat_map(|line| line.iter())
        .map(|&pos| match board.get(pos) {
            PieceState::Empty => 0,
            PieceState::Occupied(owner) if owner == style => CELL_WEIGHT,
            PieceState::Occupied(_) => -CELL_WEIGHT,
        })
        .sum()
}

/// Positional preference tier: lower is better.
fn tier(pos: Position) -> u8 {
    if pos.is_center() {
        0
    } else if pos.is_corner() {
        1
    } else {
        2
    }
}

/// Keeps only the candidates of the most preferred tier present:
/// center, else corners, else edges. Order is preserved.
pub(crate) fn preferred_tier(candidates: &[Position]) -> Vec<Position> {
    let Some(best) = candidates.iter().map(|&pos| tier(pos)).min() else {
        return Vec::new();
    };
    candidates
        .iter()
        .copied()
        .filter(|&pos| tier(pos) == best)
        .collect()
}

/// True when the opponent holds two opposite corners, `style` holds the
/// center and exactly 6 cells are empty.
///
/// Answering with a corner here lets the opponent fork through the
/// remaining corner, so the engine must answer on an edge.
pub(crate) fn is_opposite_corner_trap(board: &Board, style: Style) -> bool {
    let opponent = PieceState::Occupied(style.opponent());
    board.empty_count() == 6
        && board.get(Position::CENTER) == PieceState::Occupied(style)
        && [Position::TOP_LEFT, Position::TOP_RIGHT].iter().any(|&corner| {
            board.get(corner) == opponent
                && corner
                    .opposite_corner()
                    .is_some_and(|across| board.get(across) == opponent)
        })
}
