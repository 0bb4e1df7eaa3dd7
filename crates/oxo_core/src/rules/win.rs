//! Win detection logic for tic-tac-toe.

use super::super::outcome::WinningLine;
use super::super::{Board, PieceState, Position};
use tracing::instrument;

/// The 8 winning lines in detection priority order: rows top to bottom,
/// columns left to right, main diagonal, anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    [
        Position::MIDDLE_LEFT,
        Position::CENTER,
        Position::MIDDLE_RIGHT,
    ],
    [
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ],
    // Columns
    [
        Position::TOP_LEFT,
        Position::MIDDLE_LEFT,
        Position::BOTTOM_LEFT,
    ],
    [
        Position::TOP_CENTER,
        Position::CENTER,
        Position::BOTTOM_CENTER,
    ],
    [
        Position::TOP_RIGHT,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_RIGHT,
    ],
    // Diagonals
    [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
];

/// Finds the first completed line on the board.
///
/// Returns `Some(line)` for the first of [`LINES`] whose three cells hold
/// the same style, `None` otherwise. On a board with two completed lines
/// the earlier one in [`LINES`] wins.
#[instrument(level = "trace")]
pub fn find_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        PieceState::Occupied(style) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(WinningLine::new(style, [a, b, c]))
        }
        _ => None,
    })
}
