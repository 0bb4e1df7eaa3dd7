//! Draw detection and overall board classification.

use super::super::outcome::TerminalState;
use super::super::{Board, PieceState};
use super::win::find_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != PieceState::Empty)
}

/// Classifies a board as in progress, won or drawn.
#[instrument(level = "trace")]
pub fn classify(board: &Board) -> TerminalState {
    if let Some(line) = find_winner(board) {
        TerminalState::Win(line)
    } else if is_full(board) {
        TerminalState::Draw
    } else {
        TerminalState::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Style};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(classify(&board), TerminalState::InProgress);
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::CENTER, PieceState::Occupied(Style::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_layout("XOX/OXX/OXO").unwrap();
        assert!(is_full(&board));
        assert_eq!(classify(&board), TerminalState::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X completes the main diagonal.
        let board = Board::from_layout("XOO/OXX/OXX").unwrap();
        assert!(is_full(&board));
        assert_eq!(classify(&board).winner(), Some(Style::X));
    }
}
