//! Enumeration of legal (empty) cells.
//!
//! The order is always row-major: several engine rules break ties by taking
//! the first candidate, so callers may rely on it.

use super::{Board, PieceState, Position};

/// Iterator over the empty cells of a board snapshot, in row-major order.
///
/// The iterator owns a copy of the cells, so it stays valid while the board
/// it came from is mutated.
#[derive(Debug, Clone)]
pub struct EmptyPositions {
    cells: [PieceState; 9],
    next: usize,
}

impl EmptyPositions {
    /// Starts an enumeration over the given board.
    pub fn new(board: &Board) -> Self {
        Self {
            cells: *board.cells(),
            next: 0,
        }
    }
}

impl Iterator for EmptyPositions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while self.next < self.cells.len() {
            let index = self.next;
            self.next += 1;
            if self.cells[index] == PieceState::Empty {
                return Position::from_index(index);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cells.len() - self.next))
    }
}

/// Returns the empty positions of `board` in row-major order.
pub fn empty_positions(board: &Board) -> EmptyPositions {
    EmptyPositions::new(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Style;

    #[test]
    fn test_empty_board_yields_all_in_order() {
        let board = Board::new();
        let positions: Vec<_> = empty_positions(&board).collect();
        assert_eq!(positions, Position::ALL.to_vec());
    }

    #[test]
    fn test_filters_occupied() {
        let mut board = Board::new();
        board.set(Position::TOP_LEFT, PieceState::Occupied(Style::X));
        board.set(Position::CENTER, PieceState::Occupied(Style::O));

        let positions: Vec<_> = empty_positions(&board).collect();
        assert_eq!(positions.len(), 7);
        assert_eq!(positions[0], Position::TOP_CENTER);
        assert!(!positions.contains(&Position::TOP_LEFT));
        assert!(!positions.contains(&Position::CENTER));
        assert_eq!(positions.last(), Some(&Position::BOTTOM_RIGHT));
    }

    #[test]
    fn test_restartable() {
        let board = Board::from_layout("XO.X.O...").unwrap();
        let first: Vec<_> = board.empty_positions().collect();
        let second: Vec<_> = board.empty_positions().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_board_yields_nothing() {
        let board = Board::from_layout("XOXXOOOXX").unwrap();
        assert_eq!(empty_positions(&board).next(), None);
    }
}
