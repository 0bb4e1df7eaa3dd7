//! Error types for move application and board construction.

use super::Position;

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: the board is left untouched when a move
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game already has a winner or the board is full.
    #[display("Game is already complete")]
    GameAlreadyComplete,

    /// The coordinates do not name a cell on the 3x3 board.
    #[display("Position ({}, {}) is outside the 3x3 board", row, col)]
    PositionOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveError {}

/// Error raised when a board layout string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum LayoutError {
    /// The layout does not describe exactly 9 cells.
    #[display("Board layout must have 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character is neither a piece nor an empty-cell marker.
    #[display("Unexpected character {:?} in board layout", _0)]
    InvalidCharacter(char),
}

impl std::error::Error for LayoutError {}
