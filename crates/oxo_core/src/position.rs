//! Board coordinates for tic-tac-toe moves.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board, addressed by `(row, col)`, both 0-indexed.
///
/// A `Position` is always in range: the only way to build one from raw
/// integers is [`Position::new`], which rejects anything outside `[0, 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Top-left (0, 0)
    pub const TOP_LEFT: Position = Position { row: 0, col: 0 };
    /// Top-center (0, 1)
    pub const TOP_CENTER: Position = Position { row: 0, col: 1 };
    /// Top-right (0, 2)
    pub const TOP_RIGHT: Position = Position { row: 0, col: 2 };
    /// Middle-left (1, 0)
    pub const MIDDLE_LEFT: Position = Position { row: 1, col: 0 };
    /// Center (1, 1)
    pub const CENTER: Position = Position { row: 1, col: 1 };
    /// Middle-right (1, 2)
    pub const MIDDLE_RIGHT: Position = Position { row: 1, col: 2 };
    /// Bottom-left (2, 0)
    pub const BOTTOM_LEFT: Position = Position { row: 2, col: 0 };
    /// Bottom-center (2, 1)
    pub const BOTTOM_CENTER: Position = Position { row: 2, col: 1 };
    /// Bottom-right (2, 2)
    pub const BOTTOM_RIGHT: Position = Position { row: 2, col: 2 };

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TOP_LEFT,
        Position::TOP_CENTER,
        Position::TOP_RIGHT,
        Position::MIDDLE_LEFT,
        Position::CENTER,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ];

    /// The four corners.
    pub const CORNERS: [Position; 4] = [
        Position::TOP_LEFT,
        Position::TOP_RIGHT,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_RIGHT,
    ];

    /// The four non-corner edge cells.
    pub const EDGES: [Position; 4] = [
        Position::TOP_CENTER,
        Position::MIDDLE_LEFT,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_CENTER,
    ];

    /// Creates a position, rejecting coordinates outside the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::PositionOutOfRange`] if `row` or `col` is 3 or more.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= 3 || col >= 3 {
            return Err(MoveError::PositionOutOfRange { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Converts position to row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// Creates position from row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether this is the center cell.
    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }

    /// Whether this is one of the four corners.
    pub fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }

    /// Whether this is a non-corner edge cell.
    pub fn is_edge(self) -> bool {
        !self.is_center() && !self.is_corner()
    }

    /// The corner diagonally across the board, if this is a corner.
    pub fn opposite_corner(self) -> Option<Self> {
        self.is_corner().then(|| Self {
            row: 2 - self.row,
            col: 2 - self.col,
        })
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self.to_index() {
            0 => "Top-left",
            1 => "Top-center",
            2 => "Top-right",
            3 => "Middle-left",
            4 => "Center",
            5 => "Middle-right",
            6 => "Bottom-left",
            7 => "Bottom-center",
            _ => "Bottom-right",
        }
    }

    /// Parses user input into a position.
    ///
    /// Accepts a cell number `1`-`9` (row-major, as printed on an empty
    /// board), a `row,col` pair, or a label such as `center` or `top-left`.
    #[instrument]
    pub fn parse(input: &str) -> Option<Position> {
        let input = input.trim();

        if let Some((row, col)) = input.split_once(',') {
            let row = row.trim().parse::<usize>().ok()?;
            let col = col.trim().parse::<usize>().ok()?;
            return Self::new(row, col).ok();
        }

        if let Ok(number) = input.parse::<usize>() {
            return number.checked_sub(1).and_then(Self::from_index);
        }

        let lower = input.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|pos| pos.label().to_lowercase() == lower)
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row(), pos.col())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
