//! Core domain types for tic-tac-toe.

use super::action::{LayoutError, MoveError};
use super::moves::EmptyPositions;
use super::outcome::TerminalState;
use super::{Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Piece style, i.e. which participant a piece or move belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Style {
    /// Style X (moves first).
    X,
    /// Style O (moves second).
    O,
}

impl Style {
    /// Returns the opposing style.
    pub fn opponent(self) -> Self {
        match self {
            Style::X => Style::O,
            Style::O => Style::X,
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    /// Empty cell.
    Empty,
    /// Cell holding a piece of the given style.
    Occupied(Style),
}

impl PieceState {
    /// Returns the style occupying the cell, if any.
    pub fn style(self) -> Option<Style> {
        match self {
            PieceState::Empty => None,
            PieceState::Occupied(style) => Some(style),
        }
    }
}

/// 3x3 tic-tac-toe board plus the side to move.
///
/// `Board` is `Copy`: duplicating it copies all nine cells, so a duplicate
/// can be mutated freely for "what if" evaluation without touching the
/// original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [PieceState; 9],
    /// Style whose turn it is.
    to_move: Style,
}

impl Board {
    /// Creates a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            cells: [PieceState::Empty; 9],
            to_move: Style::X,
        }
    }

    /// Parses a board from a row-major layout string.
    ///
    /// `X`/`O` (any case) are pieces; `.`, `-`, `_` and digits are empty
    /// cells; whitespace, `|` and `/` are ignored. The side to move is
    /// inferred from the piece counts: X moves whenever it has not placed
    /// more pieces than O.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] on an unknown character or a cell count other
    /// than 9.
    #[instrument]
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let mut cells = Vec::with_capacity(9);
        for ch in layout.chars() {
            let cell = match ch {
                'X' | 'x' => PieceState::Occupied(Style::X),
                'O' | 'o' => PieceState::Occupied(Style::O),
                '.' | '-' | '_' | '1'..='9' => PieceState::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                other => return Err(LayoutError::InvalidCharacter(other)),
            };
            cells.push(cell);
        }

        let cells: [PieceState; 9] = cells
            .try_into()
            .map_err(|cells: Vec<PieceState>| LayoutError::WrongLength(cells.len()))?;

        let mut board = Self {
            cells,
            to_move: Style::X,
        };
        board.to_move = if board.count(Style::X) > board.count(Style::O) {
            Style::O
        } else {
            Style::X
        };
        debug!(to_move = %board.to_move, "Parsed board layout");
        Ok(board)
    }

    /// Returns the contents of the cell at `pos`.
    pub fn get(&self, pos: Position) -> PieceState {
        self.cells[pos.to_index()]
    }

    /// Overwrites a cell without any legality checks.
    ///
    /// Intended for setting up positions directly. Game play goes through
    /// [`Board::place`].
    pub fn set(&mut self, pos: Position, state: PieceState) {
        self.cells[pos.to_index()] = state;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == PieceState::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[PieceState; 9] {
        &self.cells
    }

    /// Returns the style whose turn it is.
    pub fn to_move(&self) -> Style {
        self.to_move
    }

    /// Sets the style whose turn it is.
    pub fn set_to_move(&mut self, style: Style) {
        self.to_move = style;
    }

    /// Number of pieces of the given style.
    pub fn count(&self, style: Style) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == PieceState::Occupied(style))
            .count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == PieceState::Empty)
            .count()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> EmptyPositions {
        EmptyPositions::new(self)
    }

    /// Returns a duplicate with `style` placed at `pos` and the turn passed
    /// to the other side.
    ///
    /// The receiver is left untouched. No legality checks are made.
    pub fn with_piece(&self, pos: Position, style: Style) -> Self {
        let mut next = *self;
        next.set(pos, PieceState::Occupied(style));
        next.to_move = style.opponent();
        next
    }

    /// Places the side to move's piece at `pos` and passes the turn.
    ///
    /// This is the only game-play mutation of a board. Returns the terminal
    /// state after the move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyComplete`] if the board is already won or full
    /// - [`MoveError::CellOccupied`] if the cell is not empty
    #[instrument(skip(self), fields(style = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<TerminalState, MoveError> {
        if rules::classify(self).is_terminal() {
            return Err(MoveError::GameAlreadyComplete);
        }
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        self.set(pos, PieceState::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();
        Ok(rules::classify(self))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::str::FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_layout(s)
    }
}

/// Renders the board as a grid, numbering empty cells 1-9.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    PieceState::Empty => write!(f, "{}", index + 1)?,
                    PieceState::Occupied(style) => write!(f, "{}", style)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board.to_move(), Style::X);
    }

    #[test]
    fn test_layout_infers_turn() {
        let board = Board::from_layout("X.. / .O. / ..X").unwrap();
        assert_eq!(board.get(Position::TOP_LEFT), PieceState::Occupied(Style::X));
        assert_eq!(board.get(Position::CENTER), PieceState::Occupied(Style::O));
        assert_eq!(board.to_move(), Style::O);

        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.to_move(), Style::X);
    }

    #[test]
    fn test_layout_errors() {
        assert_eq!(
            Board::from_layout("XO"),
            Err(LayoutError::WrongLength(2))
        );
        assert_eq!(
            Board::from_layout("XO.Z....."),
            Err(LayoutError::InvalidCharacter('Z'))
        );
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = Board::from_layout("X...O....").unwrap();
        let mut copy = original;
        copy.set(Position::BOTTOM_RIGHT, PieceState::Occupied(Style::X));
        let hypothetical = original.with_piece(Position::TOP_RIGHT, Style::X);

        assert!(original.is_empty(Position::BOTTOM_RIGHT));
        assert!(original.is_empty(Position::TOP_RIGHT));
        assert!(!copy.is_empty(Position::BOTTOM_RIGHT));
        assert!(!hypothetical.is_empty(Position::TOP_RIGHT));
    }

    #[test]
    fn test_place_alternates_and_rejects_occupied() {
        let mut board = Board::new();
        board.place(Position::CENTER).unwrap();
        assert_eq!(board.get(Position::CENTER), PieceState::Occupied(Style::X));
        assert_eq!(board.to_move(), Style::O);

        assert_eq!(
            board.place(Position::CENTER),
            Err(MoveError::CellOccupied(Position::CENTER))
        );
        assert_eq!(board.to_move(), Style::O);
    }

    #[test]
    fn test_place_after_win_is_rejected() {
        let mut board = Board::from_layout("XXX/OO./...").unwrap();
        assert_eq!(
            board.place(Position::BOTTOM_LEFT),
            Err(MoveError::GameAlreadyComplete)
        );
        assert!(board.is_empty(Position::BOTTOM_LEFT));
    }

    #[test]
    fn test_display_grid() {
        let board = Board::from_layout("X.O......").unwrap();
        assert_eq!(board.to_string(), "X|2|O\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }
}
