//! Terminal-state classification results.

use super::{Position, Style};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A completed line: the winning style and the three cells that form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct WinningLine {
    /// Style holding all three cells.
    style: Style,
    /// The cells of the line, in line order.
    cells: [Position; 3],
}

impl WinningLine {
    /// Whether `pos` is one of the three winning cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalState {
    /// Moves remain and nobody has won.
    InProgress,
    /// A line has been completed.
    Win(WinningLine),
    /// The board is full with no winning line.
    Draw,
}

impl TerminalState {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalState::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Style> {
        self.winning_line().map(|line| *line.style())
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            TerminalState::Win(line) => Some(line),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, TerminalState::Draw)
    }
}

impl std::fmt::Display for TerminalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalState::InProgress => write!(f, "In progress"),
            TerminalState::Win(line) => write!(f, "{} wins!", line.style()),
            TerminalState::Draw => write!(f, "It's a draw!"),
        }
    }
}
