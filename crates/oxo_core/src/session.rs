//! Game session: one board, two seats, one engine.

use super::action::MoveError;
use super::engine::{DecisionEngine, EngineError};
use super::outcome::TerminalState;
use super::{Board, Position, Style, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays a seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// Moves arrive from outside through [`GameSession::apply_move`].
    Human,
    /// Moves come from the session's [`DecisionEngine`].
    Automated,
}

/// Error from playing an automated turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum TurnError {
    /// The engine refused to move.
    #[display("{}", _0)]
    Engine(EngineError),
    /// The engine's move was rejected by the board.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Engine(err) => Some(err),
            TurnError::Move(err) => Some(err),
        }
    }
}

/// A single game between two seats. X always moves first.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    x_seat: Seat,
    o_seat: Seat,
    engine: DecisionEngine,
    history: Vec<Position>,
    state: TerminalState,
}

impl GameSession {
    /// Creates a new session with an empty board.
    #[instrument(skip(engine))]
    pub fn new(x_seat: Seat, o_seat: Seat, engine: DecisionEngine) -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            x_seat,
            o_seat,
            engine,
            history: Vec::new(),
            state: TerminalState::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the style whose turn it is.
    pub fn to_move(&self) -> Style {
        self.board.to_move()
    }

    /// Returns who plays `style`.
    pub fn seat(&self, style: Style) -> Seat {
        match style {
            Style::X => self.x_seat,
            Style::O => self.o_seat,
        }
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the engine used for automated seats.
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Returns the current terminal state.
    pub fn classify_state(&self) -> TerminalState {
        self.state
    }

    /// Whether `pos` belongs to the winning line, for highlighting.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.state
            .winning_line()
            .is_some_and(|line| line.contains(pos))
    }

    /// Plays the side to move at `pos`.
    ///
    /// On success the turn passes to the other side and the new terminal
    /// state is returned. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyComplete`] once the game is won or drawn
    /// - [`MoveError::CellOccupied`] if the cell is taken
    #[instrument(skip(self), fields(style = %self.to_move()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<TerminalState, MoveError> {
        if self.state.is_terminal() {
            warn!(state = %self.state, "Move attempted on finished game");
            return Err(MoveError::GameAlreadyComplete);
        }

        let state = self.board.place(pos).inspect_err(|err| {
            warn!(error = %err, "Move rejected");
        })?;
        self.history.push(pos);
        self.state = state;

        debug_assert_eq!(self.state, rules::classify(&self.board));
        debug!(moves = self.history.len(), state = %self.state, "Move applied");
        if self.state.is_terminal() {
            info!(state = %self.state, "Game finished");
        }
        Ok(self.state)
    }

    /// Plays the side to move at raw `(row, col)` coordinates.
    ///
    /// # Errors
    ///
    /// As [`GameSession::apply_move`], plus [`MoveError::PositionOutOfRange`]
    /// for coordinates off the board.
    pub fn apply_move_at(&mut self, row: usize, col: usize) -> Result<TerminalState, MoveError> {
        let pos = Position::new(row, col)?;
        self.apply_move(pos)
    }

    /// Asks the engine for a move if the side to move is automated.
    ///
    /// Returns `Ok(None)` for a human seat or a finished game. The board is
    /// not changed; see [`GameSession::play_automated_turn`].
    #[instrument(skip(self), fields(style = %self.to_move()))]
    pub fn request_automated_move(&mut self) -> Result<Option<Position>, EngineError> {
        let style = self.to_move();
        match self.seat(style) {
            Seat::Human => {
                debug!("Side to move is human");
                Ok(None)
            }
            Seat::Automated if self.state.is_terminal() => Ok(None),
            Seat::Automated => self.engine.select_move(&self.board, style),
        }
    }

    /// Requests an automated move and applies it.
    ///
    /// Returns the move and the resulting state, or `Ok(None)` when the
    /// side to move is human or the game is over.
    pub fn play_automated_turn(&mut self) -> Result<Option<(Position, TerminalState)>, TurnError> {
        let Some(pos) = self.request_automated_move()? else {
            return Ok(None);
        };
        let state = self.apply_move(pos)?;
        Ok(Some((pos, state)))
    }

    /// Clears the board for a new game with the same seats and engine.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting game session");
        self.board = Board::new();
        self.history.clear();
        self.state = TerminalState::InProgress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineConfig, ScriptedTieBreaker};

    fn session(x: Seat, o: Seat) -> GameSession {
        let engine = DecisionEngine::with_tie_breaker(EngineConfig::default(), ScriptedTieBreaker::default());
        GameSession::new(x, o, engine)
    }

    #[test]
    fn test_apply_move_switches_turn() {
        let mut game = session(Seat::Human, Seat::Human);
        assert_eq!(game.to_move(), Style::X);
        assert_eq!(game.apply_move(Position::CENTER), Ok(TerminalState::InProgress));
        assert_eq!(game.to_move(), Style::O);
        assert_eq!(game.history(), &[Position::CENTER]);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = session(Seat::Human, Seat::Human);
        game.apply_move(Position::CENTER).unwrap();
        assert_eq!(
            game.apply_move(Position::CENTER),
            Err(MoveError::CellOccupied(Position::CENTER))
        );
        assert_eq!(game.to_move(), Style::O);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = session(Seat::Human, Seat::Human);
        assert_eq!(
            game.apply_move_at(0, 3),
            Err(MoveError::PositionOutOfRange { row: 0, col: 3 })
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_win_then_complete() {
        let mut game = session(Seat::Human, Seat::Human);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.apply_move_at(row, col).unwrap();
        }
        let state = game.apply_move_at(0, 2).unwrap();
        assert_eq!(state.winner(), Some(Style::X));
        assert!(game.is_winning_cell(Position::TOP_RIGHT));
        assert!(!game.is_winning_cell(Position::CENTER));
        assert_eq!(
            game.apply_move_at(2, 2),
            Err(MoveError::GameAlreadyComplete)
        );
    }

    #[test]
    fn test_human_seat_gets_no_automated_move() {
        let mut game = session(Seat::Human, Seat::Automated);
        assert_eq!(game.request_automated_move(), Ok(None));
        assert_eq!(game.play_automated_turn(), Ok(None));

        game.apply_move(Position::TOP_LEFT).unwrap();
        let (pos, state) = game.play_automated_turn().unwrap().unwrap();
        assert_eq!(pos, Position::CENTER);
        assert_eq!(state, TerminalState::InProgress);
        assert_eq!(game.to_move(), Style::X);
    }

    #[test]
    fn test_reset_keeps_seats() {
        let mut game = session(Seat::Automated, Seat::Human);
        game.play_automated_turn().unwrap();
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.classify_state(), TerminalState::InProgress);
        assert_eq!(game.seat(Style::X), Seat::Automated);
    }
}
