//! OXO core - tic-tac-toe game logic and automated opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Position`], [`Style`], [`PieceState`] and the copyable [`Board`]
//! - **Rules**: pure win/draw detection producing a [`TerminalState`]
//! - **Moves**: row-major enumeration of empty cells
//! - **Engine**: the [`DecisionEngine`] that picks moves for an automated seat
//! - **Session**: [`GameSession`], which applies validated moves and asks the
//!   engine to play for automated seats
//!
//! # Example
//!
//! ```
//! use oxo_core::{DecisionEngine, EngineConfig, GameSession, Seat, TerminalState};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = DecisionEngine::new(EngineConfig::default().with_seed(7));
//! let mut session = GameSession::new(Seat::Automated, Seat::Automated, engine);
//!
//! while !session.classify_state().is_terminal() {
//!     session.play_automated_turn()?;
//! }
//! assert_eq!(session.classify_state(), TerminalState::Draw);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod engine;
mod moves;
mod outcome;
mod position;
mod rules;
mod session;
mod types;

// Crate-level exports - Errors
pub use action::{LayoutError, MoveError};

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig, Strategy};

// Crate-level exports - Board model
pub use position::Position;
pub use types::{Board, PieceState, Style};

// Crate-level exports - Rules
pub use outcome::{TerminalState, WinningLine};
pub use rules::{LINES, classify, find_winner, is_full};

// Crate-level exports - Move enumeration
pub use moves::{EmptyPositions, empty_positions};

// Crate-level exports - Decision engine
pub use engine::{
    Decision, DecisionEngine, EngineError, Rule, ScriptedTieBreaker, SeededTieBreaker,
    TieBreaker, evaluate,
};

// Crate-level exports - Session management
pub use session::{GameSession, Seat, TurnError};
