//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so the session and the engine
//! classify boards the same way.

pub mod draw;
pub mod win;

pub use draw::{classify, is_full};
pub use win::{LINES, find_winner};
