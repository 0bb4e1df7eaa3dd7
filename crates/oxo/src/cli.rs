//! Command-line interface for oxo.

use clap::{Parser, Subcommand, ValueEnum};
use oxo_core::{Strategy, Style};
use std::path::PathBuf;

/// OXO - tic-tac-toe against a minimax engine
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the engine config (TOML); defaults apply if it does not exist
    #[arg(long, global = true, default_value = "oxo.toml")]
    pub config: PathBuf,

    /// Seed for tie-breaks, overriding the config file
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Move ranking strategy, overriding the config file
    #[arg(long, global = true)]
    pub strategy: Option<Strategy>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the engine
    Play {
        /// Which side the human plays (X moves first)
        #[arg(long, value_enum, default_value = "x")]
        human: Side,
    },

    /// Let the engine play itself and report the results
    SelfPlay {
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the engine's move for a board layout such as "XX./.O./..."
    Suggest {
        /// Row-major layout: X, O, and . for empty; / and spaces are ignored
        layout: String,

        /// Side to move for; inferred from piece counts when omitted
        #[arg(long, value_enum)]
        style: Option<Side>,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
}

/// A piece style as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// X
    X,
    /// O
    O,
}

impl From<Side> for Style {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Style::X,
            Side::O => Style::O,
        }
    }
}
