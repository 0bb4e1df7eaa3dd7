//! Interactive console game.

use anyhow::Result;
use oxo_core::{DecisionEngine, EngineConfig, GameSession, Position, Seat, Style, TerminalState};
use std::io::{self, BufRead, Write};
use tracing::{info, instrument};

/// Plays one game on stdin/stdout with the human on `human`'s side.
pub fn run_interactive(config: EngineConfig, human: Style) -> Result<()> {
    let engine = DecisionEngine::new(config);
    let (x_seat, o_seat) = match human {
        Style::X => (Seat::Human, Seat::Automated),
        Style::O => (Seat::Automated, Seat::Human),
    };
    let mut session = GameSession::new(x_seat, o_seat, engine);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, stdin.lock(), stdout.lock())
}

/// Drives `session` until it ends, the player quits or input runs out.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(session: &mut GameSession, input: R, mut out: W) -> Result<()> {
    let mut lines = input.lines();

    loop {
        writeln!(out, "\n{}\n", session.board())?;

        let state = session.classify_state();
        if state.is_terminal() {
            report_result(&mut out, state)?;
            return Ok(());
        }

        let style = session.to_move();
        match session.seat(style) {
            Seat::Automated => {
                if let Some((pos, _)) = session.play_automated_turn()? {
                    writeln!(out, "Computer ({}) plays {} {}", style, pos.label(), pos)?;
                }
            }
            Seat::Human => {
                write!(out, "Player {} - enter a cell (1-9 or row,col), q to quit: ", style)?;
                out.flush()?;

                let Some(line) = lines.next() else {
                    info!("Input closed, abandoning game");
                    return Ok(());
                };
                let line = line?;
                let line = line.trim();

                if line.eq_ignore_ascii_case("q") {
                    info!(%style, "Player quit");
                    writeln!(out, "Player {} has quit the game", style)?;
                    return Ok(());
                }

                match Position::parse(line) {
                    Some(pos) => {
                        if let Err(err) = session.apply_move(pos) {
                            writeln!(out, "ERROR: {}", err)?;
                        }
                    }
                    None => writeln!(out, "ERROR: '{}' is not a cell", line)?,
                }
            }
        }
    }
}

fn report_result<W: Write>(out: &mut W, state: TerminalState) -> io::Result<()> {
    writeln!(out, "{}", state)?;
    if let Some(line) = state.winning_line() {
        let cells: Vec<&str> = line.cells().iter().map(|pos| pos.label()).collect();
        writeln!(out, "Winning line: {}", cells.join(", "))?;
    }
    Ok(())
}
