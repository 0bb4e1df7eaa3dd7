//! Engine-versus-engine games.

use oxo_core::{DecisionEngine, EngineConfig, GameSession, Seat, TerminalState, TurnError};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Results of a batch of self-play games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, derive_more::Display)]
#[display(
    "{} games: X won {}, O won {}, {} drawn",
    games,
    x_wins,
    o_wins,
    draws
)]
pub struct Tally {
    /// Games played
    pub games: usize,
    /// Games won by X
    pub x_wins: usize,
    /// Games won by O
    pub o_wins: usize,
    /// Drawn games
    pub draws: usize,
}

impl Tally {
    fn record(&mut self, state: TerminalState) {
        self.games += 1;
        match state.winner() {
            Some(oxo_core::Style::X) => self.x_wins += 1,
            Some(oxo_core::Style::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

/// Plays `games` games with one engine on both seats.
#[instrument(skip(config), fields(strategy = %config.strategy()))]
pub fn run_games(config: &EngineConfig, games: usize) -> Result<Tally, TurnError> {
    let engine = DecisionEngine::new(config.clone());
    let mut session = GameSession::new(Seat::Automated, Seat::Automated, engine);
    let mut tally = Tally::default();

    for game in 0..games {
        if game > 0 {
            session.reset();
        }
        while !session.classify_state().is_terminal() {
            if session.play_automated_turn()?.is_none() {
                break;
            }
        }

        let state = session.classify_state();
        debug!(game, moves = ?session.history(), "Game record");
        info!(game, %state, "Self-play game finished");
        tally.record(state);
    }

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxo_core::Strategy;

    #[test]
    fn test_minimax_self_play_draws() {
        let config = EngineConfig::default().with_seed(11);
        let tally = run_games(&config, 5).unwrap();
        assert_eq!(tally, Tally { games: 5, x_wins: 0, o_wins: 0, draws: 5 });
    }

    #[test]
    fn test_every_strategy_finishes() {
        for strategy in [Strategy::DepthLimited, Strategy::Heuristic] {
            let config = EngineConfig::default().with_seed(3).with_strategy(strategy);
            let tally = run_games(&config, 3).unwrap();
            assert_eq!(tally.games, 3);
            assert_eq!(tally.x_wins + tally.o_wins + tally.draws, 3);
        }
    }

    #[test]
    fn test_tally_serializes() {
        let tally = Tally { games: 2, x_wins: 0, o_wins: 1, draws: 1 };
        let json = serde_json::to_value(tally).unwrap();
        assert_eq!(json["o_wins"], 1);
        assert_eq!(tally.to_string(), "2 games: X won 0, O won 1, 1 drawn");
    }
}
