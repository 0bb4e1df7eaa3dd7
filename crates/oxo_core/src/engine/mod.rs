//! Move-decision engine for automated seats.
//!
//! The engine applies a fixed chain of rules; the first rule that produces
//! a move wins:
//!
//! 1. take an immediate win
//! 2. block the opponent's immediate win
//! 3. opening rules: center on an empty board, and an edge reply when the
//!    opponent holds two opposite corners around our center
//! 4. the configured [`Strategy`]: full minimax, depth-limited minimax or a
//!    one-ply static ranking
//! 5. positional preference (center, corner, edge) with a random pick
//!    within the tier, for candidates the heuristic ranks equal

mod heuristic;
mod search;
mod tiebreak;

pub use heuristic::evaluate;
pub use tiebreak::{ScriptedTieBreaker, SeededTieBreaker, TieBreaker};

use super::config::{EngineConfig, Strategy};
use super::rules::find_winner;
use super::{Board, Position, Style};
use heuristic::{is_opposite_corner_trap, preferred_tier};
use search::Search;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Which rule produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rule {
    /// The move completes a line for the engine.
    #[display("immediate win")]
    ImmediateWin,
    /// The move occupies the cell the opponent needs to complete a line.
    #[display("block")]
    Block,
    /// Center reply to an empty board.
    #[display("opening center")]
    OpeningCenter,
    /// Edge reply to opposite corners around our center.
    #[display("opposite-corner defence")]
    OppositeCorners,
    /// Minimax search (full or depth-limited).
    #[display("search")]
    Search,
    /// Unique best static evaluation.
    #[display("heuristic")]
    Heuristic,
    /// Random pick among equally ranked moves of the preferred tier.
    #[display("positional")]
    Positional,
}

/// A selected move together with the reason it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Rule that produced the move.
    pub rule: Rule,
    /// Search or evaluation score, for rules that compute one.
    pub score: Option<i32>,
}

impl Decision {
    fn new(position: Position, rule: Rule, score: Option<i32>) -> Self {
        Self {
            position,
            rule,
            score,
        }
    }
}

/// Error returned when the engine is asked to move on a decided board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The board already holds a completed line for the given style.
    #[display("Board is already decided: {} has won", _0)]
    BoardDecided(Style),
}

impl std::error::Error for EngineError {}

/// Chooses moves for an automated seat.
#[derive(Debug)]
pub struct DecisionEngine {
    config: EngineConfig,
    tie_breaker: Box<dyn TieBreaker>,
    cache: HashMap<(Board, Style), Decision>,
}

impl DecisionEngine {
    /// Creates an engine whose tie-breaks are seeded from the config, or
    /// from entropy when the config has no seed.
    #[instrument(skip(config), fields(strategy = %config.strategy()))]
    pub fn new(config: EngineConfig) -> Self {
        let tie_breaker = match config.seed() {
            Some(seed) => SeededTieBreaker::new(*seed),
            None => {
                let tie_breaker = SeededTieBreaker::from_entropy();
                info!(seed = tie_breaker.seed(), "Seeded tie-breaks from entropy");
                tie_breaker
            }
        };
        Self::with_tie_breaker(config, tie_breaker)
    }

    /// Creates an engine with an explicit tie-break source.
    pub fn with_tie_breaker(config: EngineConfig, tie_breaker: impl TieBreaker + 'static) -> Self {
        Self {
            config,
            tie_breaker: Box::new(tie_breaker),
            cache: HashMap::new(),
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Selects the next move for `style`.
    ///
    /// Returns `Ok(None)` when the board has no empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BoardDecided`] if the board already has a
    /// winner; asking for a move there is a caller bug.
    pub fn select_move(&mut self, board: &Board, style: Style) -> Result<Option<Position>, EngineError> {
        Ok(self.decide(board, style)?.map(|decision| decision.position))
    }

    /// Like [`DecisionEngine::select_move`], but also reports which rule
    /// produced the move.
    #[instrument(skip_all, fields(style = %style, empty = board.empty_count()))]
    pub fn decide(&mut self, board: &Board, style: Style) -> Result<Option<Decision>, EngineError> {
        if let Some(line) = find_winner(board) {
            warn!(winner = %line.style(), "Move requested on a decided board");
            return Err(EngineError::BoardDecided(*line.style()));
        }

        let candidates: Vec<Position> = board.empty_positions().collect();
        if candidates.is_empty() {
            debug!("No empty cells, no move");
            return Ok(None);
        }

        let key = (*board, style);
        if *self.config.memoize() {
            if let Some(cached) = self.cache.get(&key) {
                debug!(position = %cached.position, rule = %cached.rule, "Decision cache hit");
                return Ok(Some(*cached));
            }
        }

        let decision = self.decide_uncached(board, style, &candidates);
        if let Some(decision) = decision {
            debug!(
                position = %decision.position,
                rule = %decision.rule,
                score = ?decision.score,
                "Move selected"
            );
            if *self.config.memoize() {
                self.cache.insert(key, decision);
            }
        }
        Ok(decision)
    }

    fn decide_uncached(&mut self, board: &Board, style: Style, candidates: &[Position]) -> Option<Decision> {
        if let Some(pos) = winning_move(board, style, candidates) {
            return Some(Decision::new(pos, Rule::ImmediateWin, None));
        }
        if let Some(pos) = winning_move(board, style.opponent(), candidates) {
            return Some(Decision::new(pos, Rule::Block, None));
        }

        if candidates.len() == 9 {
            return Some(Decision::new(Position::CENTER, Rule::OpeningCenter, None));
        }
        if is_opposite_corner_trap(board, style) {
            let edges: Vec<Position> = candidates.iter().copied().filter(|pos| pos.is_edge()).collect();
            if let Some(pos) = self.choose(&edges) {
                return Some(Decision::new(pos, Rule::OppositeCorners, None));
            }
        }

        match self.config.strategy() {
            Strategy::Minimax => self.search(Search::full(style), board, candidates),
            Strategy::DepthLimited => {
                let limit = *self.config.depth_limit();
                self.search(Search::limited(style, limit), board, candidates)
            }
            Strategy::Heuristic => self.rank_statically(board, style, candidates),
        }
    }

    fn search(&self, search: Search, board: &Board, candidates: &[Position]) -> Option<Decision> {
        let result = search.best_move(board, candidates)?;
        debug!(nodes = result.nodes, score = result.score, "Search finished");
        Some(Decision::new(result.position, Rule::Search, Some(result.score)))
    }

    fn rank_statically(&mut self, board: &Board, style: Style, candidates: &[Position]) -> Option<Decision> {
        let scored: Vec<(Position, i32)> = candidates
            .iter()
            .map(|&pos| (pos, evaluate(&board.with_piece(pos, style), style)))
            .collect();
        let top = scored.iter().map(|&(_, score)| score).max()?;
        let best: Vec<Position> = scored
            .iter()
            .filter(|&&(_, score)| score == top)
            .map(|&(pos, _)| pos)
            .collect();

        if let [only] = best.as_slice() {
            return Some(Decision::new(*only, Rule::Heuristic, Some(top)));
        }
        let pos = self.choose(&preferred_tier(&best))?;
        Some(Decision::new(pos, Rule::Positional, Some(top)))
    }

    /// Picks uniformly among `candidates` using the tie-break source.
    fn choose(&mut self, candidates: &[Position]) -> Option<Position> {
        match candidates.len() {
            0 => None,
            1 => Some(candidates[0]),
            len => candidates.get(self.tie_breaker.pick(len) % len).copied(),
        }
    }
}

/// First candidate (enumeration order) that completes a line for `style`.
fn winning_move(board: &Board, style: Style, candidates: &[Position]) -> Option<Position> {
    candidates.iter().copied().find(|&pos| {
        find_winner(&board.with_piece(pos, style)).is_some_and(|line| *line.style() == style)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(strategy: Strategy) -> DecisionEngine {
        DecisionEngine::with_tie_breaker(
            EngineConfig::default().with_strategy(strategy),
            ScriptedTieBreaker::default(),
        )
    }

    fn board(layout: &str) -> Board {
        Board::from_layout(layout).unwrap()
    }

    #[test]
    fn test_win_short_circuits_search() {
        let decision = engine(Strategy::Minimax)
            .decide(&board("XX./OO./..."), Style::X)
            .unwrap()
            .unwrap();
        assert_eq!(decision.position, Position::TOP_RIGHT);
        assert_eq!(decision.rule, Rule::ImmediateWin);
        assert_eq!(decision.score, None);
    }

    #[test]
    fn test_win_preferred_over_block() {
        // Both sides threaten; O to move should win rather than block.
        let decision = engine(Strategy::Heuristic)
            .decide(&board("XX./OO./X.."), Style::O)
            .unwrap()
            .unwrap();
        assert_eq!(decision.position, Position::MIDDLE_RIGHT);
        assert_eq!(decision.rule, Rule::ImmediateWin);
    }

    #[test]
    fn test_block() {
        let decision = engine(Strategy::Minimax)
            .decide(&board("OO./.X./..."), Style::X)
            .unwrap()
            .unwrap();
        assert_eq!(decision.position, Position::TOP_RIGHT);
        assert_eq!(decision.rule, Rule::Block);
    }

    #[test]
    fn test_opening_center_for_every_strategy() {
        for strategy in [Strategy::Minimax, Strategy::DepthLimited, Strategy::Heuristic] {
            let decision = engine(strategy).decide(&Board::new(), Style::X).unwrap().unwrap();
            assert_eq!(decision.position, Position::CENTER);
            assert_eq!(decision.rule, Rule::OpeningCenter);
        }
    }

    #[test]
    fn test_opposite_corners_uses_tie_breaker() {
        let layout = board("X../.O./..X");
        let mut engine = DecisionEngine::with_tie_breaker(
            EngineConfig::default(),
            ScriptedTieBreaker::new([0, 1, 2, 3]),
        );
        let picks: Vec<_> = (0..4)
            .map(|_| engine.decide(&layout, Style::O).unwrap().unwrap())
            .collect();
        assert!(picks.iter().all(|d| d.rule == Rule::OppositeCorners));
        assert_eq!(
            picks.iter().map(|d| d.position).collect::<Vec<_>>(),
            Position::EDGES.to_vec()
        );
    }

    #[test]
    fn test_heuristic_ties_go_to_positional_tier() {
        // X in the center; O's best static replies are the four corners.
        let mut engine = DecisionEngine::with_tie_breaker(
            EngineConfig::default().with_strategy(Strategy::Heuristic),
            ScriptedTieBreaker::new([2]),
        );
        let decision = engine.decide(&board(".../.X./..."), Style::O).unwrap().unwrap();
        assert_eq!(decision.rule, Rule::Positional);
        assert_eq!(decision.position, Position::BOTTOM_LEFT);
        assert_eq!(decision.score, Some(-10));
    }

    #[test]
    fn test_heuristic_unique_best() {
        // The center outranks every other reply to a corner opening.
        let decision = engine(Strategy::Heuristic)
            .decide(&board("X../.../..."), Style::O)
            .unwrap()
            .unwrap();
        assert_eq!(decision.position, Position::CENTER);
        assert_eq!(decision.rule, Rule::Heuristic);
    }

    #[test]
    fn test_decided_board_is_an_error() {
        let result = engine(Strategy::Minimax).select_move(&board("XXX/OO./..."), Style::O);
        assert_eq!(result, Err(EngineError::BoardDecided(Style::X)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let result = engine(Strategy::Minimax).select_move(&board("XOX/OXX/OXO"), Style::X);
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_memoized_decision_is_reused() {
        let layout = board("X../.O./..X");
        let mut engine = DecisionEngine::with_tie_breaker(
            EngineConfig::default().with_memoize(true),
            ScriptedTieBreaker::new([3, 0, 1, 2]),
        );
        let first = engine.select_move(&layout, Style::O).unwrap();
        let second = engine.select_move(&layout, Style::O).unwrap();
        assert_eq!(first, Some(Position::BOTTOM_CENTER));
        assert_eq!(second, first);
    }

    #[test]
    fn test_engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<DecisionEngine>();
    }
}
