//! Minimax search with alpha-beta pruning.

use super::super::rules::{find_winner, is_full};
use super::super::{Board, Position, Style};
use super::heuristic::evaluate;
use tracing::trace;

/// Score of a win reached at depth 0. Real wins score `WIN - depth`.
pub(crate) const WIN: i32 = 1000;

/// Bound above every reachable score.
const INFINITY: i32 = i32::MAX / 2;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchResult {
    pub position: Position,
    pub score: i32,
    pub nodes: u64,
}

/// One search from the point of view of `me`.
///
/// Every hypothesis is a fresh copy of the board, so the caller's board is
/// never mutated.
#[derive(Debug)]
pub(crate) struct Search {
    me: Style,
    depth_limit: Option<usize>,
    nodes: u64,
}

impl Search {
    /// Searches to terminal positions.
    pub fn full(me: Style) -> Self {
        Self {
            me,
            depth_limit: None,
            nodes: 0,
        }
    }

    /// Searches at most `limit` plies, scoring the frontier statically.
    pub fn limited(me: Style, limit: usize) -> Self {
        Self {
            me,
            depth_limit: Some(limit.max(1)),
            nodes: 0,
        }
    }

    /// Picks the first candidate with the strictly highest score.
    ///
    /// Returns `None` only when `candidates` is empty.
    pub fn best_move(mut self, board: &Board, candidates: &[Position]) -> Option<SearchResult> {
        let mut best: Option<(Position, i32)> = None;
        let mut alpha = -INFINITY;

        for &pos in candidates {
            let child = board.with_piece(pos, self.me);
            let score = self.minimax(&child, 1, false, alpha, INFINITY);
            trace!(position = %pos, score, "Root move scored");

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
            alpha = alpha.max(score);
        }

        best.map(|(position, score)| SearchResult {
            position,
            score,
            nodes: self.nodes,
        })
    }

    fn minimax(&mut self, board: &Board, depth: usize, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if let Some(line) = find_winner(board) {
            let depth = depth as i32;
            return if *line.style() == self.me {
                WIN - depth
            } else {
                -WIN + depth
            };
        }
        if is_full(board) {
            return 0;
        }
        if self.depth_limit.is_some_and(|limit| depth >= limit) {
            return evaluate(board, self.me);
        }

        let mover = if maximizing { self.me } else { self.me.opponent() };

        if maximizing {
            let mut best = -INFINITY;
            for pos in board.empty_positions() {
                let score = self.minimax(&board.with_piece(pos, mover), depth + 1, false, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for pos in board.empty_positions() {
                let score = self.minimax(&board.with_piece(pos, mover), depth + 1, true, alpha, beta);
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(layout: &str, me: Style) -> SearchResult {
        let board = Board::from_layout(layout).unwrap();
        let candidates: Vec<_> = board.empty_positions().collect();
        Search::full(me).best_move(&board, &candidates).unwrap()
    }

    #[test]
    fn test_immediate_win_scores_999() {
        let result = search("XX./OO./...", Style::X);
        assert_eq!(result.position, Position::TOP_RIGHT);
        assert_eq!(result.score, WIN - 1);
    }

    #[test]
    fn test_prefers_faster_win() {
        // X wins at (0,2) now; other moves may also win later.
        let result = search("XX./O../O..", Style::X);
        assert_eq!(result.position, Position::TOP_RIGHT);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let result = search(".........", Style::X);
        assert_eq!(result.score, 0);
        assert_eq!(result.position, Position::TOP_LEFT);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_loss_is_delayed() {
        // O cannot stop both threats; the best it can do is lose late.
        let result = search("X.X/.O./X..", Style::O);
        assert!(result.score < 0);
        assert!(result.score > -WIN + 1);
    }

    #[test]
    fn test_depth_limited_returns_static_scores() {
        let board = Board::new();
        let candidates: Vec<_> = board.empty_positions().collect();
        let result = Search::limited(Style::X, 1)
            .best_move(&board, &candidates)
            .unwrap();
        assert_eq!(result.position, Position::CENTER);
        assert_eq!(result.score, 40);
    }

    #[test]
    fn test_no_candidates() {
        let board = Board::from_layout("XOXXOOOXX").unwrap();
        assert_eq!(Search::full(Style::X).best_move(&board, &[]), None);
    }
}
