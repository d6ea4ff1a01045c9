use crate::error::SearchError;
use crate::game::{has_won, Board, Player};

use super::agent::Agent;

/// Optimal opponent: minimax over board copies with alpha-beta pruning.
///
/// The search never touches live game state. Every candidate move is placed
/// on a copy of the board, so sibling branches are fully isolated and no
/// backtracking is needed. Stack depth is bounded by the 16 cells of the
/// grid.
pub struct MinimaxAgent {
    mark: Player,
    max_depth: Option<usize>,
}

impl MinimaxAgent {
    /// Agent playing `mark`, searching to the end of the game.
    pub fn new(mark: Player) -> Self {
        MinimaxAgent {
            mark,
            max_depth: None,
        }
    }

    /// Agent playing `mark` with a bounded lookahead of `max_depth` plies.
    /// Positions still open at the horizon evaluate as neutral.
    pub fn with_depth_limit(mark: Player, max_depth: usize) -> Self {
        MinimaxAgent {
            mark,
            max_depth: Some(max_depth),
        }
    }

    /// The mark this agent plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Find the best move for the agent's mark on `board`.
    ///
    /// Candidates are tried in the board's row-major scan order; only a
    /// strictly better score replaces the chosen move, so among equal
    /// scores the earliest candidate wins. The best score so far carries
    /// forward as alpha, tightening the window for later candidates, while
    /// beta restarts at the maximum for each root candidate.
    ///
    /// Fails with [`SearchError::BoardFull`] when no empty cell remains.
    pub fn select_best_move(&self, board: &Board) -> Result<(usize, usize), SearchError> {
        let mut best_move = None;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;

        for (row, col) in board.empty_positions() {
            let mut child = board.clone();
            child.set(row, col, self.mark).unwrap();

            // The candidate move is already applied, so the simulated turn
            // is the opponent's: start minimizing.
            let score = self.minimax(&child, 0, false, alpha, i32::MAX);

            if score > best_score {
                best_score = score;
                best_move = Some((row, col));
            }
            alpha = alpha.max(score);
        }

        best_move.ok_or(SearchError::BoardFull)
    }

    /// Score `board` from the agent's perspective.
    ///
    /// A position the agent has won scores `10 - depth` and a lost position
    /// `depth - 10`, so a faster forced win outranks a slower one and a
    /// slower forced loss outranks a faster one. A full board with no
    /// winner is 0, as is any position still open at the depth limit.
    fn minimax(
        &self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        // Terminal checks come first, independent of whose turn it is
        if has_won(board, self.mark) {
            return 10 - depth as i32;
        }
        if has_won(board, self.mark.other()) {
            return depth as i32 - 10;
        }
        if board.is_full() {
            return 0;
        }

        if let Some(limit) = self.max_depth {
            if depth >= limit {
                return 0;
            }
        }

        if maximizing {
            let mut best = i32::MIN;
            for (row, col) in board.empty_positions() {
                let mut child = board.clone();
                child.set(row, col, self.mark).unwrap();
                let score = self.minimax(&child, depth + 1, false, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break; // Beta cutoff
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for (row, col) in board.empty_positions() {
                let mut child = board.clone();
                child.set(row, col, self.mark.other()).unwrap();
                let score = self.minimax(&child, depth + 1, true, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break; // Alpha cutoff
                }
            }
            best
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board) -> Result<(usize, usize), SearchError> {
        self.select_best_move(board)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
