use crate::error::BoardError;

use super::board::Board;
use super::player::Player;
use super::rules::has_won;

/// Current status of a game.
///
/// `Won(Player::X)` and `Won(Player::O)` are the two winning states.
/// Terminal states (any win, or a draw) are absorbing: no further moves are
/// accepted once the game has concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// Check if the game is over
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// State machine owning the board, the player to move, and the game status.
///
/// Win and draw rules are applied after every successful placement. The AI
/// never mutates this state directly; it proposes a move that the driver
/// submits through [`GameEngine::make_move`] like any other.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameEngine {
    /// Start a fresh game with the given starting player.
    pub fn new(starting_player: Player) -> Self {
        GameEngine {
            board: Board::new(),
            current_player: starting_player,
            status: GameStatus::InProgress,
        }
    }

    /// Clear the board and start over with the given starting player.
    pub fn reset(&mut self, starting_player: Player) {
        self.board.reset();
        self.current_player = starting_player;
        self.status = GameStatus::InProgress;
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the player whose turn it is
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get the current game status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Attempt a move at (row, col) for the current player.
    ///
    /// Returns `Ok(false)` with no state change when the game is already
    /// over or the target cell is occupied; both are expected outcomes the
    /// driver recovers from by prompting again. Out-of-range coordinates are
    /// an error.
    ///
    /// A move that completes a winning line transitions the status to
    /// `Won(current_player)` without switching players; filling the last
    /// cell without a win transitions to `Draw`. Otherwise the turn passes
    /// to the other player.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        if self.status.is_terminal() {
            return Ok(false);
        }

        if !self.board.set(row, col, self.current_player)? {
            return Ok(false);
        }

        if has_won(&self.board, self.current_player) {
            self.status = GameStatus::Won(self.current_player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::super::board::{Cell, SIZE};
    use super::*;

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new(Player::O);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.current_player(), Player::O);
        assert!(engine.board().empty_positions().len() == SIZE * SIZE);
    }

    #[test]
    fn test_move_toggles_player() {
        let mut engine = GameEngine::new(Player::X);
        assert_eq!(engine.make_move(0, 0), Ok(true));
        assert_eq!(engine.current_player(), Player::O);
        assert_eq!(engine.status(), GameStatus::InProgress);

        assert_eq!(engine.make_move(1, 1), Ok(true));
        assert_eq!(engine.current_player(), Player::X);
    }

    #[test]
    fn test_occupied_cell_changes_nothing() {
        let mut engine = GameEngine::new(Player::X);
        engine.make_move(0, 0).unwrap();

        assert_eq!(engine.make_move(0, 0), Ok(false));
        assert_eq!(engine.current_player(), Player::O);
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_out_of_range_move() {
        let mut engine = GameEngine::new(Player::X);
        assert!(engine.make_move(4, 0).is_err());
        assert_eq!(engine.current_player(), Player::X);
    }

    #[test]
    fn test_win_on_exactly_the_fourth_placement() {
        let mut engine = GameEngine::new(Player::X);

        // X fills row 0 while O plays in row 2
        engine.make_move(0, 0).unwrap(); // X
        engine.make_move(2, 0).unwrap(); // O
        engine.make_move(0, 1).unwrap(); // X
        engine.make_move(2, 1).unwrap(); // O
        engine.make_move(0, 2).unwrap(); // X
        assert_eq!(engine.status(), GameStatus::InProgress);
        engine.make_move(2, 2).unwrap(); // O
        assert_eq!(engine.status(), GameStatus::InProgress);

        assert_eq!(engine.make_move(0, 3), Ok(true)); // X completes row 0
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
        // No player switch after a winning move
        assert_eq!(engine.current_player(), Player::X);
    }

    #[test]
    fn test_terminal_state_is_absorbing() {
        let mut engine = GameEngine::new(Player::X);
        engine.make_move(0, 0).unwrap(); // X
        engine.make_move(2, 0).unwrap(); // O
        engine.make_move(0, 1).unwrap(); // X
        engine.make_move(2, 1).unwrap(); // O
        engine.make_move(0, 2).unwrap(); // X
        engine.make_move(2, 2).unwrap(); // O
        engine.make_move(0, 3).unwrap(); // X wins

        assert_eq!(engine.make_move(3, 3), Ok(false));
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
        assert_eq!(engine.board().get(3, 3).unwrap(), Cell::Empty);
    }

    #[test]
    fn test_draw_on_full_board_without_winner() {
        // Ends in the pattern
        //   X X O O
        //   O O X X
        //   X X O O
        //   O O X X
        // by alternating one X cell and one O cell per turn.
        let x_cells = [(0, 0), (0, 1), (1, 2), (1, 3), (2, 0), (2, 1), (3, 2), (3, 3)];
        let o_cells = [(0, 2), (0, 3), (1, 0), (1, 1), (2, 2), (2, 3), (3, 0), (3, 1)];

        let mut engine = GameEngine::new(Player::X);
        for i in 0..8 {
            assert_eq!(engine.make_move(x_cells[i].0, x_cells[i].1), Ok(true));
            if i < 7 {
                assert_eq!(engine.status(), GameStatus::InProgress);
            }
            assert_eq!(engine.make_move(o_cells[i].0, o_cells[i].1), Ok(true));
        }

        assert_eq!(engine.status(), GameStatus::Draw);
        assert!(engine.board().is_full());
    }

    #[test]
    fn test_reset_starts_fresh() {
        let mut engine = GameEngine::new(Player::X);
        engine.make_move(0, 0).unwrap();
        engine.make_move(1, 1).unwrap();

        engine.reset(Player::O);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.current_player(), Player::O);
        assert!(engine.board().empty_positions().len() == SIZE * SIZE);
    }
}
