use crate::error::SearchError;
use crate::game::Board;

/// Universal interface for computer opponents.
///
/// Agents only inspect the board they are handed; they never mutate live
/// game state. The driver submits the returned position through the game
/// engine like any other move.
pub trait Agent {
    /// Choose a move for the current position.
    ///
    /// Fails with [`SearchError::BoardFull`] when no empty cell remains; the
    /// game loop never asks for a move in that state.
    fn select_move(&mut self, board: &Board) -> Result<(usize, usize), SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
