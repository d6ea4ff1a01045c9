use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::SearchError;
use crate::game::Board;

use super::agent::Agent;

/// An agent that picks uniformly at random among the empty cells.
/// Baseline opponent for exercising the search.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Result<(usize, usize), SearchError> {
        let positions = board.empty_positions();
        if positions.is_empty() {
            return Err(SearchError::BoardFull);
        }
        let idx = self.rng.random_range(0..positions.len());
        Ok(positions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_random_agent_selects_empty_cell() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        board.set(0, 0, Player::X).unwrap();
        board.set(1, 1, Player::O).unwrap();
        let legal = board.empty_positions();

        for _ in 0..100 {
            let position = agent.select_move(&board).unwrap();
            assert!(legal.contains(&position), "{position:?} is not empty");
        }
    }

    #[test]
    fn test_random_agent_fails_on_full_board() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        let marks = [Player::X, Player::O];
        for (i, (row, col)) in board.empty_positions().into_iter().enumerate() {
            board.set(row, col, marks[i % 2]).unwrap();
        }

        assert_eq!(agent.select_move(&board), Err(SearchError::BoardFull));
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
