//! Win detection: a completed row, column, or diagonal of four marks.
//!
//! Pure predicates over an immutable board reference. No shorter runs or
//! other line shapes count on the 4x4 grid.

use super::board::{Board, SIZE};
use super::player::Player;

/// True if any of the four rows holds four of `player`'s marks.
pub fn row_complete(board: &Board, player: Player) -> bool {
    let want = player.to_cell();
    board
        .grid()
        .iter()
        .any(|row| row.iter().all(|&cell| cell == want))
}

/// True if any of the four columns holds four of `player`'s marks.
pub fn column_complete(board: &Board, player: Player) -> bool {
    let want = player.to_cell();
    let grid = board.grid();
    (0..SIZE).any(|col| (0..SIZE).all(|row| grid[row][col] == want))
}

/// True if the main diagonal (0,0)..(3,3) or the anti-diagonal (0,3)..(3,0)
/// holds four of `player`'s marks.
pub fn diagonal_complete(board: &Board, player: Player) -> bool {
    let want = player.to_cell();
    let grid = board.grid();
    (0..SIZE).all(|i| grid[i][i] == want) || (0..SIZE).all(|i| grid[i][SIZE - 1 - i] == want)
}

/// True if `player` has completed any winning line.
pub fn has_won(board: &Board, player: Player) -> bool {
    row_complete(board, player) || column_complete(board, player) || diagonal_complete(board, player)
}
