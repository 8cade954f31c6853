use super::types::{BOARD_SIZE, GameResult, Mark, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_won(board: &[Mark; BOARD_SIZE], mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board[i] == mark))
}

/// Only meaningful once neither side has won: a full board with a line is a win.
pub fn is_tie(board: &[Mark; BOARD_SIZE]) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

pub fn check_win_with_line(board: &[Mark; BOARD_SIZE]) -> Option<WinningLine> {
    for line in WINNING_LINES {
        let mark = board[line[0]];
        if mark == Mark::Empty {
            continue;
        }
        if board[line[1]] == mark && board[line[2]] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn check_result(board: &[Mark; BOARD_SIZE]) -> GameResult {
    if has_won(board, Mark::X) {
        return GameResult::Win(Mark::X);
    }
    if has_won(board, Mark::O) {
        return GameResult::Win(Mark::O);
    }
    if is_tie(board) {
        return GameResult::Tie;
    }
    GameResult::InProgress
}
