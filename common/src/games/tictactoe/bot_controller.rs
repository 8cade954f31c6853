use super::board::get_available_moves;
use super::game_state::TicTacToeGameState;
use super::types::{BOARD_SIZE, Mark};
use super::win_detector::{has_won, is_tie};

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone)]
pub struct BotInput {
    pub board: [Mark; BOARD_SIZE],
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board.snapshot(),
            bot_mark: state.current_mark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub index: usize,
    pub score: i32,
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    calculate_minimax_move_with_score(input).map(|scored| scored.index)
}

/// Exhaustive search, no pruning. Ties keep the lowest index.
pub fn calculate_minimax_move_with_score(input: &BotInput) -> Option<ScoredMove> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = get_available_moves(&input.board);

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        board[index] = bot_mark;
        let score = minimax(&mut board, 0, false, bot_mark, opponent_mark);
        board[index] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(ScoredMove { index, score });
        }
    }

    best_move
}

/// Scores `board` from `bot_mark`'s side. Wins count for less the deeper they
/// are found, so the bot prefers quick wins and slow losses.
pub fn minimax(
    board: &mut [Mark; BOARD_SIZE],
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if has_won(board, opponent_mark) {
        return -WIN_SCORE + depth;
    }
    if has_won(board, bot_mark) {
        return WIN_SCORE - depth;
    }
    if is_tie(board) {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..BOARD_SIZE {
            if board[index] != Mark::Empty {
                continue;
            }
            board[index] = bot_mark;
            let eval = minimax(board, depth + 1, false, bot_mark, opponent_mark);
            board[index] = Mark::Empty;
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in 0..BOARD_SIZE {
            if board[index] != Mark::Empty {
                continue;
            }
            board[index] = opponent_mark;
            let eval = minimax(board, depth + 1, true, bot_mark, opponent_mark);
            board[index] = Mark::Empty;
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
