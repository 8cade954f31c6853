use super::board::Board;
use super::types::{GameResult, Mark, WinningLine};
use super::win_detector::{check_result, check_win_with_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameResult,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameResult::InProgress,
            last_move: None,
        }
    }

    /// Places the current player's mark. Returns false without touching
    /// anything if the game is over or the cell is not available.
    pub fn place_mark(&mut self, index: usize) -> bool {
        if self.status.is_over() {
            return false;
        }

        if !self.board.place(index, self.current_mark) {
            return false;
        }
        self.last_move = Some(index);

        self.check_game_over();

        if !self.status.is_over() {
            self.switch_turn();
        }

        true
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = GameResult::InProgress;
        self.last_move = None;
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameResult::Win(_) => check_win_with_line(&self.board.snapshot()),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        self.status = check_result(&self.board.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            assert!(state.place_mark(index), "move {} rejected", index);
        }
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameResult::InProgress);
        assert!(state.board.is_empty());
    }

    #[test]
    fn test_turn_switches_after_valid_move() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[4]);
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(4));
        play(&mut state, &[0]);
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_invalid_move_does_not_switch_turn() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[4]);
        assert!(!state.place_mark(4));
        assert!(!state.place_mark(12));
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(4));
    }

    #[test]
    fn test_win_ends_game_and_keeps_winner_current() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.status, GameResult::Win(Mark::X));
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status.message().as_deref(), Some("X Wins!"));
        assert_eq!(
            state.winning_line(),
            Some(WinningLine::new(Mark::X, [0, 1, 2]))
        );
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        let before = state.board.snapshot();
        assert!(!state.place_mark(8));
        assert_eq!(state.board.snapshot(), before);
    }

    #[test]
    fn test_tie() {
        let mut state = TicTacToeGameState::new();
        // X O X / X O O / O X X
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status, GameResult::Tie);
        assert_eq!(state.status.message().as_deref(), Some("It's a Tie!"));
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_reset() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.reset();
        assert!(state.board.is_empty());
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameResult::InProgress);
        assert_eq!(state.last_move, None);
    }
}
