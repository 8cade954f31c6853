mod board;
mod bot_controller;
mod controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{
    BotInput, ScoredMove, calculate_minimax_move, calculate_minimax_move_with_score, minimax,
};
pub use controller::{BotTicket, GameController, GameView, TurnState};
pub use game_state::TicTacToeGameState;
pub use session::TicTacToeSession;
pub use settings::{DEFAULT_BOT_DELAY_MS, TicTacToeSessionSettings};
pub use types::{BOARD_SIZE, GameMode, GameResult, Mark, WinningLine};
pub use win_detector::{WINNING_LINES, check_result, check_win_with_line, has_won, is_tie};
