use super::bot_controller::BotInput;
use super::game_state::TicTacToeGameState;
use super::types::{BOARD_SIZE, GameMode, GameResult, Mark, WinningLine};
use crate::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMove { mark: Mark, bot_pending: bool },
    GameOver(GameResult),
}

/// A bot move handed out to be computed off the event path. The generation
/// ties it to the game it was issued for.
#[derive(Debug, Clone)]
pub struct BotTicket {
    pub generation: u64,
    pub input: BotInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub board: [Mark; BOARD_SIZE],
    pub current_mark: Mark,
    pub mode: GameMode,
    pub message: Option<String>,
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<usize>,
    pub bot_pending: bool,
}

#[derive(Debug)]
pub struct GameController {
    game_state: TicTacToeGameState,
    mode: GameMode,
    generation: u64,
    bot_pending: bool,
}

impl GameController {
    pub fn new(mode: GameMode) -> Self {
        Self {
            game_state: TicTacToeGameState::new(),
            mode,
            generation: 0,
            bot_pending: false,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn turn_state(&self) -> TurnState {
        if self.game_state.status.is_over() {
            TurnState::GameOver(self.game_state.status)
        } else {
            TurnState::AwaitingMove {
                mark: self.game_state.current_mark,
                bot_pending: self.bot_pending,
            }
        }
    }

    /// External move by whoever is to play. Ignored while the bot owns the turn.
    pub fn select_cell(&mut self, index: usize) -> bool {
        if self.bot_pending || self.mode.is_bot_controlled(self.game_state.current_mark) {
            return false;
        }
        self.place(index)
    }

    pub fn is_bot_turn(&self) -> bool {
        !self.game_state.status.is_over()
            && self.mode.is_bot_controlled(self.game_state.current_mark)
    }

    pub fn schedule_bot_move(&mut self) -> Option<BotTicket> {
        if self.bot_pending || !self.is_bot_turn() {
            return None;
        }
        self.bot_pending = true;
        Some(BotTicket {
            generation: self.generation,
            input: BotInput::from_game_state(&self.game_state),
        })
    }

    pub fn apply_bot_move(&mut self, generation: u64, index: Option<usize>) -> bool {
        if generation != self.generation {
            log!("Discarding bot move from stale game {}", generation);
            return false;
        }
        if !self.bot_pending {
            return false;
        }
        self.bot_pending = false;

        match index {
            Some(index) => self.place(index),
            None => false,
        }
    }

    pub fn restart(&mut self) {
        self.game_state.reset();
        self.bot_pending = false;
        self.generation += 1;
        log!("Game restarted in {} mode", self.mode);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.restart();
    }

    pub fn view(&self) -> GameView {
        GameView {
            board: self.game_state.board.snapshot(),
            current_mark: self.game_state.current_mark,
            mode: self.mode,
            message: self.game_state.status.message(),
            winning_line: self.game_state.winning_line(),
            last_move: self.game_state.last_move,
            bot_pending: self.bot_pending,
        }
    }

    fn place(&mut self, index: usize) -> bool {
        let mark = self.game_state.current_mark;
        if !self.game_state.place_mark(index) {
            return false;
        }

        if let Some(message) = self.game_state.status.message() {
            match self.game_state.winning_line() {
                Some(line) => log!("{} (line {:?})", message, line.cells),
                None => log!("{}", message),
            }
        } else {
            log!("{} placed at {}", mark, index);
        }
        true
    }
}
