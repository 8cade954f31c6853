use std::time::Duration;

use super::types::GameMode;

pub const DEFAULT_BOT_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub bot_delay: Duration,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::PvP,
            bot_delay: Duration::from_millis(DEFAULT_BOT_DELAY_MS),
        }
    }
}

impl TicTacToeSessionSettings {
    pub fn new(mode: GameMode, bot_delay_ms: u64) -> Self {
        Self {
            mode,
            bot_delay: Duration::from_millis(bot_delay_ms),
        }
    }
}
