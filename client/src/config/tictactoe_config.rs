use common::config::Validate;
use common::tictactoe::{DEFAULT_BOT_DELAY_MS, GameMode, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

const MAX_BOT_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub default_mode: GameMode,
    pub bot_delay_ms: u64,
}

impl TicTacToeConfig {
    pub fn session_settings(&self, mode_override: Option<GameMode>) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings::new(
            mode_override.unwrap_or(self.default_mode),
            self.bot_delay_ms,
        )
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            default_mode: GameMode::PvP,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
        }
    }
}
