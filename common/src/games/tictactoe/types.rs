use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Derived from board contents on every check, never stored as truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win(Mark),
    Tie,
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn message(&self) -> Option<String> {
        match self {
            GameResult::InProgress => None,
            GameResult::Win(mark) => Some(format!("{} Wins!", mark)),
            GameResult::Tie => Some("It's a Tie!".to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    PvP,
    PvAI,
}

impl GameMode {
    /// Whether O's moves come from the solver instead of external input.
    pub fn is_bot_controlled(&self, mark: Mark) -> bool {
        *self == GameMode::PvAI && mark == Mark::O
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::PvP => f.write_str("Player vs Player"),
            GameMode::PvAI => f.write_str("Player vs AI"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::PvP),
            "ai" | "pvai" => Ok(GameMode::PvAI),
            other => Err(format!("Unknown game mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}
