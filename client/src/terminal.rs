use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use common::games::{GameBroadcaster, GameCommand, InputSource};
use common::tictactoe::{GameView, Mark};

use crate::command_parser::{HELP_TEXT, ParsedLine, parse_line};

pub struct StdinInputSource {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for StdinInputSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinInputSource {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl InputSource for StdinInputSource {
    async fn next_command(&mut self) -> Option<GameCommand> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    eprintln!("Failed to read input: {}", e);
                    return None;
                }
            };

            match parse_line(&line) {
                Ok(ParsedLine::Command(command)) => return Some(command),
                Ok(ParsedLine::Help) => println!("{}", HELP_TEXT),
                Ok(ParsedLine::Blank) => {}
                Err(e) => println!("{}", e),
            }
        }
    }
}

#[derive(Clone)]
pub struct TerminalBroadcaster;

impl GameBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, view: GameView) {
        println!("{}", render_view(&view));
    }
}

fn cell_text(view: &GameView, index: usize) -> String {
    match view.board[index] {
        Mark::Empty => (index + 1).to_string(),
        mark => mark.to_string(),
    }
}

pub fn render_view(view: &GameView) -> String {
    let mut out = String::new();
    out.push_str(&format!("Mode: {}\n", view.mode));

    for row in 0..3 {
        let cells: Vec<String> = (0..3).map(|col| cell_text(view, row * 3 + col)).collect();
        out.push_str(&format!(" {} | {} | {}\n", cells[0], cells[1], cells[2]));
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    match (&view.message, view.winning_line) {
        (Some(message), Some(line)) => {
            let cells: Vec<String> = line.cells.iter().map(|i| (i + 1).to_string()).collect();
            out.push_str(&format!("{} ({})", message, cells.join("-")));
        }
        (Some(message), None) => out.push_str(message),
        (None, _) if view.bot_pending => out.push_str("AI is thinking..."),
        (None, _) => out.push_str(&format!("{} to move", view.current_mark)),
    }
    out
}
