use common::games::GameCommand;
use common::tictactoe::GameMode;

pub const HELP_TEXT: &str = "\
Commands:
  1-9          place a mark (cells numbered left to right, top to bottom)
  mode pvp     switch to player vs player and restart
  mode ai      switch to player vs AI and restart
  restart      start a new game
  quit         leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Command(GameCommand),
    Help,
    Blank,
}

pub fn parse_line(line: &str) -> Result<ParsedLine, String> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(ParsedLine::Blank);
    };

    let parsed = match first.to_ascii_lowercase().as_str() {
        "restart" | "r" => ParsedLine::Command(GameCommand::Restart),
        "quit" | "q" | "exit" => ParsedLine::Command(GameCommand::Quit),
        "help" | "h" | "?" => ParsedLine::Help,
        "mode" | "m" => {
            let mode: GameMode = words
                .next()
                .ok_or_else(|| "Usage: mode <pvp|ai>".to_string())?
                .parse()?;
            ParsedLine::Command(GameCommand::SetMode(mode))
        }
        other => {
            let cell: usize = other
                .parse()
                .map_err(|_| format!("Unknown command: {}", other))?;
            if cell == 0 {
                return Err("Cells are numbered from 1".to_string());
            }
            ParsedLine::Command(GameCommand::SelectCell(cell - 1))
        }
    };

    if let Some(extra) = words.next() {
        return Err(format!("Unexpected argument: {}", extra));
    }
    Ok(parsed)
}
