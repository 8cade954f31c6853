mod command_parser;
mod config;
mod terminal;

use clap::Parser;
use common::config::Validate;
use common::log;
use common::logger;
use common::tictactoe::{GameMode, TicTacToeSession};

use command_parser::HELP_TEXT;
use config::get_config_manager;
use terminal::{StdinInputSource, TerminalBroadcaster};

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Game mode to start in (pvp or ai). Overrides the config file.
    #[arg(long)]
    mode: Option<GameMode>,

    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<String>,

    /// Delay before the AI answers, in milliseconds.
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;

    if let Some(mode) = args.mode {
        config.tictactoe.default_mode = mode;
    }
    if let Some(bot_delay_ms) = args.bot_delay_ms {
        config.tictactoe.bot_delay_ms = bot_delay_ms;
    }
    if args.use_log_prefix {
        config.use_log_prefix = true;
    }
    config.validate()?;

    let prefix = if config.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.log_output);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", config_manager.file_path().display());
    }

    println!("{}", HELP_TEXT);

    let settings = config.tictactoe.session_settings(None);
    let final_view =
        TicTacToeSession::run(settings, StdinInputSource::new(), TerminalBroadcaster).await;

    if let Some(message) = final_view.message {
        log!("Last game ended with: {}", message);
    }

    Ok(())
}
