use std::sync::OnceLock;

use chrono::Local;
use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Where log lines go. Terminal front ends keep stdout for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogOutput {
    Stdout,
    #[default]
    Stderr,
    Disabled,
}

pub struct Logger {
    prefix: Option<String>,
    output: LogOutput,
}

impl Logger {
    fn new(prefix: Option<String>, output: LogOutput) -> Self {
        Self { prefix, output }
    }

    pub fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}:{}] {}",
                timestamp, prefix, file_name, line, message
            ),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        match self.output {
            LogOutput::Stdout => println!("{}", self.format_line(file, line, message)),
            LogOutput::Stderr => eprintln!("{}", self.format_line(file, line, message)),
            LogOutput::Disabled => {}
        }
    }
}

pub fn init_logger(prefix: Option<String>, output: LogOutput) {
    LOGGER.get_or_init(|| Logger::new(prefix, output));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else if cfg!(not(test)) {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
