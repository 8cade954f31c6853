use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::logger::LogOutput;
use serde::{Deserialize, Serialize};

use super::TicTacToeConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub use_log_prefix: bool,
    #[serde(default)]
    pub log_output: LogOutput,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        Ok(())
    }
}
