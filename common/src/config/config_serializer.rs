use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

pub struct YamlConfigSerializer;

impl Default for YamlConfigSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameMode;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ModeHolder {
        mode: GameMode,
    }

    #[test]
    fn test_game_mode_round_trips_through_yaml() {
        let serializer = YamlConfigSerializer::new();
        let text = serializer.serialize(&ModeHolder { mode: GameMode::PvAI }).unwrap();
        assert_eq!(text.trim(), "mode: PvAI");

        let parsed: ModeHolder = serializer.deserialize("mode: PvP").unwrap();
        assert_eq!(parsed, ModeHolder { mode: GameMode::PvP });
    }

    #[test]
    fn test_unknown_mode_fails() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<ModeHolder, String> = serializer.deserialize("mode: Chess");
        assert!(result.is_err());
    }
}
