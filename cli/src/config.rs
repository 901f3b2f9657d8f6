use std::path::Path;

use serde::{Deserialize, Serialize};
use ttt_engine::Difficulty;

pub const DEFAULT_CONFIG_FILE: &str = "ttt_config.yaml";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Modern,
    Retro,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Modern => Theme::Retro,
            Theme::Retro => Theme::Modern,
        }
    }
}

/// Presentation preferences persisted between runs. Missing file means
/// defaults; a malformed or invalid file is an error the caller reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    pub theme: Theme,
    pub bot_delay_ms: u64,
    pub difficulty: Difficulty,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Modern,
            bot_delay_ms: 350,
            difficulty: Difficulty::Hard,
        }
    }
}

impl CliConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > 10_000 {
            return Err(format!(
                "bot_delay_ms must be at most 10000, got {}",
                self.bot_delay_ms
            ));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = serde_yaml_ng::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_yaml_round_trip() {
        let config = CliConfig {
            theme: Theme::Retro,
            bot_delay_ms: 100,
            difficulty: Difficulty::Easy,
        };

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: CliConfig = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_parses_lowercase_fields() {
        let parsed: CliConfig =
            serde_yaml_ng::from_str("theme: retro\nbot_delay_ms: 200\ndifficulty: medium\n")
                .unwrap();

        assert_eq!(parsed.theme, Theme::Retro);
        assert_eq!(parsed.bot_delay_ms, 200);
        assert_eq!(parsed.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_validate_rejects_excessive_delay() {
        let config = CliConfig {
            bot_delay_ms: 60_000,
            ..CliConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_theme_toggles_back_and_forth() {
        assert_eq!(Theme::Modern.toggled(), Theme::Retro);
        assert_eq!(Theme::Retro.toggled().toggled(), Theme::Retro);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let path = Path::new("definitely_not_a_real_config_file.yaml");

        assert_eq!(CliConfig::load(path).unwrap(), CliConfig::default());
    }
}
