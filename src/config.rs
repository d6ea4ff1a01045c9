use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ai: AiConfig,
}

/// Who plays which mark and who moves first.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_player: Player,
    pub human_mark: Player,
}

/// Search settings for the minimax opponent.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Maximum lookahead in plies. Unset searches to the end of the game,
    /// which takes a while from a near-empty board; the shipped config
    /// bounds it for interactive play.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_player: Player::X,
            human_mark: Player::X,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig { max_depth: None }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.max_depth == Some(0) {
            return Err(ConfigError::Validation(
                "ai.max_depth must be >= 1 when set".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.game.starting_player, Player::X);
        assert_eq!(config.game.human_mark, Player::X);
        assert_eq!(config.ai.max_depth, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [game]
            starting_player = "o"
            human_mark = "x"

            [ai]
            max_depth = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.game.starting_player, Player::O);
        assert_eq!(config.game.human_mark, Player::X);
        assert_eq!(config.ai.max_depth, Some(6));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = toml::from_str("[ai]\nmax_depth = 2\n").unwrap();
        assert_eq!(config.game.starting_player, Player::X);
        assert_eq!(config.ai.max_depth, Some(2));
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let config: AppConfig = toml::from_str("[ai]\nmax_depth = 0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: ai.max_depth must be >= 1 when set"
        );
    }

    #[test]
    fn test_default_toml_parses_back() {
        let config: AppConfig = toml::from_str(&AppConfig::default_toml()).unwrap();
        assert!(config.validate().is_ok());
    }
}
