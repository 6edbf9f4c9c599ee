use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{check_dimensions, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Largest height or width the terminal front-end will draw.
pub const MAX_BOARD_DIMENSION: usize = 64;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

/// Size of the board created for every game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Display colors of the two players, first player moves first.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first_color: String,
    pub second_color: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first_color: "red".to_string(),
            second_color: "yellow".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Trim surrounding whitespace from the player colors.
    pub fn normalize(&mut self) {
        self.players.first_color = self.players.first_color.trim().to_string();
        self.players.second_color = self.players.second_color.trim().to_string();
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.board.height, self.board.width)
            .map_err(|e| ConfigError::Validation(format!("board: {e}")))?;
        if self.board.height > MAX_BOARD_DIMENSION || self.board.width > MAX_BOARD_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board dimensions {}x{} exceed the maximum of {MAX_BOARD_DIMENSION}",
                self.board.height, self.board.width
            )));
        }

        if self.players.first_color.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.first_color must not be empty".into(),
            ));
        }
        if self.players.second_color.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.second_color must not be empty".into(),
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
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.height, 6);
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
width = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.width, 9);
        // Other fields should be defaults
        assert_eq!(config.board.height, 6);
        assert_eq!(config.players.first_color, "red");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.height, DEFAULT_HEIGHT);
        assert_eq!(config.players.second_color, "yellow");
    }

    #[test]
    fn test_validation_rejects_zero_height() {
        let mut config = AppConfig::default();
        config.board.height = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("0x7"));
    }

    #[test]
    fn test_validation_rejects_zero_width() {
        let mut config = AppConfig::default();
        config.board.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.board.height = 65535;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceed the maximum of 64"));

        let mut config = AppConfig::default();
        config.board.width = MAX_BOARD_DIMENSION + 1;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.height = MAX_BOARD_DIMENSION;
        config.board.width = MAX_BOARD_DIMENSION;
        config.validate().expect("largest board should be valid");
    }

    #[test]
    fn test_validation_rejects_blank_color() {
        let mut config = AppConfig::default();
        config.players.second_color = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
height = 8

[players]
first_color = "  purple "
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.height, 8);
        assert_eq!(config.players.first_color, "purple");
        // Others are defaults
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nheight = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[board\nheight = ").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
