use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub render: RenderConfig,
    pub simulation: SimulationConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: Player,
}

/// Glyphs used by the text renderer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub red: char,
    pub green: char,
    pub empty: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            red: 'R',
            green: 'G',
            empty: '.',
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            games: 100,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info".to_string(),
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
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let RenderConfig { red, green, empty } = self.render;
        if red == green || red == empty || green == empty {
            return Err(ConfigError::Validation(
                "render.red, render.green and render.empty must differ".into(),
            ));
        }
        for glyph in [red, green, empty] {
            if glyph == '[' || glyph == ']' || glyph.is_whitespace() {
                return Err(ConfigError::Validation(format!(
                    "render glyph {glyph:?} is reserved"
                )));
            }
        }
        if self.simulation.games == 0 {
            return Err(ConfigError::Validation(
                "simulation.games must be > 0".into(),
            ));
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log.filter must not be empty".into(),
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
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
first_player = "green"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.first_player, Player::Green);
        // Other fields should be defaults
        assert_eq!(config.render, RenderConfig::default());
        assert_eq!(config.simulation.games, 100);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.simulation.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_glyphs() {
        let mut config = AppConfig::default();
        config.render.green = 'R';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bracket_glyph() {
        let mut config = AppConfig::default();
        config.render.empty = '[';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_filter() {
        let mut config = AppConfig::default();
        config.log.filter = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_multi_char_glyph() {
        let toml_str = r#"
[render]
red = "RR"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[simulation]
games = 500
seed = 7

[render]
red = "x"
green = "o"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.simulation.games, 500);
        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.render.red, 'x');
        assert_eq!(config.render.empty, '.');
        // Others are defaults
        assert_eq!(config.game.first_player, Player::Red);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[simulation]\ngames = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
        config.validate().expect("roundtripped config should be valid");
    }
}
