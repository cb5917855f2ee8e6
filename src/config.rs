use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

/// Terminal layout and colors.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Width of one grid cell in terminal columns, borders included.
    pub cell_width: u16,
    /// Height of one grid cell in terminal rows, borders included.
    pub cell_height: u16,
    /// How long to wait for input before redrawing.
    pub tick_rate_ms: u64,
    pub player_one_color: String,
    pub player_two_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            cell_width: 7,
            cell_height: 3,
            tick_rate_ms: 100,
            player_one_color: "red".to_string(),
            player_two_color: "blue".to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How long the final result stays on screen after quitting a finished game.
    pub exit_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            exit_delay_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of "off", "error", "warn", "info", "debug", "trace".
    pub level: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: PathBuf::from("sos.log"),
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. Logging is usually not set up yet at this point, so the
    /// returned [`ConfigSource`] is logged by the caller afterwards.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf())))
        } else {
            Ok((Self::default(), ConfigSource::Defaults(path.to_path_buf())))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.cell_width < 3 {
            return Err(ConfigError::Validation(
                "ui.cell_width must be >= 3".into(),
            ));
        }
        if self.ui.cell_height < 2 {
            return Err(ConfigError::Validation(
                "ui.cell_height must be >= 2".into(),
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }
        parse_color("ui.player_one_color", &self.ui.player_one_color)?;
        parse_color("ui.player_two_color", &self.ui.player_two_color)?;
        if LevelFilter::from_str(&self.logging.level).is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a log level",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

/// Where [`AppConfig::load_or_default`] got its settings from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was missing; defaults were used.
    Defaults(PathBuf),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => {
                info!(path = %path.display(), "configuration loaded");
            }
            ConfigSource::Defaults(path) => {
                warn!(path = %path.display(), "config file not found, using defaults");
            }
        }
    }
}

/// Parse a color setting such as `"red"` or `"#ff8800"`.
pub fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::Validation(format!("{key} '{value}' is not a color")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[ui]
cell_width = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.cell_width, 9);
        assert_eq!(config.ui.cell_height, 3);
        assert_eq!(config.game.exit_delay_ms, 5000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.ui.cell_width, default.ui.cell_width);
        assert_eq!(config.ui.player_one_color, default.ui.player_one_color);
        assert_eq!(config.logging.file, default.logging.file);
    }

    #[test]
    fn test_validation_rejects_narrow_cells() {
        let mut config = AppConfig::default();
        config.ui.cell_width = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_flat_cells() {
        let mut config = AppConfig::default();
        config.ui.cell_height = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_tick_rate() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_color() {
        let mut config = AppConfig::default();
        config.ui.player_two_color = "not-a-color".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_hex_color() {
        let mut config = AppConfig::default();
        config.ui.player_one_color = "#ff8800".to_string();
        config.validate().expect("hex colors are accepted");
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let mut config = AppConfig::default();
        config.logging.level = "chatty".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = Path::new("nonexistent_sos.toml");
        let (config, source) = AppConfig::load_or_default(path).unwrap();
        assert_eq!(config.ui.cell_width, 7);
        assert_eq!(source, ConfigSource::Defaults(path.to_path_buf()));
    }

    #[test]
    fn test_load_or_default_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sos.toml");
        std::fs::write(&path, "[ui]\ncell_width = 5\n").unwrap();
        let (config, source) = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.ui.cell_width, 5);
        assert_eq!(source, ConfigSource::File(path));
    }

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured(f: impl FnOnce()) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = log.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_missing_file_is_logged_as_warning() {
        let source = ConfigSource::Defaults(PathBuf::from("nonexistent_sos.toml"));
        let output = captured(|| source.log());
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("config file not found, using defaults"));
        assert!(output.contains("nonexistent_sos.toml"));
    }

    #[test]
    fn test_loaded_file_is_logged_as_info() {
        let source = ConfigSource::File(PathBuf::from("sos.toml"));
        let output = captured(|| source.log());
        assert!(output.contains("INFO"), "{output}");
        assert!(output.contains("configuration loaded"));
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("ui.player_one_color", "red").unwrap(), Color::Red);
        let err = parse_color("ui.player_two_color", "plaid").unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: ui.player_two_color 'plaid' is not a color"
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sos.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
exit_delay_ms = 0

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.exit_delay_ms, 0);
        assert_eq!(config.logging.level, "debug");
        // Others are defaults
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sos.toml");
        std::fs::write(&path, "[ui]\ncell_height = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sos.toml");
        std::fs::write(&path, "[ui\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
