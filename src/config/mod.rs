use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_TICK_RATE_MS: u64 = 250;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tab shown at startup; passed through the normal tab selection
    pub default_tab: Option<String>,

    /// Highlight colour: a colour name or `#RRGGBB`
    pub accent: Option<String>,

    pub tick_rate_ms: Option<u64>,

    pub export_dir: Option<PathBuf>,

    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TICK_RATE_MS)
    }

    /// Parsed accent colour, if one is configured and valid
    pub fn accent_color(&self) -> Option<Color> {
        self.accent
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<Color>().ok())
    }
}

/// Load the config from `explicit` or the default search path.
///
/// A missing file yields the defaults; a file that exists but cannot be read
/// or parsed is an error so the caller can report it.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("TELLURIDE_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("telluride").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("telluride").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "telluride", "telluride")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r##"
            default_tab = "Cargo Space"
            accent = "#00A6E2"
            tick_rate_ms = 100
            export_dir = "/tmp/telluride"
            log_file = "/tmp/telluride.log"
            "##,
        )
        .expect("parse");

        assert_eq!(config.default_tab.as_deref(), Some("Cargo Space"));
        assert_eq!(config.accent_color(), Some(Color::Rgb(0x00, 0xA6, 0xE2)));
        assert_eq!(config.tick_rate_ms(), 100);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/telluride")));
    }

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").expect("parse");
        assert!(config.default_tab.is_none());
        assert_eq!(config.accent_color(), None);
        assert_eq!(config.tick_rate_ms(), DEFAULT_TICK_RATE_MS);
    }

    #[test]
    fn test_zero_tick_rate_uses_default() {
        let config = Config {
            tick_rate_ms: Some(0),
            ..Config::default()
        };
        assert_eq!(config.tick_rate_ms(), DEFAULT_TICK_RATE_MS);
    }

    #[test]
    fn test_named_and_invalid_accent() {
        let named = Config {
            accent: Some("yellow".to_string()),
            ..Config::default()
        };
        assert_eq!(named.accent_color(), Some(Color::Yellow));

        let invalid = Config {
            accent: Some("not-a-colour".to_string()),
            ..Config::default()
        };
        assert_eq!(invalid.accent_color(), None);
    }

    #[test]
    fn test_load_errors() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let missing = tmp.path().join("missing.toml");
        assert!(matches!(
            load(Some(missing.as_path())),
            Err(ConfigError::Read { .. })
        ));

        let broken = tmp.path().join("broken.toml");
        fs::write(&broken, "tick_rate_ms = \"fast\"").expect("write");
        assert!(matches!(load(Some(broken.as_path())), Err(ConfigError::Parse { .. })));

        let good = tmp.path().join("good.toml");
        fs::write(&good, "default_tab = \"trims\"").expect("write");
        let config = load(Some(good.as_path())).expect("load");
        assert_eq!(config.default_tab.as_deref(), Some("trims"));
    }
}
