use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::lookup::LookupConfig;
use self::overlay::OverlayConfig;
use self::selection::SelectionConfig;

pub mod log;
pub mod lookup;
pub mod overlay;
pub mod selection;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub overlay: OverlayConfig,
    pub selection: SelectionConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let debug = env::var("OFFDICT_DEBUG")
            .ok()
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Config {
            lookup: LookupConfig::new(),
            overlay: OverlayConfig::default(),
            selection: SelectionConfig::default(),
            log: LogConfig { debug },
        }
    }

    /// Load a JSON config file; missing sections fall back to defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `path` if it exists, otherwise use `Config::new()`
    pub fn load_or_new(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            tracing::info!("Loading config from {}", path.display());
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_server() {
        let config = Config::default();
        assert_eq!(config.lookup.host, "127.0.0.1");
        assert_eq!(config.lookup.port, 3030);
        assert_eq!(config.lookup.base_url(), "http://127.0.0.1:3030");
        assert!(config.overlay.focus_when_hidden);
        assert!(!config.overlay.hide_on_blur);
        assert_eq!(config.overlay.toggle_shortcut, "Ctrl+Alt+C");
        assert_eq!(config.selection.max_len, 25);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "lookup": { "host": "172.20.18.1" }, "overlay": { "hide_on_blur": true } }"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.lookup.host, "172.20.18.1");
        assert_eq!(config.lookup.port, 3030);
        assert!(config.overlay.hide_on_blur);
        assert!(config.overlay.focus_when_hidden);
        assert_eq!(config.selection.poll_interval_ms, 500);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ lookup: ").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_new(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.overlay, OverlayConfig::default());
    }
}
