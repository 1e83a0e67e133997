//! Runtime configuration from environment variables.
//!
//! | Variable                     | Default                   |
//! |------------------------------|---------------------------|
//! | `CYTORADAR_DATA_PATH`        | `data/processed_data.csv` |
//! | `CYTORADAR_MODEL_DIR`        | `model`                   |
//! | `CYTORADAR_REQUIRE_MANIFEST` | `false`                   |
//! | `CYTORADAR_LOG_MODE`         | `auto` (`file`/`stdout`)  |
//! | `CYTORADAR_LOG_FILE`         | `cytoradar.log`           |

use std::path::PathBuf;

pub const DATA_PATH_ENV: &str = "CYTORADAR_DATA_PATH";
pub const MODEL_DIR_ENV: &str = "CYTORADAR_MODEL_DIR";
pub const REQUIRE_MANIFEST_ENV: &str = "CYTORADAR_REQUIRE_MANIFEST";
pub const LOG_MODE_ENV: &str = "CYTORADAR_LOG_MODE";
pub const LOG_FILE_ENV: &str = "CYTORADAR_LOG_FILE";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// File when stdout is a terminal, stdout otherwise
    Auto,
    File,
    Stdout,
}

impl LogMode {
    fn parse(value: &str) -> Self {
        match value.trim() {
            "file" => Self::File,
            "stdout" => Self::Stdout,
            _ => Self::Auto,
        }
    }

    /// Resolve `Auto` against whether stdout is interactive.
    #[must_use]
    pub fn use_file(&self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "TRUE" | "yes" | "YES")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub model_dir: PathBuf,
    pub require_manifest: bool,
    pub log_mode: LogMode,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/processed_data.csv"),
            model_dir: PathBuf::from("model"),
            require_manifest: false,
            log_mode: LogMode::Auto,
            log_file: PathBuf::from("cytoradar.log"),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_path: lookup(DATA_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            model_dir: lookup(MODEL_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.model_dir),
            require_manifest: lookup(REQUIRE_MANIFEST_ENV)
                .map(|v| parse_bool(&v))
                .unwrap_or(defaults.require_manifest),
            log_mode: lookup(LOG_MODE_ENV)
                .map(|v| LogMode::parse(&v))
                .unwrap_or(defaults.log_mode),
            log_file: lookup(LOG_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (DATA_PATH_ENV, "/srv/wdbc.csv"),
            (MODEL_DIR_ENV, "/srv/model"),
            (REQUIRE_MANIFEST_ENV, "yes"),
            (LOG_MODE_ENV, "stdout"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.data_path, PathBuf::from("/srv/wdbc.csv"));
        assert_eq!(config.model_dir, PathBuf::from("/srv/model"));
        assert!(config.require_manifest);
        assert_eq!(config.log_mode, LogMode::Stdout);
        assert_eq!(config.log_file, PathBuf::from("cytoradar.log"));
    }

    #[test]
    fn test_log_mode_resolution() {
        assert!(LogMode::Auto.use_file(true));
        assert!(!LogMode::Auto.use_file(false));
        assert!(LogMode::File.use_file(false));
        assert!(!LogMode::Stdout.use_file(true));
        assert_eq!(LogMode::parse("bogus"), LogMode::Auto);
    }
}
