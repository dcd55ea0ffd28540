use std::fs;
use std::path::{Path, PathBuf};

use matfarm_types::TrackerConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name the config is stored under by `confy`.
pub const APP_NAME: &str = "matfarm";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(#[source] confy::ConfyError),

    #[error("failed to store config: {0}")]
    Store(#[source] confy::ConfyError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the game writes `Journal.*.log` files to
    pub journal_directory: String,
    pub tracker: TrackerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            journal_directory: default_journal_directory()
                .map(|dir| dir.to_string_lossy().into_owned())
                .unwrap_or_default(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the stored config, creating it with defaults on first run.
    pub fn load() -> Result<Self, ConfigError> {
        confy::load(APP_NAME, None).map_err(ConfigError::Load)
    }

    pub fn store(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, self).map_err(ConfigError::Store)
    }

    /// Write the config to an explicit TOML file.
    pub fn store_at(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(ConfigError::Store)
    }

    /// Load a config from an explicit TOML file instead of the stored one.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Where `load`/`store` keep the file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, None).map_err(ConfigError::Load)
    }

    pub fn journal_dir(&self) -> PathBuf {
        PathBuf::from(&self.journal_directory)
    }
}

/// Journal location for a default install.
#[cfg(windows)]
pub fn default_journal_directory() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join("Saved Games")
            .join("Frontier Developments")
            .join("Elite Dangerous")
    })
}

/// Journal location inside the Steam/Proton prefix.
#[cfg(not(windows))]
pub fn default_journal_directory() -> Option<PathBuf> {
    dirs::data_dir().map(|data| {
        data.join("Steam/steamapps/compatdata/359320/pfx/drive_c/users/steamuser")
            .join("Saved Games")
            .join("Frontier Developments")
            .join("Elite Dangerous")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = std::env::temp_dir().join(format!("matfarm-config-{}.toml", std::process::id()));
        fs::write(
            &path,
            r#"
journal_directory = "/tmp/journals"

[tracker]
hge_min_population = 1000000
"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.journal_dir(), PathBuf::from("/tmp/journals"));
        assert_eq!(config.tracker.hge_min_population, 1_000_000);
        assert_eq!(config.tracker.temp_row_ttl_secs, 90);
        assert!(config.tracker.track_emissions);
    }

    #[test]
    fn test_stored_file_loads_back() {
        let path = std::env::temp_dir().join(format!("matfarm-stored-{}.toml", std::process::id()));
        let config = AppConfig {
            journal_directory: "/srv/journals".to_string(),
            tracker: TrackerConfig {
                temp_row_ttl_secs: 30,
                track_emissions: false,
                ..TrackerConfig::default()
            },
        };

        config.store_at(&path).unwrap();
        let loaded = AppConfig::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let path = std::env::temp_dir().join("matfarm-does-not-exist.toml");
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let path = std::env::temp_dir().join(format!("matfarm-bad-{}.toml", std::process::id()));
        fs::write(&path, "tracker = 5").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
