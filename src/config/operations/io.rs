use crate::config::types::Settings;
use crate::paths::settings_path;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Settings from the user config file, or defaults. Never written back.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    if !path.exists() {
        return Settings::default();
    }

    match read_settings(&path) {
        Ok(settings) => {
            tracing::info!("loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            tracing::warn!("{}. Using default settings.", e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::operations::load::test_support::scratch_dir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = scratch_dir("config-partial");
        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{ "fullscreen": true, "asset_dir": "/opt/keyvox" }"#).unwrap();

        let settings = read_settings(&path).unwrap();
        assert!(settings.fullscreen);
        assert_eq!(settings.asset_dir(), PathBuf::from("/opt/keyvox"));
        assert_eq!(settings.inner_size(), [1000.0, 600.0]);
        assert_eq!(settings.zoom, 1.0);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = scratch_dir("config-malformed");
        let path = dir.join("settings.json");
        std::fs::write(&path, "{ fullscreen: yes").unwrap();

        assert!(matches!(
            read_settings(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = scratch_dir("config-missing");
        assert!(matches!(
            read_settings(&dir.join("settings.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
