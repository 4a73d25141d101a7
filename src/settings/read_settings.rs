use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fs_op::sync::FlushMode;
use crate::pruner::OnError;
use crate::settings::config_dirs::default_settings_path;

/// Directory both tools work on unless told otherwise.
pub const DEFAULT_TARGET_DIR: &str = "mount";

/// Settings shared by `create_files` and `delete_random`. Every field has a
/// default so a settings file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub target_dir: PathBuf,
    /// Fixed rng seed; a fresh OS seed is used when absent.
    pub seed: Option<u64>,
    pub flush: FlushMode,
    pub on_error: OnError,
    pub progress: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Also write logs to a file in this directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            seed: None,
            flush: FlushMode::default(),
            on_error: OnError::default(),
            progress: false,
            log_filter: "info".to_string(),
            log_dir: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file `{0}` does not exist")]
    NotFound(PathBuf),

    #[error("failed to read settings `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parse settings from TOML text. `origin` only labels errors.
pub fn parse_settings(text: &str, origin: &Path) -> Result<Settings, SettingsError> {
    toml::from_str(text).map_err(|source| SettingsError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Load settings.
///
/// With `explicit` set the file must exist. Otherwise the per-user settings
/// file is read if present, and built-in defaults are used if not.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match explicit {
        Some(p) => {
            if !p.exists() {
                return Err(SettingsError::NotFound(p.to_path_buf()));
            }
            p.to_path_buf()
        }
        None => match default_settings_path() {
            Some(p) if p.is_file() => p,
            _ => return Ok(Settings::default()),
        },
    };
    let text = fs::read_to_string(&path).map_err(|source| SettingsError::Io {
        path: path.clone(),
        source,
    })?;
    parse_settings(&text, &path)
}
