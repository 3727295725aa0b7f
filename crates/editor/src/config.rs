// Chunk: docs/chunks/edit_cli - Edit script loading and command-line front end
//!
//! Configuration for the `lineedit` command.
//!
//! ## File Location
//!
//! The config file is stored at `<config dir>/lineedit/config.json`, e.g.
//! - Linux: `~/.config/lineedit/config.json`
//! - macOS: `~/Library/Application Support/lineedit/config.json`
//!
//! `--config <PATH>` overrides the location.
//!
//! ## Schema Version
//!
//! The file includes a schema version. If it doesn't match the current code,
//! the file is ignored and defaults are used (the caller is told, so it can
//! log a warning). A missing file also yields defaults; a malformed file is
//! an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current schema version for the config file.
///
/// Increment this when making breaking changes to the config format.
const SCHEMA_VERSION: u32 = 1;

/// Application name used for the config directory.
const APP_NAME: &str = "lineedit";

/// Config file name.
const CONFIG_FILENAME: &str = "config.json";

/// Errors reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("could not determine the config directory")]
    NoConfigDir,
}

/// Settings for the `lineedit` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    /// Default tracing filter when `RUST_LOG` is unset (e.g. "warn", "lineedit=debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Keep a `<file>.orig` copy before overwriting a file in place.
    #[serde(default)]
    pub backup: bool,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            log_level: default_log_level(),
            backup: false,
        }
    }
}

/// Where a loaded [`Config`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No file was found; built-in defaults.
    Defaults,
    /// Read from this file.
    File(PathBuf),
    /// The file at this path had another schema version and was ignored.
    Discarded { path: PathBuf, schema_version: u32 },
}

/// Returns the default config file path, if the platform has a config directory.
pub fn config_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_NAME).join(CONFIG_FILENAME))
}

/// Loads the config from `path`, or from [`config_file_path`] when `None`.
pub fn load_config(path: Option<&Path>) -> Result<(Config, ConfigSource), ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_file_path) {
        Some(p) => p,
        None => return Ok((Config::default(), ConfigSource::Defaults)),
    };

    let contents = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok((Config::default(), ConfigSource::Defaults))
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let config: Config = match serde_json::from_str(&contents) {
        Ok(c) => c,
        Err(source) => return Err(ConfigError::Parse { path, source }),
    };

    if config.schema_version != SCHEMA_VERSION {
        let schema_version = config.schema_version;
        return Ok((
            Config::default(),
            ConfigSource::Discarded {
                path,
                schema_version,
            },
        ));
    }

    Ok((config, ConfigSource::File(path)))
}

/// Saves `config` to `path`, or to [`config_file_path`] when `None`,
/// creating the parent directory if needed. Returns the path written.
pub fn save_config(config: &Config, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(config_file_path)
        .ok_or(ConfigError::NoConfigDir)?;

    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        write_atomically(&path, &json)
    };
    write().map_err(|source| ConfigError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Atomic write: write to a sibling temp file, then rename over `path`.
pub(crate) fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);
    fs::write(&temp_path, contents)?;
    fs::rename(&temp_path, path)
}
