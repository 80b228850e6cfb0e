use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use newsletter_engine::{ApiConfig, EngineConfig, DEFAULT_POLL_INTERVAL};
use serde::Deserialize;
use thiserror::Error;

pub(crate) const CONFIG_FILENAME: &str = "newsletter.ron";
const DEFAULT_LOG_FILE: &str = "newsletter.log";

pub(crate) const ENV_API_URL: &str = "NEWSLETTER_API_URL";
pub(crate) const ENV_USERNAME: &str = "NEWSLETTER_USERNAME";
pub(crate) const ENV_PASSWORD: &str = "NEWSLETTER_PASSWORD";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Optional settings file, every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub poll_interval_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppConfig {
    pub engine: EngineConfig,
    pub log_file: PathBuf,
}

/// Reads the settings file. A missing file is `Ok(None)`.
pub(crate) fn load_file(path: &Path) -> Result<Option<FileConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Merges file settings with environment values; the environment wins.
pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> AppConfig {
    let api = ApiConfig {
        base_url: env(ENV_API_URL).or(file.api_url),
        username: env(ENV_USERNAME).or(file.username),
        password: env(ENV_PASSWORD).or(file.password),
    };
    let poll_interval = file
        .poll_interval_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_POLL_INTERVAL);

    AppConfig {
        engine: EngineConfig { api, poll_interval },
        log_file: file
            .log_file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
    }
}

pub(crate) fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
