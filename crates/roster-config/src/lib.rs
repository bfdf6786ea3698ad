use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use roster_core::rules::{validate_timeout_secs, DEFAULT_TIMEOUT_SECS};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const APP_DIR: &str = "roster";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_USER_AGENT: &str = "roster";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: SourceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig {
                url: DEFAULT_SOURCE_URL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid source.timeout_secs value: {0}")]
    InvalidTimeoutSecs(u64),
    #[error("invalid source.url value: {0}")]
    InvalidUrl(String),
    #[error("invalid source.user_agent value: must not be blank")]
    InvalidUserAgent,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    source: Option<SourceFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceFile {
    url: Option<String>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

/// Checks a source URL the same way the config file's `source.url` is checked.
pub fn validate_source_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw).map_err(|_| ConfigError::InvalidUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(raw.to_string())
}

pub fn validate_timeout(value: u64) -> Result<u64> {
    validate_timeout_secs(value).map_err(|_| ConfigError::InvalidTimeoutSecs(value))
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(source) = parsed.source {
        if let Some(url) = source.url {
            config.source.url = validate_source_url(url.trim())?;
        }
        if let Some(timeout_secs) = source.timeout_secs {
            config.source.timeout_secs = validate_timeout(timeout_secs)?;
        }
        if let Some(user_agent) = source.user_agent {
            let trimmed = user_agent.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::InvalidUserAgent);
            }
            config.source.user_agent = trimmed.to_string();
        }
    }

    Ok(config)
}
