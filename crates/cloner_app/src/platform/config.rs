use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use cloner_engine::{CloneProvider, HttpCloneProvider, HttpSettings, MockCloneProvider};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

const CONFIG_FILENAME: &str = "cloner.ron";
const CONFIG_ENV: &str = "CLONER_CONFIG";

fn default_delay_ms() -> u64 {
    2000
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_request_timeout_ms() -> u64 {
    120_000
}

fn default_max_bytes() -> u64 {
    5 * 1024 * 1024
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderConfig {
    Mock {
        #[serde(default = "default_delay_ms")]
        delay_ms: u64,
    },
    Http {
        endpoint: String,
        #[serde(default = "default_connect_timeout_ms")]
        connect_timeout_ms: u64,
        #[serde(default = "default_request_timeout_ms")]
        request_timeout_ms: u64,
        #[serde(default = "default_max_bytes")]
        max_bytes: u64,
    },
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Mock {
            delay_ms: default_delay_ms(),
        }
    }
}

impl ProviderConfig {
    pub fn build(&self) -> Result<Arc<dyn CloneProvider>> {
        match self {
            ProviderConfig::Mock { delay_ms } => Ok(Arc::new(MockCloneProvider::new(
                Duration::from_millis(*delay_ms),
            ))),
            ProviderConfig::Http {
                endpoint,
                connect_timeout_ms,
                request_timeout_ms,
                max_bytes,
            } => {
                let settings = HttpSettings {
                    endpoint: endpoint.clone(),
                    connect_timeout: Duration::from_millis(*connect_timeout_ms),
                    request_timeout: Duration::from_millis(*request_timeout_ms),
                    max_bytes: *max_bytes,
                };
                let provider = HttpCloneProvider::new(settings)
                    .with_context(|| format!("cannot use clone endpoint {endpoint}"))?;
                Ok(Arc::new(provider))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Settings read from `cloner.ron`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClonerConfig {
    pub provider: ProviderConfig,
    pub output_dir: PathBuf,
    pub prefs_path: PathBuf,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
}

impl Default for ClonerConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            output_dir: PathBuf::from("output"),
            prefs_path: PathBuf::from(".cloner_prefs.ron"),
            log_destination: LogDestination::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl ClonerConfig {
    /// Loads `$CLONER_CONFIG`, else `./cloner.ron`, else defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        Self::parse(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::{ClonerConfig, LogLevel, ProviderConfig};
    use crate::platform::logging::LogDestination;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = ClonerConfig::load_from(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(config, ClonerConfig::default());
        assert_eq!(config.provider, ProviderConfig::Mock { delay_ms: 2000 });
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = ClonerConfig::parse(
            r#"(
                provider: Http(endpoint: "http://localhost:8080/clone"),
                log_destination: Both,
            )"#,
        )
        .unwrap();

        assert_eq!(
            config.provider,
            ProviderConfig::Http {
                endpoint: "http://localhost:8080/clone".to_string(),
                connect_timeout_ms: 10_000,
                request_timeout_ms: 120_000,
                max_bytes: 5 * 1024 * 1024,
            }
        );
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(ClonerConfig::parse("(provider: Carrier)").is_err());
    }

    #[test]
    fn bad_endpoint_fails_to_build() {
        let provider = ProviderConfig::Http {
            endpoint: "nope".to_string(),
            connect_timeout_ms: 1,
            request_timeout_ms: 1,
            max_bytes: 1,
        };
        assert!(provider.build().is_err());
    }
}
