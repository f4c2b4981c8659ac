//! [`Config`]-related definitions.

use std::path::PathBuf;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::infra::JsonFile;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listing source configuration.
    pub source: Source,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Listing source configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Source {
    /// Path to the JSON file holding the listings.
    #[default(PathBuf::from("listings.json"))]
    pub path: PathBuf,
}

impl From<Source> for JsonFile {
    fn from(value: Source) -> Self {
        let Source { path } = value;
        Self::new(path)
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::{env, fs, path::Path};

    use super::{Config, LogLevel};

    #[test]
    fn defaults_without_file() {
        let config = Config::new("non-existent-config").unwrap();

        assert_eq!(config.source.path, Path::new("listings.json"));
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn loads_from_file() {
        let path = env::temp_dir().join("campus-market-config-test.toml");
        fs::write(
            &path,
            "[source]\npath = \"/srv/listings.json\"\n\n\
             [log]\nlevel = \"DEBUG\"\n",
        )
        .unwrap();

        let config = Config::new(path.to_string_lossy());
        _ = fs::remove_file(&path);
        let config = config.unwrap();

        assert_eq!(config.source.path, Path::new("/srv/listings.json"));
        assert_eq!(config.log.level, LogLevel::Debug);
    }
}
