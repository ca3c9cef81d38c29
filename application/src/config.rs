//! [`Config`]-related definitions.

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// People data configuration.
    pub data: Data,

    /// Search filter configuration.
    pub filter: Filter,

    /// Rendered output configuration.
    pub output: Output,

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

/// People data configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Data {
    /// Path to the JSON file with the people list.
    #[default("data/people.json".to_owned())]
    pub path: String,
}

/// Search filter configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Filter {
    /// Policy of matching the search query against names.
    pub policy: Policy,
}

impl From<Filter> for service::Config {
    fn from(value: Filter) -> Self {
        let Filter { policy } = value;
        Self {
            policy: policy.into(),
        }
    }
}

/// Policy of matching the search query against names.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Policy {
    /// Name contains the query as is.
    #[default]
    Substring,

    /// Name contains all the query characters in the same order.
    Subsequence,
}

impl From<Policy> for service::filter::Policy {
    fn from(value: Policy) -> Self {
        match value {
            Policy::Substring => Self::Substring,
            Policy::Subsequence => Self::Subsequence,
        }
    }
}

/// Rendered output configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Output {
    /// Path to the HTML file to keep the rendered directory in.
    ///
    /// Nothing is written if [`None`].
    #[default(Some("index.html".to_owned()))]
    pub path: Option<String>,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
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
