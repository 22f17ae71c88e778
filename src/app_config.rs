use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language name assumed when the request does not carry one
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Prompt executor config
    pub executor: ExecutorConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Prompt executor backend type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorKind {
    /// Google Gemini API
    #[default]
    Gemini,
    /// In-process mock executor, for offline dry runs
    Mock,
}

impl ExecutorKind {
    /// Capitalized backend name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Gemini => "Gemini",
            Self::Mock => "Mock",
        }
    }
}

impl std::fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gemini => write!(f, "gemini"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

impl std::str::FromStr for ExecutorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "mock" => Ok(Self::Mock),
            _ => Err(anyhow!("Invalid executor type: {}", s)),
        }
    }
}

/// Prompt executor configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExecutorConfig {
    /// Backend type
    #[serde(rename = "type", default)]
    pub kind: ExecutorKind,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key, may also come from the GEMINI_API_KEY environment variable
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service URL, empty for the backend's public endpoint
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Bound on each executor call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            kind: ExecutorKind::default(),
            model: default_model(),
            api_key: String::new(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            executor: ExecutorConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .context(format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;
        std::fs::write(&path, content)
            .context(format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.source_language.trim().is_empty() {
            return Err(anyhow!("Source language cannot be empty"));
        }
        if self.executor.timeout_secs == 0 {
            return Err(anyhow!("Executor timeout must be at least 1 second"));
        }
        if !self.executor.endpoint.is_empty() {
            url::Url::parse(&self.executor.endpoint)
                .map_err(|e| anyhow!("Invalid executor endpoint URL: {}", e))?;
        }
        match self.executor.kind {
            ExecutorKind::Gemini => {
                if self.executor.model.trim().is_empty() {
                    return Err(anyhow!("Model name is required for the Gemini executor"));
                }
                if self.executor.api_key.trim().is_empty() {
                    return Err(anyhow!(
                        "API key is required for the Gemini executor (set it in the config or via GEMINI_API_KEY)"
                    ));
                }
            }
            ExecutorKind::Mock => {}
        }
        Ok(())
    }
}

/// Log level setting
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Map to the log crate's level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "English".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}
