//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ExtensionFilter, Threshold};
use crate::error::WardenResult;
use crate::infrastructure::providers::ProviderSettings;

use super::loader::{self, ConfigWarning};

/// Sentinel Mode settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default)]
    pub threshold: Threshold,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Only files with these extensions are considered (empty = all)
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Use native filesystem notifications instead of polling
    #[serde(default)]
    pub native: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            poll_interval_ms: default_poll_interval_ms(),
            extensions: Vec::new(),
            native: false,
        }
    }
}

impl WatchConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(&self.extensions)
    }
}

fn default_poll_interval_ms() -> u64 {
    3000
}

/// What gets sent to the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Keep only the last N lines of text artifacts (0 = whole file)
    #[serde(default)]
    pub lines: usize,

    /// Free-form environment description appended to the system prompt
    #[serde(default)]
    pub context: Option<String>,
}

/// Color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Report and terminal output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub color: ColorMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            color: ColorMode::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

/// LLM client settings. The vendor itself always comes from the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    pub fn settings(&self) -> ProviderSettings {
        ProviderSettings {
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn default_timeout_secs() -> u64 {
    120
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> WardenResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and return any non-fatal warnings
    pub fn load_with_warnings(path: &Path) -> WardenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
