//! Configuration module for Logwarden
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (API keys, LOGWARDEN_*), with `.env` filling gaps
//! 3. Project config (./.logwarden.toml)
//! 4. User config (~/.config/logwarden/config.toml)
//! 5. Built-in defaults (lowest priority)

mod dotenv;
mod loader;
mod types;

pub use dotenv::{parse_dotenv, EnvLayer};
pub use loader::{
    apply_overrides, load_layered, load_with_warnings, project_config_path, resolve_api_key,
    user_config_path, user_config_path_in, with_env_overrides, ConfigWarning, Overrides,
    API_KEY_VARS,
};
pub use types::{AnalysisConfig, ColorMode, Config, OutputConfig, ProviderConfig, WatchConfig};
