//! Error types for Logwarden
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Logwarden operations
pub type WardenResult<T> = Result<T, WardenError>;

/// Main error type for Logwarden operations
#[derive(Error, Debug)]
pub enum WardenError {
    /// Watch target or scan folder is unusable
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Configuration value rejected
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Config file could not be parsed
    #[error("invalid config file {file}: {message}")]
    ConfigFile { file: PathBuf, message: String },

    /// Analysis of a batch failed
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Trigger could not be fired
    #[error(transparent)]
    Trigger(#[from] TriggerError),

    /// No API key in flags, environment or `.env`
    #[error("no API key found (use --key or set GEMINI_API_KEY, OPENAI_API_KEY or ANTHROPIC_API_KEY)")]
    MissingApiKey,

    /// Native watcher setup failed
    #[error("file watcher error: {0}")]
    Watcher(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Watch target missing or unreadable. Fatal at startup.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("directory not found: {path}")]
    NotFound { path: PathBuf },

    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("cannot read directory {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DirectoryError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            DirectoryError::NotFound { path }
            | DirectoryError::NotADirectory { path }
            | DirectoryError::Unreadable { path, .. } => path,
        }
    }
}

/// A single file could not be inspected during one poll cycle.
#[derive(Error, Debug)]
#[error("cannot read {path}: {source}")]
pub struct TransientReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Failure reported by the analysis capability.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Every artifact in the batch was unreadable or blank
    #[error("no readable content in {files} file(s)")]
    NoContent { files: usize },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Worker thread died before producing a result
    #[error("analysis worker panicked")]
    WorkerPanicked,
}

/// Failure talking to an LLM provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("unrecognized API key format (expected AIza..., sk-ant-... or sk-...)")]
    UnknownKeyFormat,

    #[error("{provider} request failed with HTTP {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} request failed: {message}")]
    Transport {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} returned an unexpected response: {message}")]
    InvalidResponse {
        provider: &'static str,
        message: String,
    },
}

/// Trigger invocation rejected before any analysis ran.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TriggerError {
    /// Programming error: a trigger needs at least one file
    #[error("refusing to trigger analysis for an empty batch")]
    EmptyBatch,

    /// Another trigger is still in flight
    #[error("an analysis is already in flight")]
    Busy,

    /// OS refused to start the worker thread
    #[error("could not start analysis worker: {0}")]
    Spawn(String),
}
