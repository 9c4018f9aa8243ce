//! `.env` support
//!
//! Values from a `.env` file only fill gaps: a variable already set in the
//! process environment always wins. The process environment is never
//! modified; lookups go through `EnvLayer`.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Parse `KEY=value` lines. Supports `export` prefixes, `#` comments and
/// single or double quotes. Malformed lines are skipped.
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() || key.contains(char::is_whitespace) {
                return None;
            }
            Some((key.to_string(), unquote(value.trim())))
        })
        .collect()
}

fn unquote(value: &str) -> String {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner.to_string();
        }
    }
    // Unquoted values may carry a trailing comment.
    match value.find(" #") {
        Some(idx) => value[..idx].trim_end().to_string(),
        None => value.to_string(),
    }
}

/// Environment lookups with `.env` fallback
#[derive(Debug, Clone, Default)]
pub struct EnvLayer {
    dotenv: HashMap<String, String>,
    process: bool,
}

impl EnvLayer {
    /// Process environment backed by `{dir}/.env` when it exists
    pub fn load(dir: &Path) -> io::Result<Self> {
        let path = dir.join(".env");
        let dotenv = match fs::read_to_string(&path) {
            Ok(content) => parse_dotenv(&content).into_iter().collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };
        Ok(Self {
            dotenv,
            process: true,
        })
    }

    /// Fixed set of variables, process environment ignored
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            dotenv: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            process: false,
        }
    }

    /// Look up `key`; empty values count as unset
    pub fn get(&self, key: &str) -> Option<String> {
        let from_process = if self.process {
            std::env::var(key).ok()
        } else {
            None
        };
        from_process
            .filter(|v| !v.is_empty())
            .or_else(|| self.dotenv.get(key).filter(|v| !v.is_empty()).cloned())
    }
}
