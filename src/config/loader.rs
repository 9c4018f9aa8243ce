//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Threshold;
use crate::error::{WardenError, WardenResult};

use super::dotenv::EnvLayer;
use super::types::{ColorMode, Config};

/// API key variables, in lookup order
pub const API_KEY_VARS: [&str; 3] = ["GEMINI_API_KEY", "OPENAI_API_KEY", "ANTHROPIC_API_KEY"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Values given on the command line. `None` keeps the lower layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub threshold: Option<usize>,
    pub lines: Option<usize>,
    pub context: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub poll_interval_ms: Option<u64>,
    pub extensions: Option<Vec<String>>,
    pub native: Option<bool>,
    pub color: Option<ColorMode>,
    pub model: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WardenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WardenError::ConfigFile {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// `./.logwarden.toml` under `dir`
pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(".logwarden.toml")
}

/// `~/.config/logwarden/config.toml` on every platform
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| user_config_path_in(&home))
}

/// User config location under an explicit home directory
pub fn user_config_path_in(home: &Path) -> PathBuf {
    home.join(".config").join("logwarden").join("config.toml")
}

/// Load the project config if present, else the user config, else defaults.
///
/// A file that exists but does not parse is an error; it is never silently
/// replaced by a lower layer.
pub fn load_layered(
    project_dir: &Path,
    user_config: Option<&Path>,
) -> WardenResult<(Config, Vec<ConfigWarning>)> {
    let project = project_config_path(project_dir);
    let candidates = std::iter::once(project.as_path()).chain(user_config);

    for path in candidates {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            return load_with_warnings(path);
        }
    }
    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (LOGWARDEN_* prefix)
pub fn with_env_overrides(mut config: Config, env: &EnvLayer) -> WardenResult<Config> {
    if let Some(raw) = env.get("LOGWARDEN_THRESHOLD") {
        config.watch.threshold = parse_threshold(&raw, "LOGWARDEN_THRESHOLD")?;
    }
    if let Some(raw) = env.get("LOGWARDEN_LINES") {
        config.analysis.lines = parse_number(&raw, "LOGWARDEN_LINES")?;
    }
    if let Some(raw) = env.get("LOGWARDEN_POLL_INTERVAL_MS") {
        config.watch.poll_interval_ms = parse_number(&raw, "LOGWARDEN_POLL_INTERVAL_MS")?;
    }
    if let Some(dir) = env.get("LOGWARDEN_OUTPUT_DIR") {
        config.output.dir = PathBuf::from(dir);
    }
    Ok(config)
}

/// Apply command-line values on top of everything else
pub fn apply_overrides(mut config: Config, overrides: &Overrides) -> WardenResult<Config> {
    if let Some(n) = overrides.threshold {
        config.watch.threshold = Threshold::try_from(n).map_err(WardenError::Config)?;
    }
    if let Some(lines) = overrides.lines {
        config.analysis.lines = lines;
    }
    if let Some(context) = &overrides.context {
        config.analysis.context = Some(context.clone());
    }
    if let Some(dir) = &overrides.output_dir {
        config.output.dir = dir.clone();
    }
    if let Some(ms) = overrides.poll_interval_ms {
        config.watch.poll_interval_ms = ms;
    }
    if let Some(exts) = &overrides.extensions {
        config.watch.extensions = exts.clone();
    }
    if let Some(native) = overrides.native {
        config.watch.native = native;
    }
    if let Some(color) = overrides.color {
        config.output.color = color;
    }
    if let Some(model) = &overrides.model {
        config.provider.model = Some(model.clone());
    }

    if config.watch.poll_interval_ms == 0 {
        return Err(WardenError::Config(
            "poll interval must be greater than 0 ms".to_string(),
        ));
    }
    Ok(config)
}

/// `--key` first, then GEMINI_API_KEY, OPENAI_API_KEY, ANTHROPIC_API_KEY.
pub fn resolve_api_key(cli_key: Option<&str>, env: &EnvLayer) -> WardenResult<String> {
    cli_key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .or_else(|| {
            API_KEY_VARS.iter().find_map(|var| {
                env.get(var)
                    .map(|v| v.trim().to_string())
                    .filter(|k| !k.is_empty())
            })
        })
        .ok_or(WardenError::MissingApiKey)
}

fn parse_threshold(raw: &str, var: &str) -> WardenResult<Threshold> {
    let n: usize = parse_number(raw, var)?;
    Threshold::try_from(n).map_err(|e| WardenError::Config(format!("{var}: {e}")))
}

fn parse_number<T: std::str::FromStr>(raw: &str, var: &str) -> WardenResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| WardenError::Config(format!("{var}: expected a number, got '{raw}'")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "watch",
        "threshold",
        "poll_interval_ms",
        "extensions",
        "native",
        "analysis",
        "lines",
        "context",
        "output",
        "dir",
        "color",
        "provider",
        "model",
        "base_url",
        "timeout_secs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
