use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use logwarden::config::{ColorMode, Overrides};

/// Logwarden - AI security log analyst
#[derive(Parser, Debug)]
#[command(name = "logwarden")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    logwarden auth.log nginx.log -c \"public web tier\"\n  \
    logwarden --folder ./incident -o incident.txt\n  \
    logwarden --watch /var/log/app --threshold 5 -o sentinel.txt")]
pub struct Cli {
    /// Log or metric files to analyze as one batch
    pub logfiles: Vec<PathBuf>,

    /// Analyze every file in a folder
    #[arg(short, long, value_name = "DIR", conflicts_with = "logfiles")]
    pub folder: Option<PathBuf>,

    /// Sentinel Mode: watch a folder and analyze new files in batches
    #[arg(short, long, value_name = "DIR", conflicts_with_all = ["logfiles", "folder"])]
    pub watch: Option<PathBuf>,

    /// API key (overrides environment and .env)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Files per batch in Sentinel Mode
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// Save the report under this name in the output directory
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// Keep only the last N lines of each text file (0 = whole file)
    #[arg(short = 'n', long, value_name = "N")]
    pub lines: Option<usize>,

    /// Describe the environment the logs come from
    #[arg(short, long)]
    pub context: Option<String>,

    /// Directory for saved reports
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Sentinel polling interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub poll_interval: Option<u64>,

    /// Only consider these file extensions (comma separated)
    #[arg(long, value_delimiter = ',', value_name = "EXT")]
    pub ext: Option<Vec<String>>,

    /// Use native filesystem notifications instead of polling
    #[arg(long)]
    pub notify: bool,

    /// Override the provider's default model
    #[arg(long)]
    pub model: Option<String>,

    /// Output format for CI (NDJSON)
    #[arg(long)]
    pub json: bool,

    /// Color output
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

impl Cli {
    /// Flags that override configuration layers
    pub fn overrides(&self) -> Overrides {
        Overrides {
            threshold: self.threshold,
            lines: self.lines,
            context: self.context.clone(),
            output_dir: self.output_dir.clone(),
            poll_interval_ms: self.poll_interval,
            extensions: self.ext.clone(),
            native: self.notify.then_some(true),
            color: self.color.map(ColorMode::from),
            model: self.model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_logfiles() {
        let cli = Cli::try_parse_from(["logwarden", "a.log", "b.json", "-c", "dmz"]).unwrap();
        assert_eq!(cli.logfiles, vec![PathBuf::from("a.log"), PathBuf::from("b.json")]);
        assert_eq!(cli.context.as_deref(), Some("dmz"));
        assert!(cli.watch.is_none());
    }

    #[test]
    fn parses_watch_mode_flags() {
        let cli = Cli::try_parse_from([
            "logwarden",
            "--watch",
            "/var/log/app",
            "--threshold",
            "2",
            "-o",
            "sentinel.txt",
            "--ext",
            "log,json",
            "--notify",
        ])
        .unwrap();
        assert_eq!(cli.watch, Some(PathBuf::from("/var/log/app")));

        let overrides = cli.overrides();
        assert_eq!(overrides.threshold, Some(2));
        assert_eq!(
            overrides.extensions,
            Some(vec!["log".to_string(), "json".to_string()])
        );
        assert_eq!(overrides.native, Some(true));
    }

    #[test]
    fn no_notify_flag_keeps_config_value() {
        let cli = Cli::try_parse_from(["logwarden", "a.log"]).unwrap();
        assert_eq!(cli.overrides().native, None);
    }

    #[test]
    fn watch_conflicts_with_logfiles() {
        assert!(Cli::try_parse_from(["logwarden", "a.log", "--watch", "logs"]).is_err());
        assert!(Cli::try_parse_from(["logwarden", "--folder", "a", "--watch", "b"]).is_err());
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["logwarden", "-vv", "a.log"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
