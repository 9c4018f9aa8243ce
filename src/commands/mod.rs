//! Command implementations
//!
//! `run` resolves configuration once, then dispatches on the mode implied by
//! the arguments: Sentinel Mode, folder scan, or explicit files.

pub mod analyze;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::warn;

use logwarden::config::{
    apply_overrides, load_layered, resolve_api_key, user_config_path, with_env_overrides, Config,
    EnvLayer,
};
use logwarden::error::ProviderError;
use logwarden::infrastructure::fs::{ArtifactReader, ReportStore};
use logwarden::infrastructure::providers::client_for_key;
use logwarden::{AnalysisService, Provider, ReportNaming, ReportOutput};

use crate::cli::Cli;
use crate::ui::context::UiContext;

enum Mode {
    Watch(PathBuf),
    Folder(PathBuf),
    Files(Vec<PathBuf>),
}

impl Mode {
    fn from_cli(cli: &Cli) -> Option<Self> {
        if let Some(dir) = &cli.watch {
            Some(Mode::Watch(dir.clone()))
        } else if let Some(dir) = &cli.folder {
            Some(Mode::Folder(dir.clone()))
        } else if !cli.logfiles.is_empty() {
            Some(Mode::Files(cli.logfiles.clone()))
        } else {
            None
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let Some(mode) = Mode::from_cli(&cli) else {
        bail!("nothing to analyze: pass log files, --folder DIR or --watch DIR (see --help)");
    };

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let env = EnvLayer::load(&cwd).context("cannot read .env")?;
    let config = load_config(&cwd, &env, &cli)?;
    let ui = UiContext::new(cli.json, &config);

    let api_key = resolve_api_key(cli.key.as_deref(), &env)?;
    let provider = Provider::detect(&api_key).ok_or(ProviderError::UnknownKeyFormat)?;

    match mode {
        Mode::Watch(dir) => {
            let service = build_service(&config, &api_key, cli.output, ReportNaming::Timestamped)?;
            watch::cmd_watch(&dir, &config, service, provider, ui)
        }
        Mode::Folder(dir) => {
            let service = build_service(&config, &api_key, cli.output, ReportNaming::Fixed)?;
            analyze::cmd_analyze_folder(&dir, &config, &service, provider, ui)
        }
        Mode::Files(files) => {
            let service = build_service(&config, &api_key, cli.output, ReportNaming::Fixed)?;
            analyze::cmd_analyze(&files, &config, &service, provider, ui)
        }
    }
}

fn load_config(cwd: &Path, env: &EnvLayer, cli: &Cli) -> Result<Config> {
    let user = user_config_path();
    let (config, warnings) = load_layered(cwd, user.as_deref())?;
    for w in warnings {
        let hint = w
            .suggestion
            .map(|s| format!(" (did you mean '{s}'?)"))
            .unwrap_or_default();
        warn!(
            file = %w.file.display(),
            line = ?w.line,
            "unknown config key '{}'{}",
            w.key,
            hint
        );
    }
    let config = with_env_overrides(config, env)?;
    Ok(apply_overrides(config, &cli.overrides())?)
}

fn build_service(
    config: &Config,
    api_key: &str,
    output: Option<String>,
    naming: ReportNaming,
) -> Result<AnalysisService> {
    let client = client_for_key(api_key, &config.provider.settings())?;
    let output = output.map(|name| ReportOutput {
        store: ReportStore::new(&config.output.dir),
        name,
        naming,
    });
    Ok(AnalysisService::new(ArtifactReader::new(config.analysis.lines), client).with_output(output))
}
