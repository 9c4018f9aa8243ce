use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use logwarden::config::Config;
use logwarden::domain::ports::Analyzer;
use logwarden::infrastructure::fs::LocalDirectoryLister;
use logwarden::{folder_batch, AnalysisService, Provider, Report};

use crate::ui::context::UiContext;
use crate::ui::views::report::{render_analysis_header, render_report};

pub fn cmd_analyze_folder(
    dir: &Path,
    config: &Config,
    service: &AnalysisService,
    provider: Provider,
    ui: UiContext,
) -> Result<()> {
    let files = folder_batch(&LocalDirectoryLister::new(), dir, &config.watch.filter())
        .with_context(|| format!("cannot scan folder {}", dir.display()))?;
    if files.is_empty() {
        bail!("no files to analyze in {}", dir.display());
    }
    cmd_analyze(&files, config, service, provider, ui)
}

pub fn cmd_analyze(
    files: &[PathBuf],
    config: &Config,
    service: &AnalysisService,
    provider: Provider,
    ui: UiContext,
) -> Result<()> {
    if !ui.json {
        print!(
            "{}",
            render_analysis_header(files.len(), provider.display_name(), ui.color, ui.unicode)
        );
    }

    let report = service.analyze(files, config.analysis.context.as_deref())?;

    if ui.json {
        println!("{}", report_json(&report));
    } else {
        print!("{}", render_report(&report, ui.color, ui.unicode));
    }
    Ok(())
}

fn report_json(report: &Report) -> serde_json::Value {
    serde_json::json!({
        "event": "report",
        "command": "analyze",
        "provider": report.provider.as_str(),
        "files": report
            .files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
        "saved_to": report.saved_to.as_ref().map(|p| p.display().to_string()),
        "report": report.text,
    })
}
