use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use logwarden::config::Config;
use logwarden::domain::ports::FileEventSource;
use logwarden::infrastructure::fs::LocalDirectoryLister;
use logwarden::infrastructure::{NotifyEventSource, PollingEventSource};
use logwarden::{
    AnalysisService, AnalysisTrigger, Provider, SentinelController, SentinelEvent, WatchTarget,
};

use crate::ui::context::UiContext;
use crate::ui::views::sentinel::{render_sentinel_event, render_sentinel_header};

pub fn cmd_watch(
    dir: &Path,
    config: &Config,
    service: AnalysisService,
    provider: Provider,
    ui: UiContext,
) -> Result<()> {
    let target = WatchTarget::new(dir, config.watch.filter())
        .context("cannot start Sentinel Mode")?;

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("cannot install Ctrl+C handler")?;

    let strategy = if config.watch.native {
        "native notifications".to_string()
    } else {
        format!("polling every {} ms", config.watch.poll_interval_ms)
    };
    if !ui.json {
        print!(
            "{}",
            render_sentinel_header(
                &dir.display().to_string(),
                config.watch.threshold.get(),
                &strategy,
                ui.color,
                ui.unicode
            )
        );
    }
    info!(provider = %provider, "starting Sentinel Mode");

    let trigger = AnalysisTrigger::new(Arc::new(service), config.analysis.context.clone());
    let emit = |event: SentinelEvent| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_sentinel_event(&timestamp, &event, ui.color, ui.unicode);
        match event {
            SentinelEvent::AnalysisFailed { .. } | SentinelEvent::SourceError { .. } => {
                eprint!("{rendered}")
            }
            _ => print!("{rendered}"),
        }
    };

    let stats = if config.watch.native {
        let source = NotifyEventSource::new(target)?;
        run_sentinel(dir, source, config, trigger, &running, &emit)
    } else {
        let source = PollingEventSource::new(
            target,
            LocalDirectoryLister::new(),
            config.watch.poll_interval(),
        )?;
        run_sentinel(dir, source, config, trigger, &running, &emit)
    };

    info!(
        detected = stats.detected,
        reports = stats.reports,
        failures = stats.failures,
        discarded = stats.discarded,
        "Sentinel Mode finished"
    );
    Ok(())
}

fn run_sentinel<S: FileEventSource>(
    dir: &Path,
    source: S,
    config: &Config,
    trigger: AnalysisTrigger,
    running: &AtomicBool,
    emit: &dyn Fn(SentinelEvent),
) -> logwarden::SentinelStats {
    SentinelController::new(dir, source, config.watch.threshold, trigger).run(running, emit)
}
