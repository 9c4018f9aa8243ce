use logwarden::SentinelEvent;

use crate::ui::header::CommandHeader;
use crate::ui::icon::Icon;
use crate::ui::theme::banner;
use crate::ui::views::report::rule;

pub fn render_sentinel_header(
    directory: &str,
    threshold: usize,
    strategy: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Logwarden Sentinel");
    header.add("Directory", directory);
    header.add("Threshold", format!("{threshold} file(s) per batch"));
    header.add("Detection", strategy);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_sentinel_event(
    timestamp: &str,
    event: &SentinelEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);
    let icon = |i: Icon| i.colored(supports_color, supports_unicode);

    match event {
        SentinelEvent::WatchStarted { directory, .. } => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Watch), directory)
        }
        SentinelEvent::FileDetected {
            path,
            kind,
            pending,
        } => format!(
            "{} {} {}: {} ({} pending)\n",
            prefix,
            icon(Icon::Arrow),
            capitalize(&kind.to_string()),
            path,
            pending
        ),
        SentinelEvent::AnalysisStarted { batch, files } => format!(
            "{} {} Analyzing batch #{} ({} file(s))...\n",
            prefix,
            icon(Icon::Progress),
            batch,
            files.len()
        ),
        SentinelEvent::ReportReady {
            batch,
            report,
            saved_to,
            ..
        } => {
            let rule = rule();
            let mut out = format!(
                "{} {} Report for batch #{}\n{rule}\n{}\n{rule}\n{}\n",
                prefix,
                icon(Icon::Success),
                batch,
                banner::TITLE,
                report.trim_end()
            );
            if let Some(path) = saved_to {
                out.push_str(&format!("{} Saved: {}\n", icon(Icon::Arrow), path));
            }
            out
        }
        SentinelEvent::AnalysisFailed {
            batch, message, ..
        } => format!(
            "{} {} Batch #{} failed: {}\n",
            prefix,
            icon(Icon::Error),
            batch,
            message
        ),
        SentinelEvent::SourceError { message } => {
            format!("{} {} {}\n", prefix, icon(Icon::Warning), message)
        }
        SentinelEvent::Shutdown { discarded } => {
            let note = match discarded {
                0 => String::new(),
                n => format!(" ({} pending file(s) discarded)", n),
            };
            format!(
                "\n{} {} Sentinel stopped{}.\n",
                prefix,
                icon(Icon::Watch),
                note
            )
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logwarden::FileEventKind;

    #[test]
    fn renders_started_event_with_watch_icon() {
        let event = SentinelEvent::WatchStarted {
            directory: "/var/log/app".to_string(),
            threshold: 2,
        };
        let rendered = render_sentinel_event("00:00:00", &event, false, false);
        assert_eq!(rendered, "[00:00:00] [~] Watching: /var/log/app\n");
    }

    #[test]
    fn renders_detection_with_pending_count() {
        let event = SentinelEvent::FileDetected {
            path: "logs/a.log".to_string(),
            kind: FileEventKind::Modified,
            pending: 2,
        };
        let rendered = render_sentinel_event("12:00:01", &event, false, false);
        assert_eq!(rendered, "[12:00:01] [>] Modified: logs/a.log (2 pending)\n");
    }

    #[test]
    fn renders_report_with_banner() {
        let event = SentinelEvent::ReportReady {
            batch: 4,
            files: vec!["a.log".into()],
            provider: "google".into(),
            saved_to: Some("reports/s_1700000000.txt".into()),
            report: "EXECUTIVE SUMMARY\n".into(),
        };
        let rendered = render_sentinel_event("00:00:00", &event, false, false);
        assert!(rendered.contains("Report for batch #4"));
        assert!(rendered.contains("FINAL SECURITY REPORT"));
        assert!(rendered.ends_with("[>] Saved: reports/s_1700000000.txt\n"));
    }

    #[test]
    fn shutdown_mentions_discarded_files() {
        let rendered = render_sentinel_event(
            "00:00:00",
            &SentinelEvent::Shutdown { discarded: 1 },
            false,
            false,
        );
        assert!(rendered.contains("Sentinel stopped (1 pending file(s) discarded)."));

        let rendered = render_sentinel_event(
            "00:00:00",
            &SentinelEvent::Shutdown { discarded: 0 },
            false,
            false,
        );
        assert!(rendered.ends_with("Sentinel stopped.\n"));
    }
}
