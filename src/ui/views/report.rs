use std::path::Path;

use logwarden::Report;

use crate::ui::header::CommandHeader;
use crate::ui::icon::Icon;
use crate::ui::theme::banner;

pub fn render_analysis_header(
    files: usize,
    provider: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Report, "Logwarden Analysis");
    header.add("Files", files.to_string());
    header.add("Provider", provider);
    header.render(supports_color, supports_unicode)
}

/// Banner, report body, and where it was saved
pub fn render_report(report: &Report, supports_color: bool, supports_unicode: bool) -> String {
    let rule = rule();
    let mut out = format!("\n{rule}\n{}\n{rule}\n", banner::TITLE);
    out.push_str(report.text.trim_end());
    out.push('\n');
    if let Some(path) = &report.saved_to {
        out.push_str(&render_saved(path, supports_color, supports_unicode));
    }
    out
}

pub(crate) fn rule() -> String {
    std::iter::repeat(banner::RULE_CHAR)
        .take(banner::RULE_WIDTH)
        .collect()
}

pub fn render_saved(path: &Path, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "\n{} Report saved: {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use logwarden::Provider;
    use std::path::PathBuf;

    #[test]
    fn report_has_banner_and_body() {
        let report = Report::new(
            "EXECUTIVE SUMMARY\n- brute force from 10.0.0.5\n\n",
            vec![PathBuf::from("auth.log")],
            Provider::Google,
        );
        let rendered = render_report(&report, false, false);
        let rule = "=".repeat(40);
        assert!(rendered.starts_with(&format!("\n{rule}\nFINAL SECURITY REPORT\n{rule}\n")));
        assert!(rendered.ends_with("- brute force from 10.0.0.5\n"));
        assert!(!rendered.contains("Report saved"));
    }

    #[test]
    fn saved_report_mentions_path() {
        let report = Report::new("x", vec![], Provider::OpenAi)
            .with_saved_to(PathBuf::from("reports/weekly.txt"));
        let rendered = render_report(&report, false, false);
        assert!(rendered.contains("[OK] Report saved: reports/weekly.txt"));
    }

    #[test]
    fn header_lists_files_and_provider() {
        let rendered = render_analysis_header(3, "OpenAI", false, false);
        assert!(rendered.starts_with("[REPORT] Logwarden Analysis\n"));
        assert!(rendered.contains("Files: 3\n"));
        assert!(rendered.contains("Provider: OpenAI\n"));
    }
}
