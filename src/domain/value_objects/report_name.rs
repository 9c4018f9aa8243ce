//! Report file names
//!
//! Output names come from user input, so they are reduced to a single
//! path component drawn from `[A-Za-z0-9_.-]` before touching the disk.

/// Used when sanitization leaves nothing usable
pub const DEFAULT_REPORT_NAME: &str = "unnamed_report.txt";

/// Strip directories and unsafe characters from a report file name.
pub fn sanitize_filename(name: &str) -> String {
    let base = name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let safe: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    if safe.is_empty() || safe.chars().all(|c| c == '.') {
        DEFAULT_REPORT_NAME.to_string()
    } else {
        safe
    }
}

/// Per-batch name used in Sentinel Mode: `{stem}_{unix_seconds}.txt`.
///
/// The stem is everything before the first `.txt`.
pub fn timestamped_name(name: &str, unix_seconds: i64) -> String {
    let stem = name.split(".txt").next().unwrap_or(name);
    format!("{stem}_{unix_seconds}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_traversal() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("..\\..\\boot.ini"), "boot.ini");
    }

    #[test]
    fn drops_unsafe_characters() {
        assert_eq!(sanitize_filename("my report (final)!.txt"), "myreportfinal.txt");
        assert_eq!(sanitize_filename("incident\0.txt"), "incident.txt");
    }

    #[test]
    fn falls_back_when_nothing_left() {
        assert_eq!(sanitize_filename(""), DEFAULT_REPORT_NAME);
        assert_eq!(sanitize_filename("reports/"), DEFAULT_REPORT_NAME);
        assert_eq!(sanitize_filename("$$$"), DEFAULT_REPORT_NAME);
        assert_eq!(sanitize_filename(".."), DEFAULT_REPORT_NAME);
    }

    #[test]
    fn keeps_safe_names() {
        assert_eq!(sanitize_filename("weekly-report_v2.txt"), "weekly-report_v2.txt");
    }

    #[test]
    fn timestamped_names() {
        assert_eq!(timestamped_name("scan.txt", 1700000000), "scan_1700000000.txt");
        assert_eq!(timestamped_name("scan", 42), "scan_42.txt");
        assert_eq!(timestamped_name("a.txt.bak", 7), "a_7.txt");
    }
}
