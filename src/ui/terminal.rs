//! What the attached terminal can display

use is_terminal::IsTerminal;

const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_HOME",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Decide from an environment lookup and whether stdout is a TTY.
    ///
    /// Color needs a TTY, a non-dumb `TERM` and no `NO_COLOR`. Unicode is
    /// assumed unless `TERM=dumb` or the locale is `C`/`POSIX`.
    fn detect_with(env: impl Fn(&str) -> Option<String>, stdout_is_tty: bool) -> Self {
        let dumb = env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .into_iter()
            .find_map(|key| env(key).filter(|v| !v.is_empty()));
        let ascii_locale = locale
            .as_deref()
            .is_some_and(|l| l.eq_ignore_ascii_case("c") || l.eq_ignore_ascii_case("posix"));

        Self {
            supports_color: stdout_is_tty && !dumb && env("NO_COLOR").is_none(),
            supports_unicode: !dumb && !ascii_locale,
            is_ci: CI_MARKERS.iter().any(|key| env(key).is_some()),
        }
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    TerminalCapabilities::detect_with(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect_with(vars: &[(&str, &str)], tty: bool) -> TerminalCapabilities {
        TerminalCapabilities::detect_with(
            |key| {
                vars.iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v.to_string())
            },
            tty,
        )
    }

    #[test]
    fn no_color_wins_over_tty() {
        let caps = detect_with(&[("NO_COLOR", "1"), ("TERM", "xterm-256color")], true);
        assert!(!caps.supports_color);
    }

    #[test]
    fn ci_is_detected() {
        assert!(detect_with(&[("GITHUB_ACTIONS", "true")], false).is_ci);
        assert!(!detect_with(&[], true).is_ci);
    }

    #[test]
    fn dumb_terminal_gets_plain_ascii() {
        let caps = detect_with(&[("TERM", "dumb")], true);
        assert!(!caps.supports_color);
        assert!(!caps.supports_unicode);
    }

    #[test]
    fn pipes_get_no_color() {
        let caps = detect_with(&[("TERM", "xterm-256color")], false);
        assert!(!caps.supports_color);
        assert!(caps.supports_unicode);
    }

    #[test]
    fn posix_locale_means_ascii() {
        assert!(!detect_with(&[("LC_ALL", "C")], true).supports_unicode);
        assert!(detect_with(&[("LANG", "en_US.UTF-8")], true).supports_unicode);
    }
}
