use crossterm::style::{Color, Stylize};

use crate::ui::theme::colors;

/// Status glyphs. Each has a Unicode form and a bracketed ASCII fallback
/// for `C`/`POSIX` locales and dumb terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Watch,
    Report,
}

impl Icon {
    /// (unicode, ascii, color)
    fn glyphs(self) -> (&'static str, &'static str, Color) {
        match self {
            Icon::Success => ("✓", "[OK]", colors::OK),
            Icon::Error => ("✗", "[FAIL]", colors::ALERT),
            Icon::Warning => ("⚠", "[WARN]", colors::CAUTION),
            Icon::Progress => ("●", "[..]", colors::CAUTION),
            Icon::Arrow => ("↳", "[>]", colors::MUTED),
            Icon::Watch => ("⟳", "[~]", colors::ACCENT),
            Icon::Report => ("🛡", "[REPORT]", colors::ACCENT),
        }
    }

    pub fn render(self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii, _) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.glyphs().2).to_string()
        } else {
            glyph.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fallback_is_bracketed() {
        assert_eq!(Icon::Success.render(false), "[OK]");
        assert_eq!(Icon::Report.render(false), "[REPORT]");
    }

    #[test]
    fn unicode_when_supported() {
        assert_eq!(Icon::Warning.render(true), "⚠");
    }

    #[test]
    fn uncolored_icon_is_plain_text() {
        assert_eq!(Icon::Watch.colored(false, false), "[~]");
    }
}
