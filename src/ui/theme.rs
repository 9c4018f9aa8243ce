//! Colors and report banner shared by every view

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const OK: Color = Color::Green;
    pub const ALERT: Color = Color::Red;
    pub const CAUTION: Color = Color::Yellow;
    pub const ACCENT: Color = Color::Cyan;
    pub const MUTED: Color = Color::DarkGrey;
}

/// Frame around every printed report
pub mod banner {
    pub const RULE_CHAR: char = '=';
    pub const RULE_WIDTH: usize = 40;
    pub const TITLE: &str = "FINAL SECURITY REPORT";
}
