use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use logwarden::config::{ColorMode, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    /// `config.output.color` already carries the `--color` flag.
    pub fn new(json: bool, config: &Config) -> Self {
        Self::from_caps(json, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = !json
            && match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            };

        Self {
            json,
            color,
            unicode: caps.supports_unicode,
        }
    }
}
