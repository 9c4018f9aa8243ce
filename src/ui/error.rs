use logwarden::error::{AnalysisError, DirectoryError, ProviderError, WardenError};

use crate::ui::icon::Icon;

/// Render a fatal error with a short fix hint when one applies.
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} Error: {:#}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    );
    if let Some(hint) = hint_for(err) {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }
    out
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<WardenError>() {
            return match e {
                WardenError::MissingApiKey => {
                    Some("Pass --key or add GEMINI_API_KEY=... to a .env file")
                }
                WardenError::ConfigFile { .. } => Some("Fix or remove the config file"),
                _ => None,
            };
        }
        if let Some(e) = cause.downcast_ref::<ProviderError>() {
            return match e {
                ProviderError::UnknownKeyFormat => {
                    Some("Google keys start with AIza, Anthropic with sk-ant-, OpenAI with sk-")
                }
                ProviderError::Status { status: 401, .. } | ProviderError::Status { status: 403, .. } => {
                    Some("Check that the API key is valid for this provider")
                }
                ProviderError::Status { status: 429, .. } => {
                    Some("Quota or rate limit reached; try again later")
                }
                _ => None,
            };
        }
        if let Some(AnalysisError::NoContent { .. }) = cause.downcast_ref::<AnalysisError>() {
            return Some("Check the file paths and permissions");
        }
        if cause.downcast_ref::<DirectoryError>().is_some() {
            return Some("The path must be an existing, readable directory");
        }
        None
    })
}
