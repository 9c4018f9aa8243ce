//! Provider value object - which LLM vendor an API key belongs to

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported LLM vendors, detected from the API key prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    OpenAi,
    Anthropic,
}

impl Provider {
    /// Identify the vendor by key prefix.
    ///
    /// `sk-ant` must be checked before the generic `sk-` prefix.
    pub fn detect(api_key: &str) -> Option<Self> {
        let key = api_key.trim();
        if key.starts_with("AIza") {
            Some(Provider::Google)
        } else if key.starts_with("sk-ant") {
            Some(Provider::Anthropic)
        } else if key.starts_with("sk-") {
            Some(Provider::OpenAi)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Google => "gemini-2.5-flash",
            Provider::OpenAi => "gpt-4o",
            Provider::Anthropic => "claude-3-5-sonnet-20241022",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Google => "https://generativelanguage.googleapis.com",
            Provider::OpenAi => "https://api.openai.com",
            Provider::Anthropic => "https://api.anthropic.com",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Google => "Google Gemini",
            Provider::OpenAi => "OpenAI",
            Provider::Anthropic => "Anthropic Claude",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_prefix() {
        assert_eq!(Provider::detect("AIzaSyExample"), Some(Provider::Google));
        assert_eq!(Provider::detect("sk-ant-api03-xyz"), Some(Provider::Anthropic));
        assert_eq!(Provider::detect("sk-proj-abc"), Some(Provider::OpenAi));
        assert_eq!(Provider::detect("ghp_token"), None);
        assert_eq!(Provider::detect(""), None);
    }

    #[test]
    fn anthropic_wins_over_openai_prefix() {
        assert_eq!(Provider::detect("sk-ant"), Some(Provider::Anthropic));
    }
}
