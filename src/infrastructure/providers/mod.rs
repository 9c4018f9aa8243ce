//! LLM provider clients
//!
//! One blocking JSON request per analysis, sent with `ureq`. The vendor is
//! picked from the API key prefix.

mod anthropic;
mod google;
mod http;
mod openai;
#[cfg(test)]
mod stub_server;

use std::time::Duration;

pub use anthropic::AnthropicClient;
pub use google::GoogleClient;
pub use openai::OpenAiClient;

use crate::domain::ports::LlmClient;
use crate::domain::value_objects::Provider;
use crate::error::ProviderError;

/// Default request timeout; LLM reports can take a while to generate
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Per-run overrides for the provider client
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            model: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProviderSettings {
    fn model_for(&self, provider: Provider) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| provider.default_model().to_string())
    }

    fn base_url_for(&self, provider: Provider) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(provider.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }
}

/// Build the client matching the key's vendor
pub fn client_for_key(
    api_key: &str,
    settings: &ProviderSettings,
) -> Result<Box<dyn LlmClient>, ProviderError> {
    let provider = Provider::detect(api_key).ok_or(ProviderError::UnknownKeyFormat)?;
    let key = api_key.trim().to_string();
    let model = settings.model_for(provider);
    let base_url = settings.base_url_for(provider);
    let agent = http::agent(settings.timeout);

    Ok(match provider {
        Provider::Google => Box::new(GoogleClient::new(agent, base_url, key, model)),
        Provider::OpenAi => Box::new(OpenAiClient::new(agent, base_url, key, model)),
        Provider::Anthropic => Box::new(AnthropicClient::new(agent, base_url, key, model)),
    })
}
