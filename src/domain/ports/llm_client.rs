//! LlmClient port - one completion request against a provider

use crate::domain::services::Prompt;
use crate::domain::value_objects::Provider;
use crate::error::ProviderError;

/// A chat-completion style client for one vendor
pub trait LlmClient: Send + Sync {
    fn provider(&self) -> Provider;

    /// Send the prompt and return the reply text
    fn complete(&self, prompt: &Prompt) -> Result<String, ProviderError>;
}
