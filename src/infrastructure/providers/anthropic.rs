//! Anthropic messages client

use serde_json::{json, Value};

use super::http;
use crate::domain::ports::LlmClient;
use crate::domain::services::Prompt;
use crate::domain::value_objects::Provider;
use crate::error::ProviderError;

const NAME: &str = "anthropic";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

pub struct AnthropicClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    pub fn new(agent: ureq::Agent, base_url: String, api_key: String, model: String) -> Self {
        Self {
            agent,
            base_url,
            api_key,
            model,
        }
    }

    fn request_body(&self, prompt: &Prompt) -> Value {
        json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "system": prompt.system,
            "messages": [{"role": "user", "content": prompt.user}],
        })
    }
}

fn parse_reply(reply: &Value) -> Result<String, ProviderError> {
    reply
        .pointer("/content/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| http::invalid(NAME, "missing content[0].text"))
}

impl LlmClient for AnthropicClient {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    fn complete(&self, prompt: &Prompt) -> Result<String, ProviderError> {
        let request = self
            .agent
            .post(&format!("{}/v1/messages", self.base_url))
            .set("x-api-key", &self.api_key)
            .set("anthropic-version", API_VERSION);
        let reply = http::post_json(NAME, request, &self.request_body(prompt))?;
        parse_reply(&reply)
    }
}
