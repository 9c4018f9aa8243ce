//! Google Gemini generateContent client
//!
//! Gemini gets the system and user prompts as one text part.

use serde_json::{json, Value};

use super::http;
use crate::domain::ports::LlmClient;
use crate::domain::services::Prompt;
use crate::domain::value_objects::Provider;
use crate::error::ProviderError;

const NAME: &str = "google";

pub struct GoogleClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
    model: String,
}

impl GoogleClient {
    pub fn new(agent: ureq::Agent, base_url: String, api_key: String, model: String) -> Self {
        Self {
            agent,
            base_url,
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn request_body(prompt: &Prompt) -> Value {
        json!({
            "contents": [{"role": "user", "parts": [{"text": prompt.combined()}]}],
        })
    }
}

fn parse_reply(reply: &Value) -> Result<String, ProviderError> {
    let parts = reply
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .ok_or_else(|| http::invalid(NAME, "missing candidates[0].content.parts"))?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    if text.is_empty() {
        return Err(http::invalid(NAME, "reply contained no text"));
    }
    Ok(text)
}

impl LlmClient for GoogleClient {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    fn complete(&self, prompt: &Prompt) -> Result<String, ProviderError> {
        let request = self
            .agent
            .post(&self.endpoint())
            .set("x-goog-api-key", &self.api_key);
        let reply = http::post_json(NAME, request, &Self::request_body(prompt))?;
        parse_reply(&reply)
    }
}
