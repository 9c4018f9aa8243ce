//! OpenAI chat completions client

use serde_json::{json, Value};

use super::http;
use crate::domain::ports::LlmClient;
use crate::domain::services::Prompt;
use crate::domain::value_objects::Provider;
use crate::error::ProviderError;

const NAME: &str = "openai";

pub struct OpenAiClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
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
            "messages": [
                {"role": "system", "content": prompt.system},
                {"role": "user", "content": prompt.user},
            ],
        })
    }
}

fn parse_reply(reply: &Value) -> Result<String, ProviderError> {
    reply
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| http::invalid(NAME, "missing choices[0].message.content"))
}

impl LlmClient for OpenAiClient {
    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    fn complete(&self, prompt: &Prompt) -> Result<String, ProviderError> {
        let request = self
            .agent
            .post(&format!("{}/v1/chat/completions", self.base_url))
            .set("Authorization", &format!("Bearer {}", self.api_key));
        let reply = http::post_json(NAME, request, &self.request_body(prompt))?;
        parse_reply(&reply)
    }
}
