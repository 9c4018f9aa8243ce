//! Shared HTTP plumbing for the provider clients

use std::time::Duration;

use serde_json::Value;

use crate::error::ProviderError;

/// Longest error body kept in messages
const MAX_ERROR_BODY: usize = 512;

pub(super) fn agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(timeout)
        .user_agent(concat!("logwarden/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Send a JSON body and decode the JSON reply, mapping failures per vendor
pub(super) fn post_json(
    provider: &'static str,
    request: ureq::Request,
    body: &Value,
) -> Result<Value, ProviderError> {
    match request.send_json(body) {
        Ok(response) => response
            .into_json::<Value>()
            .map_err(|e| ProviderError::InvalidResponse {
                provider,
                message: e.to_string(),
            }),
        Err(ureq::Error::Status(status, response)) => {
            let body = response.into_string().unwrap_or_default();
            Err(ProviderError::Status {
                provider,
                status,
                body: truncate(body.trim()),
            })
        }
        Err(ureq::Error::Transport(transport)) => Err(ProviderError::Transport {
            provider,
            message: transport.to_string(),
        }),
    }
}

pub(super) fn invalid(provider: &'static str, message: impl Into<String>) -> ProviderError {
    ProviderError::InvalidResponse {
        provider,
        message: message.into(),
    }
}

fn truncate(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
