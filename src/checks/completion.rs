//! Completion API check.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;

use crate::config::{Config, COMPLETION_API_KEY};
use crate::error::{Result, VerifyError};
use crate::ui::Reporter;

use super::client::{endpoint_url, Endpoints};

/// Model named in the probe request.
pub const PROBE_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl ChatRequest<'static> {
    fn ping() -> Self {
        Self {
            model: PROBE_MODEL,
            messages: [ChatMessage {
                role: "user",
                content: "ping",
            }],
            max_tokens: 5,
        }
    }
}

/// Send a minimal chat completion with `api_key` as bearer token.
pub fn probe_completion(client: &Client, endpoint: &str, api_key: &str) -> Result<()> {
    let url = endpoint_url(endpoint, &[])?;

    tracing::debug!(endpoint, model = PROBE_MODEL, "Sending completion probe");
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .json(&ChatRequest::ping())
        .send()?;
    let status = response.status();
    tracing::debug!(status = status.as_u16(), "Completion API responded");

    if status == StatusCode::OK {
        return Ok(());
    }

    Err(VerifyError::Remote {
        status: status.as_u16(),
        body: response.text()?,
    })
}

/// Verify the completion credential, reporting the outcome.
pub fn check_completion(
    config: &Config,
    client: &Client,
    endpoints: &Endpoints,
    reporter: &mut dyn Reporter,
) -> bool {
    let api_key = match config.credential(COMPLETION_API_KEY) {
        Ok(key) => key,
        Err(e) => {
            reporter.fail(&e.to_string());
            return false;
        }
    };

    match probe_completion(client, &endpoints.completion_url, api_key) {
        Ok(()) => {
            reporter.success("OpenAI API Connected.");
            true
        }
        Err(VerifyError::Remote { status, body }) => {
            reporter.fail(&format!("OpenAI API Error: {} - {}", status, body));
            false
        }
        Err(e) => {
            tracing::debug!(kind = ?e.transport_kind(), "Completion request failed");
            reporter.fail(&format!("OpenAI Connection Error: {}", e));
            false
        }
    }
}
