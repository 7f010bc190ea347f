//! HTTP client and provider endpoints.

use reqwest::blocking::Client;

use crate::error::{Result, TransportKind, VerifyError};

/// Production books volume-search endpoint.
pub const DEFAULT_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Production chat-completion endpoint.
pub const DEFAULT_COMPLETION_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Where the network checks send their requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Books volume-search endpoint (GET).
    pub books_url: String,
    /// Chat-completion endpoint (POST).
    pub completion_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            books_url: DEFAULT_BOOKS_URL.to_string(),
            completion_url: DEFAULT_COMPLETION_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Point both checks at a single base URL, e.g. a local mock server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            books_url: format!("{}/books/v1/volumes", base),
            completion_url: format!("{}/v1/chat/completions", base),
        }
    }
}

/// Build the blocking HTTP client shared by all checks.
///
/// The client keeps reqwest's default timeout behaviour.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("verify-links/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| VerifyError::ClientUnavailable {
            message: e.to_string(),
        })
}

/// Parse an endpoint and attach query parameters.
pub(crate) fn endpoint_url(base: &str, params: &[(&str, &str)]) -> Result<reqwest::Url> {
    let mut url = reqwest::Url::parse(base).map_err(|e| VerifyError::Transport {
        kind: TransportKind::Request,
        message: format!("invalid endpoint {}: {}", base, e),
    })?;
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url)
}
