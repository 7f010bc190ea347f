//! Books metadata API check.
//!
//! Searches for a known ISBN. A 200 with zero results still passes: the key
//! was accepted even if quota or search indexing returned nothing.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::{Config, BOOKS_API_KEY};
use crate::error::{Result, VerifyError};
use crate::ui::Reporter;

use super::client::{endpoint_url, Endpoints};

/// ISBN searched for (Atomic Habits).
pub const PROBE_ISBN: &str = "9780735211292";

/// Successful probe result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooksOutcome {
    /// At least one volume matched; carries the first title.
    Found { title: String },
    /// The provider answered but reported no volumes.
    Empty,
}

#[derive(Debug, Deserialize)]
struct VolumeSearch {
    #[serde(rename = "totalItems")]
    total_items: i64,
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo")]
    volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Deserialize)]
struct VolumeInfo {
    title: Option<String>,
}

/// Query the volume-search endpoint with `api_key`.
pub fn probe_books(client: &Client, endpoint: &str, api_key: &str) -> Result<BooksOutcome> {
    let query = format!("isbn:{}", PROBE_ISBN);
    let url = endpoint_url(endpoint, &[("q", query.as_str()), ("key", api_key)])?;

    tracing::debug!(endpoint, isbn = PROBE_ISBN, "Querying books metadata API");
    let response = client.get(url).send()?;
    let status = response.status();
    tracing::debug!(status = status.as_u16(), "Books metadata API responded");

    let body = response.text()?;
    if status != StatusCode::OK {
        return Err(VerifyError::Remote {
            status: status.as_u16(),
            body,
        });
    }

    let search: VolumeSearch = serde_json::from_str(&body)?;
    if search.total_items <= 0 {
        return Ok(BooksOutcome::Empty);
    }

    let title = search
        .items
        .into_iter()
        .next()
        .and_then(|volume| volume.volume_info)
        .and_then(|info| info.title)
        .ok_or_else(|| {
            VerifyError::decode(format!(
                "response reported {} result(s) but no title",
                search.total_items
            ))
        })?;

    Ok(BooksOutcome::Found { title })
}

/// Verify the books metadata credential, reporting the outcome.
pub fn check_books(
    config: &Config,
    client: &Client,
    endpoints: &Endpoints,
    reporter: &mut dyn Reporter,
) -> bool {
    let api_key = match config.credential(BOOKS_API_KEY) {
        Ok(key) => key,
        Err(e) => {
            reporter.fail(&e.to_string());
            return false;
        }
    };

    match probe_books(client, &endpoints.books_url, api_key) {
        Ok(BooksOutcome::Found { title }) => {
            reporter.success(&format!("Google Books API Connected. Found: {}", title));
            true
        }
        Ok(BooksOutcome::Empty) => {
            reporter.warn("Google Books API responded but found no books. Key might be valid but quota/search issue.");
            true
        }
        Err(VerifyError::Remote { status, body }) => {
            reporter.fail(&format!("Google Books API Error: {} - {}", status, body));
            false
        }
        Err(e) => {
            tracing::debug!(kind = ?e.transport_kind(), "Books metadata request failed");
            reporter.fail(&format!("Google Books Connection Error: {}", e));
            false
        }
    }
}
