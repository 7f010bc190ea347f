//! Error types for link verification.
//!
//! This module defines [`VerifyError`], the error type every check produces
//! internally, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Checks return `VerifyError` from their probe functions and convert it to
//!   a `[FAIL]` line plus a `false` outcome; nothing escapes a check
//! - Only [`VerifyError::ClientUnavailable`] reaches the binary and ends the
//!   process

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for verification operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A credential is absent, empty, or still a `your_...` placeholder.
    #[error("{name} is missing or default.")]
    MissingCredential { name: String },

    /// The environment file exists but could not be loaded.
    #[error("Could not load {path}: {message}")]
    LoaderUnavailable { path: PathBuf, message: String },

    /// The provider answered with a non-success status.
    #[error("{status} - {body}")]
    Remote { status: u16, body: String },

    /// The request never produced a usable response.
    #[error("{message}")]
    Transport { kind: TransportKind, message: String },

    /// The HTTP client could not be constructed.
    #[error("HTTP client could not be initialised: {message}")]
    ClientUnavailable { message: String },
}

/// Classification of transport-level failures.
///
/// All kinds surface as the same console line; the distinction exists for
/// logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// The request or response timed out.
    Timeout,
    /// The connection could not be established (DNS, refused, TLS).
    Connect,
    /// The response body could not be decoded.
    Decode,
    /// Any other request failure.
    Request,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Decode => "decode",
            Self::Request => "request",
        };
        f.write_str(label)
    }
}

impl VerifyError {
    /// Build a decode failure from any displayable cause.
    pub fn decode(message: impl fmt::Display) -> Self {
        Self::Transport {
            kind: TransportKind::Decode,
            message: message.to_string(),
        }
    }

    /// The transport kind, if this is a transport failure.
    pub fn transport_kind(&self) -> Option<TransportKind> {
        match self {
            Self::Transport { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VerifyError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportKind::Timeout
        } else if err.is_connect() {
            TransportKind::Connect
        } else if err.is_decode() || err.is_body() {
            TransportKind::Decode
        } else {
            TransportKind::Request
        };
        Self::Transport {
            kind,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for VerifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err)
    }
}

/// Result type alias for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_displays_name() {
        let err = VerifyError::MissingCredential {
            name: "OPENAI_API_KEY".into(),
        };
        assert_eq!(err.to_string(), "OPENAI_API_KEY is missing or default.");
    }

    #[test]
    fn loader_unavailable_displays_path_and_message() {
        let err = VerifyError::LoaderUnavailable {
            path: PathBuf::from("/app/.env"),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/app/.env"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn remote_displays_status_and_body() {
        let err = VerifyError::Remote {
            status: 404,
            body: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "404 - Not Found");
    }

    #[test]
    fn transport_displays_message_only() {
        let err = VerifyError::Transport {
            kind: TransportKind::Connect,
            message: "connection refused".into(),
        };
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.transport_kind(), Some(TransportKind::Connect));
    }

    #[test]
    fn serde_errors_become_decode_failures() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: VerifyError = parse.unwrap_err().into();
        assert_eq!(err.transport_kind(), Some(TransportKind::Decode));
    }

    #[test]
    fn non_transport_errors_have_no_kind() {
        let err = VerifyError::ClientUnavailable {
            message: "no TLS backend".into(),
        };
        assert!(err.transport_kind().is_none());
        assert!(err.to_string().contains("no TLS backend"));
    }

    #[test]
    fn transport_kind_labels() {
        assert_eq!(TransportKind::Timeout.to_string(), "timeout");
        assert_eq!(TransportKind::Decode.to_string(), "decode");
    }
}
