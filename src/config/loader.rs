//! Environment file loaders.
//!
//! The environment file is optional. A loader either yields the variables it
//! found or reports that it is unavailable, in which case the caller warns
//! and carries on with the process environment alone.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, VerifyError};

use super::env_file::EnvFileParser;

/// A source of environment variables read once at startup.
pub trait EnvLoader {
    /// Human-readable description of where variables come from.
    fn source(&self) -> String;

    /// Load variables.
    ///
    /// A source that simply does not exist is not an error and yields an
    /// empty map.
    fn load(&self) -> Result<HashMap<String, String>>;
}

/// Loads a `.env`-style file from disk.
#[derive(Debug, Clone)]
pub struct DotEnvLoader {
    path: PathBuf,
}

impl DotEnvLoader {
    /// Create a loader for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for DotEnvLoader {
    fn default() -> Self {
        Self::new(".env")
    }
}

impl EnvLoader for DotEnvLoader {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No environment file found");
            return Ok(HashMap::new());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| VerifyError::LoaderUnavailable {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let vars = EnvFileParser::parse(&content);
        tracing::debug!(
            path = %self.path.display(),
            count = vars.len(),
            "Loaded environment file"
        );
        Ok(vars)
    }
}

/// A loader that never provides anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLoader;

impl EnvLoader for NoopLoader {
    fn source(&self) -> String {
        "process environment".to_string()
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        Ok(HashMap::new())
    }
}
