//! CLI argument definitions.
//!
//! Running with no arguments verifies every provider using `.env` and the
//! process environment.

use clap::Parser;
use std::path::PathBuf;

use crate::checks::{Endpoints, DEFAULT_BOOKS_URL, DEFAULT_COMPLETION_URL};
use crate::config::{DotEnvLoader, EnvLoader, NoopLoader};

/// Verify that third-party API credentials are configured and reachable.
#[derive(Debug, Parser)]
#[command(name = "verify-links")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Environment file to read before checking
    #[arg(long, default_value = ".env", value_name = "PATH")]
    pub env_file: PathBuf,

    /// Ignore the environment file and use only the process environment
    #[arg(long, conflicts_with = "env_file")]
    pub no_env_file: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the books volume-search endpoint
    #[arg(long, hide = true, env = "VERIFY_LINKS_BOOKS_URL", default_value = DEFAULT_BOOKS_URL)]
    pub books_url: String,

    /// Override the chat-completion endpoint
    #[arg(long, hide = true, env = "VERIFY_LINKS_COMPLETION_URL", default_value = DEFAULT_COMPLETION_URL)]
    pub completion_url: String,
}

impl Cli {
    /// The environment loader selected by the flags.
    pub fn loader(&self) -> Box<dyn EnvLoader> {
        if self.no_env_file {
            Box::new(NoopLoader)
        } else {
            Box::new(DotEnvLoader::new(&self.env_file))
        }
    }

    /// Endpoints selected by the flags.
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            books_url: self.books_url.clone(),
            completion_url: self.completion_url.clone(),
        }
    }
}
