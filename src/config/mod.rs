//! Configuration loading.
//!
//! This module provides:
//! - [`EnvFileParser`] for `.env`-style files
//! - [`EnvLoader`] and its implementations for the optional environment file
//! - [`Config`], the read-only credential mapping every check reads
//!
//! # Example
//!
//! ```
//! use verify_links::config::{Config, NoopLoader, PROJECT_ID};
//!
//! let env = vec![(PROJECT_ID.to_string(), "reading-app".to_string())];
//! let loaded = Config::load(&NoopLoader, env);
//! assert_eq!(loaded.config.credential(PROJECT_ID).unwrap(), "reading-app");
//! ```

pub mod credentials;
pub mod env_file;
pub mod loader;

pub use credentials::{
    is_placeholder, Config, LoadedConfig, BOOKS_API_KEY, COMPLETION_API_KEY, PROJECT_ID,
};
pub use env_file::EnvFileParser;
pub use loader::{DotEnvLoader, EnvLoader, NoopLoader};
