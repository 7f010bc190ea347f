//! verify-links - connectivity verification for third-party API credentials.
//!
//! Checks, in order, that the books metadata API key works, that the
//! completion API key works, and that a cloud project identifier is set,
//! printing `[SUCCESS]`/`[WARN]`/`[FAIL]`/`[INFO]` lines for each.
//!
//! # Modules
//!
//! - [`checks`] - One function per provider
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Environment file loading and the credential mapping
//! - [`error`] - Error types and result aliases
//! - [`secrets`] - Masking of credential values in output
//! - [`ui`] - Console reporting
//! - [`verifier`] - Runs the checks and prints the verdict
//!
//! # Example
//!
//! ```
//! use verify_links::checks::check_project;
//! use verify_links::config::{Config, PROJECT_ID};
//! use verify_links::ui::MockReporter;
//!
//! let config = Config::from_pairs([(PROJECT_ID, "reading-app")]);
//! let mut reporter = MockReporter::new();
//! assert!(check_project(&config, &mut reporter));
//! assert!(reporter.contains("Firebase Project ID: reading-app"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod secrets;
pub mod ui;
pub mod verifier;

pub use error::{Result, VerifyError};
