//! Provider checks.
//!
//! Each check is a plain function of the config, the HTTP client and a
//! reporter. It prints its own diagnostics and returns whether it passed;
//! no error leaves a check.
//!
//! - [`check_books`] - books metadata API (network)
//! - [`check_completion`] - completion API (network)
//! - [`check_project`] - cloud project identifier (presence only)

pub mod books;
pub mod client;
pub mod completion;
pub mod project;

pub use books::{check_books, probe_books, BooksOutcome, PROBE_ISBN};
pub use client::{build_client, Endpoints, DEFAULT_BOOKS_URL, DEFAULT_COMPLETION_URL};
pub use completion::{check_completion, probe_completion, PROBE_MODEL};
pub use project::check_project;
