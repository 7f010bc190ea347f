//! Secret masking for console output.
//!
//! - [`SecretMasker`] - Replaces credential values with `[REDACTED]`

pub mod mask;

pub use mask::SecretMasker;
