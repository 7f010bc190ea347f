//! The verification command.

use crate::checks::build_client;
use crate::config::Config;
use crate::error::Result;
use crate::ui::Reporter;
use crate::verifier::{Summary, Verifier};

use super::args::Cli;

/// Loads configuration, builds the client and runs every check.
pub struct VerifyCommand<'a> {
    cli: &'a Cli,
    env: Vec<(String, String)>,
}

impl<'a> VerifyCommand<'a> {
    /// Create a command reading the current process environment.
    pub fn new(cli: &'a Cli) -> Self {
        Self::with_env(cli, process_env())
    }

    /// Create a command with an explicit environment (for testing).
    pub fn with_env(cli: &'a Cli, env: Vec<(String, String)>) -> Self {
        Self { cli, env }
    }

    /// Run the verification.
    ///
    /// Only a client that cannot be built is an error; every check failure
    /// is reported and folded into the returned [`Summary`].
    pub fn execute(self, reporter: &mut dyn Reporter) -> Result<Summary> {
        let loader = self.cli.loader();
        let loaded = Config::load(loader.as_ref(), self.env);
        if let Some(e) = loaded.loader_error {
            reporter.warn(&format!(
                "{}. Relying on system environment variables.",
                e
            ));
        }

        let client = build_client()?;
        let verifier = Verifier::new(loaded.config, client, self.cli.endpoints());
        Ok(verifier.run(reporter))
    }
}

/// UTF-8 process environment variables; others are skipped.
fn process_env() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
