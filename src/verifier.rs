//! Sequential verification of all providers.

use reqwest::blocking::Client;

use crate::checks::{check_books, check_completion, check_project, Endpoints};
use crate::config::{Config, BOOKS_API_KEY, COMPLETION_API_KEY};
use crate::secrets::SecretMasker;
use crate::ui::{MaskingReporter, Reporter};

/// Per-check outcomes of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Books metadata check passed.
    pub books: bool,
    /// Completion check passed.
    pub completion: bool,
    /// Project identifier check passed. Does not gate the overall result.
    pub project: bool,
}

impl Summary {
    /// The books and completion checks both passed.
    pub fn critical_links_ok(&self) -> bool {
        self.books && self.completion
    }
}

/// Runs the checks in fixed order against one config and client.
pub struct Verifier {
    config: Config,
    client: Client,
    endpoints: Endpoints,
    masker: SecretMasker,
}

impl Verifier {
    /// Create a verifier. Configured API keys are masked in all output.
    pub fn new(config: Config, client: Client, endpoints: Endpoints) -> Self {
        let mut masker = SecretMasker::new();
        masker.add_secrets(config.secrets(&[BOOKS_API_KEY, COMPLETION_API_KEY]));
        Self {
            config,
            client,
            endpoints,
            masker,
        }
    }

    /// Run books, completion and project checks, then print the verdict.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Summary {
        let mut reporter = MaskingReporter::new(reporter, &self.masker);
        reporter.header("Verifying Links");

        let summary = Summary {
            books: check_books(&self.config, &self.client, &self.endpoints, &mut reporter),
            completion: check_completion(
                &self.config,
                &self.client,
                &self.endpoints,
                &mut reporter,
            ),
            project: check_project(&self.config, &mut reporter),
        };
        tracing::debug!(?summary, "Verification finished");

        reporter.blank();
        if summary.critical_links_ok() {
            reporter.success("Critical Links Verified.");
        } else {
            reporter.fail("Some links failed. Check .env configuration.");
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::build_client;
    use crate::config::PROJECT_ID;
    use crate::ui::{MockReporter, StatusKind};
    use httpmock::prelude::*;

    fn mock_books(server: &MockServer, status: u16) {
        server.mock(|when, then| {
            when.method(GET).path("/books/v1/volumes");
            then.status(status).json_body(serde_json::json!({
                "totalItems": 1,
                "items": [{ "volumeInfo": { "title": "Atomic Habits" } }]
            }));
        });
    }

    fn mock_completion(server: &MockServer, status: u16) {
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(status).body("{}");
        });
    }

    fn verifier(server: &MockServer, pairs: &[(&str, &str)]) -> Verifier {
        Verifier::new(
            Config::from_pairs(pairs.iter().copied()),
            build_client().unwrap(),
            Endpoints::with_base(&server.base_url()),
        )
    }

    const ALL_KEYS: &[(&str, &str)] = &[
        (BOOKS_API_KEY, "AIza-test"),
        (COMPLETION_API_KEY, "sk-test"),
        (PROJECT_ID, "reading-app"),
    ];

    #[test]
    fn all_passing_prints_success_verdict() {
        let server = MockServer::start();
        mock_books(&server, 200);
        mock_completion(&server, 200);
        let mut reporter = MockReporter::new();

        let summary = verifier(&server, ALL_KEYS).run(&mut reporter);

        assert_eq!(
            summary,
            Summary {
                books: true,
                completion: true,
                project: true
            }
        );
        assert_eq!(
            reporter.lines(),
            [
                "--- Verifying Links ---",
                "[SUCCESS] Google Books API Connected. Found: Atomic Habits",
                "[SUCCESS] OpenAI API Connected.",
                "[INFO] Firebase Project ID: reading-app",
                "[INFO] Full Firebase verification requires Admin SDK setup (Phase 3). Skipping deep check.",
                "",
                "[SUCCESS] Critical Links Verified.",
            ]
        );
    }

    #[test]
    fn project_does_not_gate_verdict() {
        let server = MockServer::start();
        mock_books(&server, 200);
        mock_completion(&server, 200);
        let mut reporter = MockReporter::new();

        let summary = verifier(
            &server,
            &[(BOOKS_API_KEY, "AIza-test"), (COMPLETION_API_KEY, "sk-test")],
        )
        .run(&mut reporter);

        assert!(!summary.project);
        assert!(summary.critical_links_ok());
        assert_eq!(
            reporter.lines().last().map(String::as_str),
            Some("[SUCCESS] Critical Links Verified.")
        );
    }

    #[test]
    fn completion_failure_fails_verdict() {
        let server = MockServer::start();
        mock_books(&server, 200);
        mock_completion(&server, 401);
        let mut reporter = MockReporter::new();

        let summary = verifier(&server, ALL_KEYS).run(&mut reporter);

        assert!(summary.books);
        assert!(!summary.completion);
        assert!(!summary.critical_links_ok());
        assert_eq!(
            reporter.lines().last().map(String::as_str),
            Some("[FAIL] Some links failed. Check .env configuration.")
        );
    }

    #[test]
    fn nothing_configured_runs_every_check() {
        let server = MockServer::start();
        let mut reporter = MockReporter::new();

        let summary = verifier(&server, &[]).run(&mut reporter);

        assert!(!summary.books && !summary.completion && !summary.project);
        assert_eq!(reporter.count(StatusKind::Fail), 4);
        assert!(reporter.contains("GOOGLE_BOOKS_API_KEY is missing or default."));
        assert!(reporter.contains("OPENAI_API_KEY is missing or default."));
        assert!(reporter.contains("FIREBASE_PROJECT_ID is missing or default."));
    }

    #[test]
    fn error_bodies_echoing_keys_are_masked() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/books/v1/volumes");
            then.status(400).body("API key AIza-test not valid");
        });
        mock_completion(&server, 200);
        let mut reporter = MockReporter::new();

        verifier(&server, ALL_KEYS).run(&mut reporter);

        assert!(reporter.contains("[FAIL] Google Books API Error: 400 - API key [REDACTED] not valid"));
        assert!(!reporter.contains("AIza-test"));
    }

    #[test]
    fn transport_errors_mask_encoded_keys_only() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let verifier = Verifier::new(
            Config::from_pairs([(BOOKS_API_KEY, "AIza/secret+key"), (COMPLETION_API_KEY, "1")]),
            build_client().unwrap(),
            Endpoints::with_base(&format!("http://127.0.0.1:{}", port)),
        );
        let mut reporter = MockReporter::new();

        verifier.run(&mut reporter);

        assert!(!reporter.contains("AIza%2Fsecret%2Bkey"));
        assert!(!reporter.contains("AIza/secret+key"));
        assert!(reporter.contains("key=[REDACTED]"));
        assert!(reporter.contains(&format!("127.0.0.1:{}", port)));
        assert!(reporter.contains("isbn%3A9780735211292"));
    }
}
