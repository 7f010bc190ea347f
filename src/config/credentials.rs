//! Read-only credential mapping.

use std::collections::HashMap;

use crate::error::{Result, VerifyError};

use super::loader::EnvLoader;

/// Environment variable holding the books metadata API key.
pub const BOOKS_API_KEY: &str = "GOOGLE_BOOKS_API_KEY";

/// Environment variable holding the completion API key.
pub const COMPLETION_API_KEY: &str = "OPENAI_API_KEY";

/// Environment variable holding the cloud project identifier.
pub const PROJECT_ID: &str = "FIREBASE_PROJECT_ID";

/// Marker left in values copied from an example env file.
const PLACEHOLDER_MARKER: &str = "your_";

/// Returns true if a value has not really been configured.
///
/// # Example
///
/// ```
/// use verify_links::config::is_placeholder;
///
/// assert!(is_placeholder(""));
/// assert!(is_placeholder("your_api_key_here"));
/// assert!(!is_placeholder("AIzaSyExample"));
/// ```
pub fn is_placeholder(value: &str) -> bool {
    value.is_empty() || value.contains(PLACEHOLDER_MARKER)
}

/// Credentials and identifiers, built once at startup.
///
/// Values from the environment file are applied first; the process
/// environment then overrides them.
#[derive(Debug, Clone, Default)]
pub struct Config {
    values: HashMap<String, String>,
}

/// Outcome of [`Config::load`].
#[derive(Debug)]
pub struct LoadedConfig {
    /// The merged configuration.
    pub config: Config,
    /// Set when the loader could not provide its file.
    pub loader_error: Option<VerifyError>,
}

impl Config {
    /// Build a config from explicit pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use verify_links::config::Config;
    ///
    /// let config = Config::from_pairs([("OPENAI_API_KEY", "sk-test")]);
    /// assert_eq!(config.get("OPENAI_API_KEY"), Some("sk-test"));
    /// assert_eq!(config.get("FIREBASE_PROJECT_ID"), None);
    /// ```
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Merge the loader's variables with `env`.
    ///
    /// A loader failure is returned alongside the config built from `env`
    /// alone; it is never fatal.
    pub fn load(
        loader: &dyn EnvLoader,
        env: impl IntoIterator<Item = (String, String)>,
    ) -> LoadedConfig {
        let (mut values, loader_error) = match loader.load() {
            Ok(vars) => (vars, None),
            Err(e) => {
                tracing::debug!(
                    source = %loader.source(),
                    error = %e,
                    "Environment loader unavailable"
                );
                (HashMap::new(), Some(e))
            }
        };
        values.extend(env);

        LoadedConfig {
            config: Self { values },
            loader_error,
        }
    }

    /// Raw value lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Look up a value that must be configured.
    pub fn credential(&self, name: &str) -> Result<&str> {
        match self.get(name) {
            Some(value) if !is_placeholder(value) => Ok(value),
            _ => Err(VerifyError::MissingCredential {
                name: name.to_string(),
            }),
        }
    }

    /// Configured values of the given names, for output masking.
    pub fn secrets<'a>(&'a self, names: &'a [&'a str]) -> impl Iterator<Item = &'a str> + 'a {
        names.iter().filter_map(|name| self.credential(name).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::NoopLoader;

    struct FixedLoader(HashMap<String, String>);

    impl EnvLoader for FixedLoader {
        fn source(&self) -> String {
            "fixed".into()
        }

        fn load(&self) -> Result<HashMap<String, String>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenLoader;

    impl EnvLoader for BrokenLoader {
        fn source(&self) -> String {
            ".env".into()
        }

        fn load(&self) -> Result<HashMap<String, String>> {
            Err(VerifyError::LoaderUnavailable {
                path: ".env".into(),
                message: "permission denied".into(),
            })
        }
    }

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn placeholder_detection() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("your_google_books_key"));
        assert!(is_placeholder("prefix-your_key"));
        assert!(!is_placeholder("sk-abc123"));
        assert!(!is_placeholder("yours"));
    }

    #[test]
    fn credential_rejects_missing() {
        let config = Config::default();

        let err = config.credential(BOOKS_API_KEY).unwrap_err();

        assert_eq!(err.to_string(), "GOOGLE_BOOKS_API_KEY is missing or default.");
    }

    #[test]
    fn credential_rejects_placeholder_and_empty() {
        let config =
            Config::from_pairs([(COMPLETION_API_KEY, "your_openai_key"), (PROJECT_ID, "")]);

        assert!(config.credential(COMPLETION_API_KEY).is_err());
        assert!(config.credential(PROJECT_ID).is_err());
    }

    #[test]
    fn credential_accepts_real_value() {
        let config = Config::from_pairs([(PROJECT_ID, "reading-app-123")]);

        assert_eq!(config.credential(PROJECT_ID).unwrap(), "reading-app-123");
    }

    #[test]
    fn process_env_overrides_file() {
        let mut file = HashMap::new();
        file.insert(BOOKS_API_KEY.to_string(), "from-file".to_string());
        file.insert(PROJECT_ID.to_string(), "file-project".to_string());

        let loaded = Config::load(&FixedLoader(file), env(&[(BOOKS_API_KEY, "from-env")]));

        assert!(loaded.loader_error.is_none());
        assert_eq!(loaded.config.get(BOOKS_API_KEY), Some("from-env"));
        assert_eq!(loaded.config.get(PROJECT_ID), Some("file-project"));
    }

    #[test]
    fn loader_failure_falls_back_to_env() {
        let loaded = Config::load(&BrokenLoader, env(&[(PROJECT_ID, "env-project")]));

        assert!(matches!(
            loaded.loader_error,
            Some(VerifyError::LoaderUnavailable { .. })
        ));
        assert_eq!(loaded.config.get(PROJECT_ID), Some("env-project"));
    }

    #[test]
    fn noop_loader_uses_env_only() {
        let loaded = Config::load(&NoopLoader, env(&[(COMPLETION_API_KEY, "sk-1")]));

        assert_eq!(loaded.config.get(COMPLETION_API_KEY), Some("sk-1"));
    }

    #[test]
    fn secrets_skips_unconfigured() {
        let config =
            Config::from_pairs([(BOOKS_API_KEY, "AIza-1"), (COMPLETION_API_KEY, "your_key")]);

        let secrets: Vec<&str> = config
            .secrets(&[BOOKS_API_KEY, COMPLETION_API_KEY, PROJECT_ID])
            .collect();

        assert_eq!(secrets, vec!["AIza-1"]);
    }
}
