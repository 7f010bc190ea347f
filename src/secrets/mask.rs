//! Masking of credential values in console diagnostics.
//!
//! HTTP client errors embed the request URL, and the books key travels as a
//! query parameter, so error text must be scrubbed before it is printed. The
//! URL shows the key percent-encoded, so both spellings are masked.

/// Values shorter than this are not masked; replacing them would rewrite
/// ordinary text such as status codes and addresses.
pub const MIN_SECRET_LEN: usize = 6;

/// Replaces registered secret values with a mask.
///
/// # Example
///
/// ```
/// use verify_links::secrets::SecretMasker;
///
/// let mut masker = SecretMasker::new();
/// masker.add_secret("AIza-secret");
///
/// let output = masker.mask("GET /volumes?key=AIza-secret failed");
/// assert_eq!(output, "GET /volumes?key=[REDACTED] failed");
/// ```
#[derive(Debug, Clone)]
pub struct SecretMasker {
    secrets: Vec<String>,
    mask: String,
}

impl SecretMasker {
    /// Create a masker with the default `[REDACTED]` mask.
    pub fn new() -> Self {
        Self::with_mask("[REDACTED]")
    }

    /// Create a masker with a custom mask string.
    pub fn with_mask(mask: impl Into<String>) -> Self {
        Self {
            secrets: Vec::new(),
            mask: mask.into(),
        }
    }

    /// Register a secret value and its query-encoded form.
    ///
    /// Values shorter than [`MIN_SECRET_LEN`] are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value.chars().count() < MIN_SECRET_LEN {
            return;
        }

        let encoded = query_encoded(&value);
        for variant in std::iter::once(value).chain(encoded) {
            if !self.secrets.contains(&variant) {
                self.secrets.push(variant);
            }
        }
        // Longest first, so a secret containing another is masked whole.
        self.secrets.sort_by_key(|s| std::cmp::Reverse(s.len()));
    }

    /// Register multiple secret values.
    pub fn add_secrets(&mut self, values: impl IntoIterator<Item = impl Into<String>>) {
        for value in values {
            self.add_secret(value);
        }
    }

    /// Mask every registered secret in `input`.
    pub fn mask(&self, input: &str) -> String {
        self.secrets
            .iter()
            .fold(input.to_string(), |acc, secret| acc.replace(secret, &self.mask))
    }

    /// Number of distinct strings masked, encoded forms included.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}

/// `value` as it appears in a URL query string, if that differs from `value`.
fn query_encoded(value: &str) -> Option<String> {
    let mut url = reqwest::Url::parse("http://localhost/").ok()?;
    url.query_pairs_mut().append_pair("k", value);
    let encoded = url.query()?.strip_prefix("k=")?;
    (encoded != value).then(|| encoded.to_string())
}

impl Default for SecretMasker {
    fn default() -> Self {
        Self::new()
    }
}
