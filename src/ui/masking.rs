//! Reporter adapter that scrubs secrets.

use crate::secrets::SecretMasker;

use super::{Reporter, StatusKind};

/// Forwards to an inner reporter after masking credential values.
pub struct MaskingReporter<'a> {
    inner: &'a mut dyn Reporter,
    masker: &'a SecretMasker,
}

impl<'a> MaskingReporter<'a> {
    /// Wrap `inner`, masking with `masker`.
    pub fn new(inner: &'a mut dyn Reporter, masker: &'a SecretMasker) -> Self {
        Self { inner, masker }
    }
}

impl Reporter for MaskingReporter<'_> {
    fn line(&mut self, kind: StatusKind, msg: &str) {
        self.inner.line(kind, &self.masker.mask(msg));
    }

    fn header(&mut self, title: &str) {
        self.inner.header(title);
    }

    fn blank(&mut self) {
        self.inner.blank();
    }
}
