//! Errors raised while parsing feature text (§4.1, §7).

use std::fmt;
use std::path::PathBuf;

use derive_more::Error;

/// A malformed feature file. Aborts the load of the feature it came from.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based line the offending text was found on.
    pub line: u32,
    /// What went wrong.
    pub reason: String,
    /// The source path, if the feature was loaded from a file.
    pub path: Option<PathBuf>,
}

impl SyntaxError {
    /// Creates a new [`SyntaxError`] without a known source path.
    #[must_use]
    pub fn new(line: u32, reason: impl Into<String>) -> Self {
        Self { line, reason: reason.into(), path: None }
    }

    /// Attaches a source path to this error.
    #[must_use]
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .path
            .as_deref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "<input>".to_string());
        write!(f, "syntax error at {path}:{}: {}", self.line, self.reason)
    }
}
