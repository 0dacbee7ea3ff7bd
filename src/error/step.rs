//! Errors raised by step registration and execution (§4.3, §4.5, §7).

use std::fmt;

use derive_more::Error;

use crate::step::Location;

/// A handler was registered with a pattern that failed to compile as a
/// [`regex::Regex`]. Raised at registration time; the handler never enters
/// the registry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub struct StepLoadingError {
    /// The offending pattern text.
    pub pattern: String,
    /// The compiler's error message.
    pub reason: String,
    /// Where the registration call was made, for diagnostics.
    pub location: Option<Location>,
}

impl fmt::Display for StepLoadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to compile step pattern `{}`: {}",
            self.pattern, self.reason
        )?;
        if let Some(loc) = &self.location {
            write!(f, " (registered at {loc})")?;
        }
        Ok(())
    }
}

/// The captured record of a step handler signaling failure, whether by
/// returning an error or by panicking. Never propagated as a Rust `Err` out
/// of the runner — it's captured into the step's result (§4.5, §7).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerFailure {
    /// The failure's message.
    pub cause: String,
    /// A short tag classifying the failure (e.g. `"assertion"`, `"panic"`,
    /// `"error"`, or the name of a caller-supplied error kind).
    pub kind: String,
    /// A best-effort, opaque textual description of where the failure
    /// originated. Never exposed as a structured type (§9).
    pub traceback: String,
}

impl HandlerFailure {
    /// Builds a [`HandlerFailure`] from an ordinary returned error.
    #[must_use]
    pub fn from_error(cause: impl fmt::Display, kind: impl Into<String>) -> Self {
        Self {
            cause: cause.to_string(),
            kind: kind.into(),
            traceback: String::new(),
        }
    }

    /// Builds a [`HandlerFailure`] from a caught panic payload.
    #[must_use]
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let cause = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "step handler panicked".to_string()
        };
        Self { cause, kind: "panic".to_string(), traceback: String::new() }
    }

    /// Attaches a textual traceback, replacing any previous one.
    #[must_use]
    pub fn with_traceback(mut self, traceback: impl Into<String>) -> Self {
        self.traceback = traceback.into();
        self
    }
}

impl fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl std::error::Error for HandlerFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_loading_error_display_includes_pattern_and_reason() {
        let err = StepLoadingError {
            pattern: "invalid step regex(.*".to_string(),
            reason: "unclosed group".to_string(),
            location: None,
        };
        assert!(err.to_string().contains("invalid step regex(.*"));
        assert!(err.to_string().contains("unclosed group"));
    }

    #[test]
    fn handler_failure_from_panic_extracts_str_payload() {
        let result = std::panic::catch_unwind(|| panic!("boom"));
        let payload = result.unwrap_err();
        let failure = HandlerFailure::from_panic(payload.as_ref());
        assert_eq!(failure.cause, "boom");
        assert_eq!(failure.kind, "panic");
    }

    #[test]
    fn handler_failure_from_error_preserves_message() {
        let failure = HandlerFailure::from_error("expected 5 got 3", "assertion");
        assert_eq!(failure.cause, "expected 5 got 3");
        assert_eq!(failure.kind, "assertion");
    }
}
