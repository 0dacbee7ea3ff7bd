//! Source locations captured at step-registration call sites (§3 "Registry
//! entry").

use std::fmt;

/// Where a step handler was registered, for diagnostics attached to
/// [`StepLoadingError`](crate::error::StepLoadingError) and registry
/// entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Captures the caller's location. Callers must be `#[track_caller]`
    /// themselves for this to point at their own caller rather than at
    /// `register`'s internals.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self { file: loc.file(), line: loc.line(), column: loc.column() }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn here() -> Location {
        Location::caller()
    }

    #[test]
    fn caller_points_at_this_file() {
        let loc = here();
        assert!(loc.file.ends_with("location.rs"));
    }

    #[test]
    fn display_includes_file_line_column() {
        let loc = Location { file: "steps.rs", line: 12, column: 5 };
        assert_eq!(loc.to_string(), "steps.rs:12:5");
    }
}
