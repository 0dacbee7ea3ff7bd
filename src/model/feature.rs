//! The top-level unit of a feature file.

use std::path::PathBuf;

use super::scenario::Scenario;

/// A parsed `.feature` file: a name, an optional description, and an
/// ordered sequence of scenarios.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    /// The feature's name.
    pub name: String,
    /// The free-text description between the `Feature:` header and the
    /// first scenario, trimmed.
    pub description: String,
    /// Tags declared directly above `Feature:` (without `@`).
    pub tags: Vec<String>,
    /// The feature's scenarios, in source order.
    pub scenarios: Vec<Scenario>,
    /// The source this feature was parsed from, if known.
    pub path: Option<PathBuf>,
    /// 1-based source line of the `Feature:` keyword.
    pub line: u32,
}

impl Feature {
    /// Returns `true` if `name` is a tag on this feature.
    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }
}
