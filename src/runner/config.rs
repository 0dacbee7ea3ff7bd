//! The builder-style configuration surface a caller assembles before
//! invoking the runner (§3 `RunConfig`).

use std::collections::HashSet;

use super::tags::{self, TagExpr};

/// Case sensitivity, tag filters, scenario-index filters, and fail-fast —
/// the ambient knobs the runner reads before a run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    ignore_case: bool,
    tag_filters: Vec<TagExpr>,
    scenario_indices: Option<HashSet<usize>>,
    fail_fast: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { ignore_case: true, tag_filters: Vec::new(), scenario_indices: None, fail_fast: false }
    }
}

impl RunConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether sentence matching ignores case (default `true`, §4.3).
    #[must_use]
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Appends a tag-filter expression (`t`, `-t`, `~t`, or `-~t`, §4.5).
    #[must_use]
    pub fn tag_filter(mut self, expr: impl AsRef<str>) -> Self {
        self.tag_filters.push(TagExpr::parse(expr.as_ref()));
        self
    }

    /// Restricts the run to these 1-based scenario positions.
    #[must_use]
    pub fn scenario_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.scenario_indices = Some(indices.into_iter().collect());
        self
    }

    /// Stops dispatching further scenarios once one finishes with a failed
    /// or undefined step (off by default, §3).
    #[must_use]
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    #[must_use]
    pub(crate) fn matches_case_insensitively(&self) -> bool {
        self.ignore_case
    }

    #[must_use]
    pub(crate) fn stops_on_first_failure(&self) -> bool {
        self.fail_fast
    }

    #[must_use]
    pub(crate) fn scenario_is_selected(&self, one_based_index: usize, tags: &[String]) -> bool {
        if let Some(indices) = &self.scenario_indices {
            if !indices.contains(&one_based_index) {
                return false;
            }
        }
        if self.tag_filters.is_empty() {
            return true;
        }
        tags::matches(tags, &self.tag_filters)
    }
}
