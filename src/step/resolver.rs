//! Matches a parsed [`Step`] against the global registry (§4.4).
//!
//! Kept distinct from [`registry`](super::registry) so that resolution
//! policy (what text a step is matched against) is separate from storage
//! and lookup mechanics.

use crate::model::Step;

use super::registry::{self, Resolved};

/// Resolves `step` against the registry, matching on its full sentence
/// (keyword included), unanchored, so a pattern that itself names a keyword
/// (e.g. `When a (?P<what>\w+) at "(?P<city>.*)"`) can match. `None` means
/// the step is undefined.
#[must_use]
pub fn resolve(step: &Step, ignore_case: bool) -> Option<Resolved> {
    registry::resolve(&step.sentence, ignore_case)
}
