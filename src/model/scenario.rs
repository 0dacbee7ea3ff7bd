//! A named, ordered list of steps, optionally parameterized by example rows.

use std::collections::HashMap;

use super::step::Step;
use super::table::ExampleBlock;

/// A `Scenario:` or `Scenario Outline:` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    /// The scenario's name.
    pub name: String,
    /// Tags declared directly above this scenario (without `@`).
    pub own_tags: Vec<String>,
    /// `own_tags` unioned with the owning [`Feature`](super::feature::Feature)'s
    /// tags, satisfying the `S.tags ⊇ F.tags` invariant.
    pub tags: Vec<String>,
    /// The literal, as-written steps (templates, if this is an outline).
    pub steps: Vec<Step>,
    /// Zero or more `Examples:` blocks, concatenated in source order.
    pub examples: Vec<ExampleBlock>,
    /// `true` iff `examples` is non-empty.
    pub is_outline: bool,
    /// The scenario's source text, as written.
    pub source: String,
    /// 1-based source line of the `Scenario:`/`Scenario Outline:` keyword.
    pub line: u32,
}

/// One materialized example row: its placeholder values and the concrete
/// [`Step`]s produced by substituting them into the scenario's templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluatedOutline {
    /// The row's placeholder values, keyed by example-header name.
    pub row: HashMap<String, String>,
    /// The steps produced by substituting `row` into every template step.
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Returns `true` if `name` is a tag present on this scenario (after
    /// inheritance).
    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }

    /// The row mappings contributed by every `Examples:` block, in source
    /// order. Empty for a non-outline scenario.
    #[must_use]
    pub fn outlines(&self) -> Vec<HashMap<String, String>> {
        self.examples
            .iter()
            .flat_map(ExampleBlock::rows_as_maps)
            .collect()
    }

    /// The flat sequence of concrete steps this scenario runs.
    ///
    /// For a non-outline scenario this is structurally identical to
    /// `steps` (outline expansion is a no-op). For an outline, its length
    /// is `steps.len() * outlines().len()`.
    #[must_use]
    pub fn solved_steps(&self) -> Vec<Step> {
        if !self.is_outline {
            return self.steps.clone();
        }
        self.outlines()
            .iter()
            .flat_map(|row| self.steps.iter().map(move |step| step.substitute(row)))
            .collect()
    }

    /// Pairs each example row with its materialized step list.
    #[must_use]
    pub fn evaluated(&self) -> Vec<EvaluatedOutline> {
        self.outlines()
            .into_iter()
            .map(|row| {
                let steps = self.steps.iter().map(|step| step.substitute(&row)).collect();
                EvaluatedOutline { row, steps }
            })
            .collect()
    }
}
