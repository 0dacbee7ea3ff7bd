//! Immutable records summarizing what happened per step, scenario, and
//! feature (§3, §6, §8).

use crate::error::HandlerFailure;
use crate::step::StepHandle;

/// A step's terminal execution state (§4.5).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Passed,
    Failed(HandlerFailure),
    Undefined,
    Skipped,
}

/// One step's sentence, position, and outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRecord {
    pub handle: StepHandle,
    pub sentence: String,
    pub outcome: StepOutcome,
}

impl StepRecord {
    /// The captured failure, if this step failed.
    #[must_use]
    pub fn why(&self) -> Option<&HandlerFailure> {
        match &self.outcome {
            StepOutcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// The per-scenario result: every step's record, plus the derived counts and
/// views named in §6.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub steps: Vec<StepRecord>,
}

impl ScenarioResult {
    #[must_use]
    pub fn steps_passed(&self) -> Vec<&StepRecord> {
        self.steps.iter().filter(|s| matches!(s.outcome, StepOutcome::Passed)).collect()
    }

    #[must_use]
    pub fn steps_failed(&self) -> Vec<&StepRecord> {
        self.steps.iter().filter(|s| matches!(s.outcome, StepOutcome::Failed(_))).collect()
    }

    #[must_use]
    pub fn steps_undefined(&self) -> Vec<&StepRecord> {
        self.steps.iter().filter(|s| matches!(s.outcome, StepOutcome::Undefined)).collect()
    }

    #[must_use]
    pub fn steps_skipped(&self) -> Vec<&StepRecord> {
        self.steps.iter().filter(|s| matches!(s.outcome, StepOutcome::Skipped)).collect()
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// `true` iff this scenario had zero failed and zero undefined steps
    /// (§6 `feature_result.passed`, applied at scenario scope).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.steps_failed().is_empty() && self.steps_undefined().is_empty()
    }
}

/// The per-feature result: every scenario's result, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureResult {
    pub feature_name: String,
    pub scenarios: Vec<ScenarioResult>,
}

impl FeatureResult {
    /// `true` iff every scenario passed (§6).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.scenarios.iter().all(ScenarioResult::passed)
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.scenarios.iter().map(ScenarioResult::total_steps).sum()
    }
}

/// The result of an entire run: every feature's result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunResult {
    pub features: Vec<FeatureResult>,
}

impl RunResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.features.iter().all(FeatureResult::passed)
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.features.iter().map(FeatureResult::total_steps).sum()
    }
}
