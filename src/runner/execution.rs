//! Feature/scenario/step execution: hook ordering, the skip cascade, and
//! panic-to-failure conversion (§4.5, §9 Design Notes).

use crate::error::HandlerFailure;
use crate::hooks::{self, HookContext, Phase};
use crate::model::{Feature, Scenario, Step};
use crate::result::{FeatureResult, RunResult, ScenarioResult, StepOutcome, StepRecord};
use crate::step::{self, StepHandle};
use crate::world::World;

use super::config::RunConfig;

/// Runs features against the global step and hook registries, producing a
/// [`RunResult`]. Owns the [`World`] threaded into every hook and step.
pub struct Runner {
    config: RunConfig,
    world: World,
}

impl Runner {
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self { config, world: World::new() }
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Runs every feature in order, firing `before.all`/`after.all` around
    /// the whole run.
    pub fn run(&mut self, features: &[Feature]) -> RunResult {
        let mut ctx = HookContext::default();
        hooks::fire(Phase::BeforeAll, &mut self.world, &ctx);

        let mut results = Vec::with_capacity(features.len());
        for feature in features {
            let result = self.run_feature(feature);
            let stop = self.config.stops_on_first_failure() && !result.passed();
            results.push(result);
            if stop {
                break;
            }
        }

        let run_result = RunResult { features: results };
        ctx.total_steps = Some(run_result.total_steps());
        hooks::fire(Phase::AfterAll, &mut self.world, &ctx);
        run_result
    }

    fn run_feature(&mut self, feature: &Feature) -> FeatureResult {
        let span = tracing::info_span!("feature", name = %feature.name);
        let _enter = span.enter();

        let mut ctx = HookContext { feature_name: Some(feature.name.clone()), ..Default::default() };
        hooks::fire(Phase::BeforeEachFeature, &mut self.world, &ctx);

        let mut scenarios = Vec::new();
        for (index, scenario) in feature.scenarios.iter().enumerate() {
            if !self.config.scenario_is_selected(index + 1, &scenario.tags) {
                continue;
            }
            let result = self.run_scenario(index, scenario);
            let stop = self.config.stops_on_first_failure() && !result.passed();
            scenarios.push(result);
            if stop {
                break;
            }
        }

        hooks::fire(Phase::AfterEachFeature, &mut self.world, &ctx);
        ctx.feature_name = None;
        FeatureResult { feature_name: feature.name.clone(), scenarios }
    }

    fn run_scenario(&mut self, scenario_index: usize, scenario: &Scenario) -> ScenarioResult {
        let span = tracing::info_span!("scenario", name = %scenario.name);
        let _enter = span.enter();

        let mut ctx = HookContext { scenario_name: Some(scenario.name.clone()), ..Default::default() };
        hooks::fire(Phase::BeforeEachScenario, &mut self.world, &ctx);

        let steps = scenario.solved_steps();
        let mut records = Vec::with_capacity(steps.len());
        let mut blocked = false;

        for (step_index, resolved_step) in steps.iter().enumerate() {
            let handle = StepHandle { scenario_index, step_index };

            if blocked {
                records.push(StepRecord {
                    handle,
                    sentence: resolved_step.sentence.clone(),
                    outcome: StepOutcome::Skipped,
                });
                continue;
            }

            let Some(resolved) = step::resolve(resolved_step, self.config.matches_case_insensitively()) else {
                records.push(StepRecord {
                    handle,
                    sentence: resolved_step.sentence.clone(),
                    outcome: StepOutcome::Undefined,
                });
                blocked = true;
                continue;
            };

            ctx.step_sentence = Some(resolved_step.sentence.clone());
            hooks::fire(Phase::BeforeEachStep, &mut self.world, &ctx);
            let outcome = invoke_handler(resolved_step, &resolved, &mut self.world);
            hooks::fire(Phase::AfterEachStep, &mut self.world, &ctx);

            blocked = matches!(outcome, StepOutcome::Failed(_));
            records.push(StepRecord { handle, sentence: resolved_step.sentence.clone(), outcome });
        }

        hooks::fire(Phase::AfterEachScenario, &mut self.world, &ctx);
        ScenarioResult { scenario_name: scenario.name.clone(), steps: records }
    }
}

fn invoke_handler(step: &Step, resolved: &step::Resolved, world: &mut World) -> StepOutcome {
    let handler = resolved.handler.clone();
    let captures = resolved.captures.clone();
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handler(step, &captures, world)));
    match outcome {
        Ok(Ok(())) => StepOutcome::Passed,
        Ok(Err(err)) => StepOutcome::Failed(HandlerFailure::from_error(err, "error")),
        Err(payload) => StepOutcome::Failed(HandlerFailure::from_panic(payload.as_ref())),
    }
}
