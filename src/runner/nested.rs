//! Nested step invocation: `given`, `when`, `then`, and `behave_as` (§4.6).
//!
//! These are plain functions a handler calls with the [`World`] it was
//! already given, rather than a reentrant call into feature parsing — a
//! short block of step lines is tokenized directly against the registry
//! (§9 Design Notes).

use crate::model::{Keyword, Step};
use crate::parser;
use crate::step::{self, StepResult};
use crate::world::World;

fn transient_step(keyword: Keyword, sentence: &str) -> Step {
    Step {
        keyword,
        keyword_text: keyword.as_str().to_string(),
        sentence: format!("{} {sentence}", keyword.as_str()),
        table: None,
        docstring: None,
        line: 0,
    }
}

fn invoke(step: &Step, world: &mut World, ignore_case: bool) -> StepResult {
    match step::resolve(step, ignore_case) {
        Some(resolved) => (resolved.handler)(step, &resolved.captures, world),
        None => Err(format!("undefined step: {}", step.sentence).into()),
    }
}

/// Constructs and executes a transient `Given` step against `world`.
pub fn given(sentence: &str, world: &mut World, ignore_case: bool) -> StepResult {
    invoke(&transient_step(Keyword::Given, sentence), world, ignore_case)
}

/// Constructs and executes a transient `When` step against `world`.
pub fn when(sentence: &str, world: &mut World, ignore_case: bool) -> StepResult {
    invoke(&transient_step(Keyword::When, sentence), world, ignore_case)
}

/// Constructs and executes a transient `Then` step against `world`.
pub fn then(sentence: &str, world: &mut World, ignore_case: bool) -> StepResult {
    invoke(&transient_step(Keyword::Then, sentence), world, ignore_case)
}

/// Tokenizes `block` as a sequence of step lines and executes each in
/// order, stopping at the first non-pass.
pub fn behave_as(block: &str, world: &mut World, ignore_case: bool) -> StepResult {
    let steps = parser::parse_step_block(block).map_err(|e| e.to_string())?;
    for step in &steps {
        invoke(step, world, ignore_case)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::{Arc, Mutex};

    static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    #[test]
    fn given_resolves_and_executes_inline() {
        let _guard = TEST_LOCK.lock().unwrap();
        step::clear();
        step::register(r"I have (\d+) cucumbers$", Arc::new(|_s, _c, w: &mut World| {
            w.insert("cucumbers", 5_i32);
            Ok(())
        }))
        .unwrap();
        let mut world = World::new();
        given("I have 5 cucumbers", &mut world, true).unwrap();
        assert_eq!(world.get::<i32>("cucumbers"), Some(&5));
        step::clear();
    }

    #[test]
    fn undefined_nested_step_surfaces_as_err() {
        let _guard = TEST_LOCK.lock().unwrap();
        step::clear();
        let mut world = World::new();
        let err = when("nobody registered this", &mut world, true).unwrap_err();
        assert!(err.to_string().contains("undefined step"));
        step::clear();
    }

    #[test]
    fn behave_as_runs_each_line_and_stops_at_first_failure() {
        let _guard = TEST_LOCK.lock().unwrap();
        step::clear();
        step::register(r"a passing step$", Arc::new(|_s, _c, _w: &mut World| Ok(()))).unwrap();
        step::register(
            r"a failing step$",
            Arc::new(|_s, _c, _w: &mut World| Err("nope".into())),
        )
        .unwrap();
        let mut world = World::new();
        let err = behave_as(
            "Given a passing step\nThen a failing step\nThen a passing step\n",
            &mut world,
            true,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "nope");
        step::clear();
    }
}
