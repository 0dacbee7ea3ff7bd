//! The process-wide hook registry: eight lifecycle channels fired in
//! registration order around a run, a feature, a scenario, or a step (§3,
//! §4.5).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use crate::world::World;

/// A lifecycle channel a hook can be registered against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    BeforeAll,
    AfterAll,
    BeforeEachFeature,
    AfterEachFeature,
    BeforeEachScenario,
    AfterEachScenario,
    BeforeEachStep,
    AfterEachStep,
}

/// Context handed to a firing hook. Fields are populated according to the
/// phase: feature name for feature-scoped phases, scenario name for
/// scenario-scoped and step-scoped phases, step sentence for step-scoped
/// phases, total step count only for `after.all`.
#[derive(Clone, Debug, Default)]
pub struct HookContext {
    pub feature_name: Option<String>,
    pub scenario_name: Option<String>,
    pub step_sentence: Option<String>,
    pub total_steps: Option<usize>,
}

/// A registered hook callback.
pub type HookCallback = Arc<dyn Fn(&mut World, &HookContext) + Send + Sync>;

#[derive(Default)]
struct HookStore {
    channels: HashMap<Phase, Vec<HookCallback>>,
}

static HOOKS: Lazy<Mutex<HookStore>> = Lazy::new(|| Mutex::new(HookStore::default()));

/// Registers `callback` on `phase`, appended after any hooks already
/// registered there.
pub fn register(phase: Phase, callback: HookCallback) {
    let mut store = HOOKS.lock().unwrap();
    store.channels.entry(phase).or_default().push(callback);
}

/// Fires every hook registered on `phase`, in registration order.
pub fn fire(phase: Phase, world: &mut World, ctx: &HookContext) {
    let callbacks = {
        let store = HOOKS.lock().unwrap();
        store.channels.get(&phase).cloned().unwrap_or_default()
    };
    for callback in callbacks {
        callback(world, ctx);
    }
}

/// Removes every registered hook from every channel.
pub fn clear() {
    HOOKS.lock().unwrap().channels.clear();
}
