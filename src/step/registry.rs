//! The process-wide, clearable step registry (§4.3).
//!
//! Entries are held behind a single `Mutex` guarding a `once_cell`-initialized
//! singleton (§5): registration happens during test setup and is not
//! expected to race with resolution, but the collection must be `Sync` for
//! use across parallel `#[test]` threads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::error::StepLoadingError;
use crate::model::Step;

use super::context::Captures;
use super::location::Location;

/// The error type a handler may signal on failure. Converted into a
/// [`crate::error::HandlerFailure`] by the runner, never propagated as a
/// Rust `Err` out of a scenario run (§7).
pub type StepResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// A registered step handler: the step being executed, its extracted
/// captures, and the shared [`World`](crate::world::World).
pub type Handler = Arc<dyn Fn(&Step, &Captures, &mut crate::world::World) -> StepResult + Send + Sync>;

/// The outcome of successfully resolving a step sentence against the
/// registry.
#[derive(Clone)]
pub struct Resolved {
    pub handler: Handler,
    pub captures: Captures,
    pub location: Location,
}

struct Entry {
    sensitive: Regex,
    insensitive: Regex,
    handler: Handler,
    location: Location,
}

#[derive(Default)]
struct Registry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Registry {
    fn insert(&mut self, pattern: String, entry: Entry) {
        if let Some(&i) = self.index.get(&pattern) {
            self.entries[i] = entry;
        } else {
            self.index.insert(pattern, self.entries.len());
            self.entries.push(entry);
        }
    }

    fn resolve(&self, sentence: &str, ignore_case: bool) -> Option<Resolved> {
        for entry in &self.entries {
            let re = if ignore_case { &entry.insensitive } else { &entry.sensitive };
            if let Some(caps) = re.captures(sentence) {
                return Some(Resolved {
                    handler: Arc::clone(&entry.handler),
                    captures: extract_captures(&entry.sensitive, &caps),
                    location: entry.location.clone(),
                });
            }
        }
        None
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

fn extract_captures(re: &Regex, caps: &regex::Captures<'_>) -> Captures {
    let names: Vec<&str> = re.capture_names().flatten().collect();
    if names.is_empty() {
        let positional = caps
            .iter()
            .skip(1)
            .filter_map(|m| m.map(|m| m.as_str().to_string()))
            .collect();
        Captures::Positional(positional)
    } else {
        let mut map = HashMap::new();
        for name in names {
            if let Some(m) = caps.name(name) {
                map.insert(name.to_string(), m.as_str().to_string());
            }
        }
        Captures::Named(map)
    }
}

static REGISTRY: Lazy<Mutex<Registry>> = Lazy::new(|| Mutex::new(Registry::default()));

/// Compiles `pattern` and stores `handler` against it. A pattern that fails
/// to compile raises a [`StepLoadingError`]; a pattern already registered is
/// overwritten in place, preserving its original resolution order.
#[track_caller]
pub fn register(pattern: &str, handler: Handler) -> Result<(), StepLoadingError> {
    let location = Location::caller();
    let sensitive = Regex::new(pattern).map_err(|e| StepLoadingError {
        pattern: pattern.to_string(),
        reason: e.to_string(),
        location: Some(location.clone()),
    })?;
    let insensitive = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| StepLoadingError {
            pattern: pattern.to_string(),
            reason: e.to_string(),
            location: Some(location.clone()),
        })?;
    let entry = Entry { sensitive, insensitive, handler, location };
    REGISTRY.lock().unwrap().insert(pattern.to_string(), entry);
    Ok(())
}

/// Scans registered patterns in registration order and returns the first
/// match against `sentence`.
#[must_use]
pub fn resolve(sentence: &str, ignore_case: bool) -> Option<Resolved> {
    REGISTRY.lock().unwrap().resolve(sentence, ignore_case)
}

/// Removes every registered entry, and every registered hook (§4.3).
pub fn clear() {
    REGISTRY.lock().unwrap().clear();
    crate::hooks::clear();
}

/// The number of registered entries, mostly useful in tests.
#[must_use]
pub fn len() -> usize {
    REGISTRY.lock().unwrap().entries.len()
}
