//! The process-wide attribute bag shared between hooks and steps (§3),
//! modeled here as a typed map owned explicitly by the run context rather
//! than a hidden global singleton (§9 Design Notes).

use std::any::Any;
use std::collections::HashMap;

/// A named bag of type-erased attributes. Cleared explicitly between runs;
/// carries no synchronization of its own because execution is strictly
/// sequential (§5).
#[derive(Default)]
pub struct World {
    attributes: HashMap<String, Box<dyn Any + Send>>,
}

impl World {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`, replacing any prior value there.
    pub fn insert<T: Any + Send>(&mut self, name: impl Into<String>, value: T) {
        self.attributes.insert(name.into(), Box::new(value));
    }

    /// Returns `name`'s value if present and of type `T`.
    #[must_use]
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.attributes.get(name).and_then(|v| v.downcast_ref::<T>())
    }

    /// Returns a mutable reference to `name`'s value if present and of type
    /// `T`.
    pub fn get_mut<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        self.attributes.get_mut(name).and_then(|v| v.downcast_mut::<T>())
    }

    /// Removes `name`, returning whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.attributes.remove(name).is_some()
    }

    /// Returns whether `name` has a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Empties the bag.
    pub fn clear(&mut self) {
        self.attributes.clear();
    }
}
