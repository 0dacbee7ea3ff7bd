//! Captured regex groups handed to a step handler (§4.4).

use std::collections::HashMap;

/// The capture-extraction policy result for one resolved step: named groups
/// when the pattern declares any, otherwise positional groups in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Captures {
    Named(HashMap<String, String>),
    Positional(Vec<String>),
}

impl Captures {
    /// Returns a named capture by key, or `None` if this is a positional
    /// match or the key wasn't present.
    #[must_use]
    pub fn named(&self, key: &str) -> Option<&str> {
        match self {
            Self::Named(map) => map.get(key).map(String::as_str),
            Self::Positional(_) => None,
        }
    }

    /// Returns a positional capture by index, or `None` if this is a named
    /// match or the index is out of range.
    #[must_use]
    pub fn positional(&self, index: usize) -> Option<&str> {
        match self {
            Self::Positional(values) => values.get(index).map(String::as_str),
            Self::Named(_) => None,
        }
    }
}
