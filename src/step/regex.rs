//! A `Regex` newtype that can live in an equality/hash-keyed collection by
//! its source pattern (§3 "Registry entry": compiled pattern).

use std::hash::{Hash, Hasher};
use std::ops::Deref;

use regex::Regex;

#[derive(Clone, Debug)]
pub struct HashableRegex(pub Regex);

impl Deref for HashableRegex {
    type Target = Regex;

    fn deref(&self) -> &Regex {
        &self.0
    }
}

impl PartialEq for HashableRegex {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl Eq for HashableRegex {}

impl Hash for HashableRegex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.as_str().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_pattern_text() {
        let a = HashableRegex(Regex::new("abc").unwrap());
        let b = HashableRegex(Regex::new("abc").unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn deref_exposes_regex_methods() {
        let re = HashableRegex(Regex::new("^a+$").unwrap());
        assert!(re.is_match("aaa"));
    }
}
