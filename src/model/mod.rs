//! The parsed representation of a feature file: [`Feature`] → [`Scenario`] →
//! [`Step`], plus the tables and tags they carry.

pub mod feature;
pub mod scenario;
pub mod step;
pub mod table;
pub mod tag;

pub use feature::Feature;
pub use scenario::{EvaluatedOutline, Scenario};
pub use step::{Keyword, Step};
pub use table::{ExampleBlock, StepTable};

use std::collections::HashMap;

/// Replaces every `<name>` occurrence in `text` where `name` is a key of
/// `values`, leaving unrecognized placeholders untouched. Substitution is
/// purely textual; no escaping mechanism is defined (§4.2).
pub(crate) fn substitute_placeholders(text: &str, values: &HashMap<String, String>) -> String {
    if values.is_empty() || !text.contains('<') {
        return text.to_owned();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        if let Some(close) = after_open.find('>') {
            let name = &after_open[..close];
            if let Some(value) = values.get(name) {
                out.push_str(value);
            } else {
                out.push('<');
                out.push_str(name);
                out.push('>');
            }
            rest = &after_open[close + 1..];
        } else {
            out.push('<');
            rest = after_open;
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_placeholder() {
        let mut values = HashMap::new();
        values.insert("button".to_string(), "add".to_string());
        assert_eq!(
            substitute_placeholders("When I press <button>", &values),
            "When I press add"
        );
    }

    #[test]
    fn leaves_unknown_placeholder_literal() {
        let values = HashMap::new();
        assert_eq!(
            substitute_placeholders("When I press <button>", &values),
            "When I press <button>"
        );
    }

    #[test]
    fn handles_unterminated_angle_bracket() {
        let values = HashMap::new();
        assert_eq!(substitute_placeholders("a < b", &values), "a < b");
    }
}
