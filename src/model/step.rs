//! A single imperative line within a [`Scenario`](super::scenario::Scenario).

use super::table::StepTable;

/// The keyword a [`Step`] was written with.
///
/// Case is preserved for display but the variant carries no semantic weight
/// during matching — `And`/`But` resolve exactly like `Given`/`When`/`Then`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Given,
    When,
    Then,
    And,
    But,
}

impl Keyword {
    /// Recognizes a keyword token case-insensitively.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "given" => Some(Self::Given),
            "when" => Some(Self::When),
            "then" => Some(Self::Then),
            "and" => Some(Self::And),
            "but" => Some(Self::But),
            _ => None,
        }
    }

    /// The canonical display spelling of this keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }
}

/// A single `Given`/`When`/`Then`/`And`/`But` line, optionally carrying a
/// data table and/or a multiline (docstring) body.
///
/// `Step` has no back-reference field to its owning [`Scenario`]: per
/// `DESIGN.md`, ownership follows an arena/index model where `Scenario` owns
/// its `Step`s directly and callers needing "the scenario a step belongs to"
/// hold both together (see [`crate::step::StepHandle`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Keyword as written, with original case (`keyword_text`) plus the
    /// normalized variant used for recognition.
    pub keyword: Keyword,
    /// The keyword exactly as it appeared in the source, for display.
    pub keyword_text: String,
    /// The full sentence, including the keyword, with any trailing inline
    /// comment already stripped.
    pub sentence: String,
    /// An optional pipe-delimited data table.
    pub table: Option<StepTable>,
    /// An optional triple-quoted multiline body, dedented.
    pub docstring: Option<String>,
    /// 1-based source line.
    pub line: u32,
}

impl Step {
    /// The sentence's text with the keyword stripped, for display purposes.
    /// Resolution matches against the full `sentence` (§4.4), not this.
    #[must_use]
    pub fn text(&self) -> &str {
        self.sentence
            .strip_prefix(self.keyword_text.as_str())
            .map(str::trim_start)
            .unwrap_or(&self.sentence)
    }

    /// Returns a copy of this step with every `<name>` placeholder in its
    /// sentence, table cells, and docstring substituted from `row`.
    #[must_use]
    pub(crate) fn substitute(&self, row: &std::collections::HashMap<String, String>) -> Self {
        Self {
            keyword: self.keyword,
            keyword_text: self.keyword_text.clone(),
            sentence: super::substitute_placeholders(&self.sentence, row),
            table: self.table.as_ref().map(|t| t.substitute(row)),
            docstring: self
                .docstring
                .as_ref()
                .map(|d| super::substitute_placeholders(d, row)),
            line: self.line,
        }
    }
}
