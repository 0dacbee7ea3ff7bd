//! The feature-text lexer/parser (§4.1).
//!
//! Feature files are scanned line by line rather than through a formal
//! grammar: each physical line is classified by the precedence order in
//! §4.1 before being folded into the growing [`Feature`]/[`Scenario`]/[`Step`]
//! tree. This mirrors how the system being ported actually recognizes
//! Gherkin text, and keeps the quote-aware comment stripping and
//! indentation-sensitive multiline bodies straightforward to reason about
//! without a separate grammar file.

mod comments;
mod docstring;
mod tables;

use std::path::PathBuf;

use crate::error::SyntaxError;
use crate::model::tag::{is_tag_only_line, parse_tag_line};
use crate::model::{ExampleBlock, Feature, Keyword, Scenario, Step, StepTable};

use comments::{is_comment_only, strip_trailing_comment};
use docstring::{dedent_line, is_delimiter, leading_indent};
use tables::{is_table_row, split_row};

/// Parses a whole feature file.
pub fn parse(source: &str) -> Result<Feature, SyntaxError> {
    parse_with_path(source, None)
}

/// Parses a whole feature file, attaching `path` to any [`SyntaxError`] and
/// to the returned [`Feature`] for later diagnostics.
pub fn parse_with_path(source: &str, path: Option<PathBuf>) -> Result<Feature, SyntaxError> {
    let mut p = Cursor::new(source, path);
    p.parse_feature()
}

/// Tokenizes and parses a short block of step lines directly, without a
/// `Feature:`/`Scenario:` wrapper. Used by nested invocation (`behave_as`,
/// `given`, `when`, `then`, §4.6) so that it doesn't reenter parsing of a
/// whole feature (§9).
pub fn parse_step_block(source: &str) -> Result<Vec<Step>, SyntaxError> {
    let mut p = Cursor::new(source, None);
    let mut steps = Vec::new();
    loop {
        p.skip_noise();
        let Some(line) = p.peek() else { break };
        if is_table_row(line) {
            let kind = if steps.is_empty() { "before any step" } else { "without a preceding step" };
            return Err(p.err(p.line_no(), format!("a table may not appear {kind}")));
        }
        if is_delimiter(line) {
            return Err(p.err(p.line_no(), "a multiline string must immediately follow the step it belongs to"));
        }
        steps.push(p.parse_step()?);
    }
    Ok(steps)
}

/// A cursor over a feature file's physical lines.
struct Cursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    path: Option<PathBuf>,
}

fn strip_ci_prefix<'s>(s: &'s str, prefix: &str) -> Option<&'s str> {
    (s.len() >= prefix.len() && s[..prefix.len()].eq_ignore_ascii_case(prefix))
        .then(|| &s[prefix.len()..])
}

fn starts_with_ci(s: &str, prefix: &str) -> bool {
    strip_ci_prefix(s, prefix).is_some()
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str, path: Option<PathBuf>) -> Self {
        Self { lines: source.lines().collect(), pos: 0, path }
    }

    fn err(&self, line: u32, reason: impl Into<String>) -> SyntaxError {
        let e = SyntaxError::new(line, reason);
        match &self.path {
            Some(p) => e.with_path(p.clone()),
            None => e,
        }
    }

    fn line_no(&self) -> u32 {
        (self.pos + 1) as u32
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    /// Skips blank lines and whole-line comments.
    fn skip_noise(&mut self) {
        while let Some(line) = self.peek() {
            if line.trim().is_empty() || is_comment_only(line) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Looks ahead past blank/comment/tag-only lines to see whether the
    /// next substantive line is a `Scenario:`/`Scenario Outline:` header.
    fn at_scenario_start(&self) -> bool {
        let mut i = self.pos;
        while let Some(line) = self.lines.get(i) {
            let trimmed = line.trim();
            if trimmed.is_empty() || is_comment_only(line) || is_tag_only_line(line) {
                i += 1;
                continue;
            }
            return starts_with_ci(trimmed, "scenario outline:") || starts_with_ci(trimmed, "scenario:");
        }
        false
    }

    fn parse_feature(&mut self) -> Result<Feature, SyntaxError> {
        let mut tags = Vec::new();
        loop {
            self.skip_noise();
            match self.peek() {
                None => return Err(self.err(self.line_no(), "expected a 'Feature:' header")),
                Some(line) if is_tag_only_line(line) => {
                    tags.extend(parse_tag_line(line));
                    self.pos += 1;
                }
                Some(_) => break,
            }
        }

        let header_line_no = self.line_no();
        let header_line = self.advance().unwrap_or_default();
        let name = strip_ci_prefix(header_line.trim(), "feature:")
            .map(|rest| rest.trim().to_string())
            .ok_or_else(|| {
                self.err(
                    header_line_no,
                    format!("expected a 'Feature:' header, found `{}`", header_line.trim()),
                )
            })?;

        let mut desc_lines: Vec<String> = Vec::new();
        while self.peek().is_some() && !self.at_scenario_start() {
            let line = self.advance().unwrap();
            if is_comment_only(line) {
                continue;
            }
            desc_lines.push(strip_trailing_comment(line).to_string());
        }
        let description = desc_lines.join("\n").trim().to_string();

        let mut scenarios = Vec::new();
        loop {
            self.skip_noise();
            if self.peek().is_none() {
                break;
            }
            let mut own_tags = Vec::new();
            while let Some(line) = self.peek() {
                if is_tag_only_line(line) {
                    own_tags.extend(parse_tag_line(line));
                    self.pos += 1;
                    self.skip_noise();
                } else {
                    break;
                }
            }
            scenarios.push(self.parse_scenario(own_tags, &tags)?);
        }

        Ok(Feature {
            name,
            description,
            tags,
            scenarios,
            path: self.path.clone(),
            line: header_line_no,
        })
    }

    fn parse_scenario(
        &mut self,
        own_tags: Vec<String>,
        feature_tags: &[String],
    ) -> Result<Scenario, SyntaxError> {
        let start_idx = self.pos;
        let header_line_no = self.line_no();
        let header_line = self
            .advance()
            .ok_or_else(|| self.err(header_line_no, "expected a 'Scenario:' header"))?;
        let trimmed = header_line.trim();
        let (is_outline, name) = if let Some(rest) = strip_ci_prefix(trimmed, "scenario outline:") {
            (true, rest.trim().to_string())
        } else if let Some(rest) = strip_ci_prefix(trimmed, "scenario:") {
            (false, rest.trim().to_string())
        } else {
            return Err(self.err(
                header_line_no,
                format!("expected a 'Scenario:' or 'Scenario Outline:' header, found `{trimmed}`"),
            ));
        };

        let mut steps = Vec::new();
        let mut examples = Vec::new();

        loop {
            self.skip_noise();
            let Some(line) = self.peek() else { break };

            if is_tag_only_line(line) && self.at_scenario_start() {
                break;
            }
            let head = line.trim();
            if starts_with_ci(head, "scenario outline:") || starts_with_ci(head, "scenario:") {
                break;
            }
            if starts_with_ci(head, "examples:") {
                if !is_outline {
                    return Err(self.err(self.line_no(), "'Examples:' outside a Scenario Outline"));
                }
                examples.push(self.parse_examples_block()?);
                continue;
            }
            if is_table_row(line) {
                let kind = if steps.is_empty() { "before any step" } else { "without a preceding step" };
                return Err(self.err(self.line_no(), format!("a table may not appear {kind} in a scenario")));
            }
            if is_delimiter(line) {
                return Err(self.err(
                    self.line_no(),
                    "a multiline string must immediately follow the step it belongs to",
                ));
            }
            steps.push(self.parse_step()?);
        }

        let source = self.lines[start_idx..self.pos].join("\n");

        let mut tags = feature_tags.to_vec();
        for t in &own_tags {
            if !tags.contains(t) {
                tags.push(t.clone());
            }
        }

        Ok(Scenario {
            name,
            own_tags,
            tags,
            steps,
            examples,
            is_outline,
            source,
            line: header_line_no,
        })
    }

    fn parse_step(&mut self) -> Result<Step, SyntaxError> {
        let line_no = self.line_no();
        let raw = self.advance().expect("caller checked a line is present");
        let leading_ws = raw.len() - raw.trim_start().len();
        let trimmed = &raw[leading_ws..];
        let keyword_end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let keyword_text = &trimmed[..keyword_end];
        let keyword = Keyword::parse(keyword_text)
            .ok_or_else(|| self.err(line_no, format!("expected a step keyword, found `{trimmed}`")))?;
        let sentence = strip_trailing_comment(trimmed).trim_end().to_string();

        let mut table = None;
        let mut docstring = None;
        loop {
            match self.peek() {
                Some(line) if is_comment_only(line) => {
                    self.pos += 1;
                }
                Some(line) if table.is_none() && is_table_row(line) => {
                    table = Some(self.parse_table()?);
                }
                Some(line) if docstring.is_none() && is_delimiter(line) => {
                    docstring = Some(self.parse_docstring()?);
                }
                _ => break,
            }
        }

        Ok(Step {
            keyword,
            keyword_text: keyword_text.to_string(),
            sentence,
            table,
            docstring,
            line: line_no,
        })
    }

    fn parse_raw_table(&mut self) -> Result<(Vec<String>, Vec<Vec<String>>), SyntaxError> {
        let header_line_no = self.line_no();
        let header_line = self.advance().expect("caller checked a table row is present");
        let header = split_row(header_line);
        let mut rows = Vec::new();
        loop {
            match self.peek() {
                Some(line) if is_comment_only(line) => {
                    self.pos += 1;
                }
                Some(line) if is_table_row(line) => {
                    self.pos += 1;
                    rows.push(split_row(line));
                }
                _ => break,
            }
        }
        if rows.is_empty() {
            return Err(self.err(
                header_line_no,
                "a table requires at least one data row beneath the header",
            ));
        }
        Ok((header, rows))
    }

    fn parse_table(&mut self) -> Result<StepTable, SyntaxError> {
        let (header, rows) = self.parse_raw_table()?;
        Ok(StepTable::new(header, rows))
    }

    fn parse_examples_block(&mut self) -> Result<ExampleBlock, SyntaxError> {
        let line_no = self.line_no();
        self.pos += 1; // consume "Examples:"
        self.skip_noise();
        match self.peek() {
            Some(line) if is_table_row(line) => {
                let (header, rows) = self.parse_raw_table()?;
                Ok(ExampleBlock { header, rows, line: line_no })
            }
            _ => Err(self.err(self.line_no(), "'Examples:' must be followed by a table")),
        }
    }

    fn parse_docstring(&mut self) -> Result<String, SyntaxError> {
        let open_line_no = self.line_no();
        let open_line = self.advance().expect("caller checked a delimiter is present");
        let indent = leading_indent(open_line);
        let mut body = Vec::new();
        loop {
            match self.advance() {
                None => {
                    return Err(self.err(open_line_no, "unterminated multiline string"));
                }
                Some(line) if is_delimiter(line) => break,
                Some(line) => body.push(dedent_line(line, indent).to_string()),
            }
        }
        Ok(body.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_feature() {
        let source = "Feature: Addition\n  Scenario: Add two numbers\n    Given a calculator\n";
        let feature = parse(source).unwrap();
        assert_eq!(feature.name, "Addition");
        assert_eq!(feature.scenarios.len(), 1);
        assert_eq!(feature.scenarios[0].steps[0].sentence, "Given a calculator");
    }

    #[test]
    fn feature_description_is_trimmed_multiline() {
        let source = "Feature: Addition\n  Line one\n  Line two\n\n  Scenario: S\n    Given x\n";
        let feature = parse(source).unwrap();
        assert_eq!(feature.description, "Line one\nLine two");
    }

    #[test]
    fn tags_inherit_from_feature_to_scenario() {
        let source = "@suite\nFeature: F\n\n  @smoke\n  Scenario: S\n    Given x\n";
        let feature = parse(source).unwrap();
        assert_eq!(feature.tags, vec!["suite".to_string()]);
        let scenario = &feature.scenarios[0];
        assert_eq!(scenario.own_tags, vec!["smoke".to_string()]);
        assert!(scenario.tags.contains(&"suite".to_string()));
        assert!(scenario.tags.contains(&"smoke".to_string()));
    }

    #[test]
    fn scenario_outline_parses_examples_table() {
        let source = "\
Feature: Calculator
  Scenario Outline: Addition
    Given I have entered <input_1> into the calculator
    And I have entered <input_2> into the calculator
    When I press <button>
    Then the result should be <output> on the screen

    Examples:
      | input_1 | input_2 | button | output |
      | 20      | 30      | add    | 50     |
      | 2       | 5       | add    | 7      |
      | 0       | 40      | add    | 40     |
";
        let feature = parse(source).unwrap();
        let scenario = &feature.scenarios[0];
        assert!(scenario.is_outline);
        let solved = scenario.solved_steps();
        assert_eq!(solved.len(), 12);
        assert_eq!(solved[0].sentence, "Given I have entered 20 into the calculator");
        assert_eq!(solved[11].sentence, "Then the result should be 40 on the screen");
    }

    #[test]
    fn commented_example_row_is_dropped() {
        let source = "\
Feature: Calculator
  Scenario Outline: Addition
    Given I have entered <input_1> into the calculator

    Examples:
      | input_1 | output |
      | 20      | 50     |
      # | 2      | 7      |
      | 0       | 40     |
";
        let feature = parse(source).unwrap();
        let outlines = feature.scenarios[0].outlines();
        assert_eq!(outlines.len(), 2);
        assert_eq!(outlines[0].get("input_1").map(String::as_str), Some("20"));
        assert_eq!(outlines[1].get("input_1").map(String::as_str), Some("0"));
    }

    #[test]
    fn inline_comment_inside_quotes_is_preserved() {
        let source = "Feature: F\n  Scenario: S\n    When I search for the hashtag \"#hammer\"\n";
        let feature = parse(source).unwrap();
        assert_eq!(
            feature.scenarios[0].steps[0].sentence,
            "When I search for the hashtag \"#hammer\""
        );
    }

    #[test]
    fn trailing_comment_is_stripped() {
        let source = "Feature: F\n  Scenario: S\n    And I am using a hammer # informational \"comment\"\n";
        let feature = parse(source).unwrap();
        assert_eq!(feature.scenarios[0].steps[0].sentence, "And I am using a hammer");
    }

    #[test]
    fn table_before_any_step_is_syntax_error() {
        let source = "Feature: F\n  Scenario: S\n    | a | b |\n    | 1 | 2 |\n";
        let err = parse(source).unwrap_err();
        assert_eq!(err.line, 3);
    }

    #[test]
    fn examples_outside_outline_is_syntax_error() {
        let source = "Feature: F\n  Scenario: S\n    Given a step\n\n    Examples:\n      | a |\n      | 1 |\n";
        let err = parse(source).unwrap_err();
        assert!(err.reason.contains("Scenario Outline"));
    }

    #[test]
    fn unterminated_multiline_is_syntax_error() {
        let source = "Feature: F\n  Scenario: S\n    Given a step\n      \"\"\"\n      unterminated\n";
        let err = parse(source).unwrap_err();
        assert!(err.reason.contains("unterminated"));
    }

    #[test]
    fn multiline_docstring_is_dedented_to_opening_indentation() {
        let source = "Feature: F\n  Scenario: S\n    Given a step\n      \"\"\"\n      line one\n        line two\n      \"\"\"\n";
        let feature = parse(source).unwrap();
        let step = &feature.scenarios[0].steps[0];
        assert_eq!(step.docstring.as_deref(), Some("line one\n  line two"));
    }

    #[test]
    fn step_table_round_trips_header_and_rows() {
        let source = "Feature: F\n  Scenario: S\n    Given a list of items\n      | name  | qty |\n      | apple | 3   |\n";
        let feature = parse(source).unwrap();
        let table = feature.scenarios[0].steps[0].table.as_ref().unwrap();
        assert_eq!(table.header, vec!["name", "qty"]);
        assert_eq!(table.rows[0], vec!["apple", "3"]);
    }

    #[test]
    fn parse_step_block_tokenizes_bare_step_lines() {
        let steps = parse_step_block("Given I have entered 5\nThen I see the result\n").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].sentence, "Given I have entered 5");
    }
}
