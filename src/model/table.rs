//! Pipe-delimited data tables attached to a [`Step`](super::step::Step) and
//! the row tables carried by an [`ExampleBlock`].

use std::collections::HashMap;

/// A single data table attached to a step.
///
/// The first row parsed after a step sentence is the `header`; every row
/// beneath it is a `row`, each the same length as `header`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepTable {
    /// Column names, in declaration order.
    pub header: Vec<String>,
    /// Data rows, each the same length as `header`.
    pub rows: Vec<Vec<String>>,
}

impl StepTable {
    /// Creates a table from a header and its rows.
    #[must_use]
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Returns the rows as `header -> value` maps, preserving row order.
    #[must_use]
    pub fn hashes(&self) -> Vec<HashMap<String, String>> {
        self.rows
            .iter()
            .map(|row| {
                self.header
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Substitutes every `<name>` placeholder in every cell with the value
    /// from `row`, leaving unknown placeholders untouched.
    #[must_use]
    pub(crate) fn substitute(&self, row: &HashMap<String, String>) -> Self {
        Self {
            header: self.header.clone(),
            rows: self
                .rows
                .iter()
                .map(|cells| {
                    cells
                        .iter()
                        .map(|cell| super::substitute_placeholders(cell, row))
                        .collect()
                })
                .collect(),
        }
    }
}

/// One `Examples:` block belonging to a `Scenario Outline`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExampleBlock {
    /// Placeholder names, in declaration order.
    pub header: Vec<String>,
    /// Data rows. Commented-out rows have already been filtered out.
    pub rows: Vec<Vec<String>>,
    /// 1-based source line of the `Examples:` keyword.
    pub line: u32,
}

impl ExampleBlock {
    /// Returns the rows as `name -> value` maps, preserving row order.
    #[must_use]
    pub fn rows_as_maps(&self) -> Vec<HashMap<String, String>> {
        self.rows
            .iter()
            .map(|row| {
                self.header
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_zips_header_and_row() {
        let table = StepTable::new(
            vec!["name".into(), "age".into()],
            vec![vec!["Alice".into(), "30".into()]],
        );
        let hashes = table.hashes();
        assert_eq!(hashes.len(), 1);
        assert_eq!(hashes[0].get("name").map(String::as_str), Some("Alice"));
        assert_eq!(hashes[0].get("age").map(String::as_str), Some("30"));
    }

    #[test]
    fn substitute_replaces_known_placeholders_only() {
        let table = StepTable::new(
            vec!["col".into()],
            vec![vec!["<input_1> and <unknown>".into()]],
        );
        let mut row = HashMap::new();
        row.insert("input_1".to_string(), "20".to_string());
        let substituted = table.substitute(&row);
        assert_eq!(substituted.rows[0][0], "20 and <unknown>");
    }

    #[test]
    fn example_block_rows_as_maps() {
        let block = ExampleBlock {
            header: vec!["a".into(), "b".into()],
            rows: vec![vec!["1".into(), "2".into()], vec!["3".into(), "4".into()]],
            line: 1,
        };
        let maps = block.rows_as_maps();
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[1].get("a").map(String::as_str), Some("3"));
    }
}
