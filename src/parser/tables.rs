//! Pipe-delimited table row parsing (§4.1, §6).

/// Returns `true` if `line`, once trimmed, begins with `|`.
#[must_use]
pub fn is_table_row(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

/// Splits a `| a | b |` row into trimmed cells. A row is expected to both
/// start and end with `|`; interior `|#` escaping is not supported, per
/// the external interface's pipe-delimited-with-trimmed-cells grammar.
#[must_use]
pub fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('|')
        .unwrap_or(trimmed)
        .strip_suffix('|')
        .unwrap_or(trimmed);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}
