//! Multiline (`"""`) string body handling (§4.1).

/// Returns `true` if `line`, once trimmed, is exactly a `"""` delimiter.
#[must_use]
pub fn is_delimiter(line: &str) -> bool {
    line.trim() == "\"\"\""
}

/// The number of leading whitespace bytes on `line`, used to compute the
/// indentation to strip from every line of a multiline body (§9: compared
/// byte-for-byte, no tab expansion).
#[must_use]
pub fn leading_indent(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Strips up to `indent` leading whitespace bytes from `line`. If `line`
/// has fewer leading whitespace bytes than `indent`, strips what's there.
#[must_use]
pub fn dedent_line<'a>(line: &'a str, indent: usize) -> &'a str {
    let actual = leading_indent(line).min(indent);
    &line[actual..]
}
