//! Trailing- and whole-line comment handling (§4.1).
//!
//! A `#` begins a trailing comment unless it lies within a balanced pair of
//! single or double quotes on the same line. A line whose first
//! non-whitespace character is `#` is a comment in its entirety.

/// Strips a trailing `# ...` comment from `line`, honoring quoted regions,
/// and trims the whitespace that preceded it. Lines with no comment (or
/// whose only `#` occurrences are quoted) are returned unchanged but for
/// trailing-whitespace trimming... actually only the trailing comment
/// portion (if any) has its preceding whitespace trimmed; the rest of the
/// line is returned as-is.
#[must_use]
pub fn strip_trailing_comment(line: &str) -> &str {
    let mut in_double = false;
    let mut in_single = false;
    for (byte_idx, ch) in line.char_indices() {
        match ch {
            '"' if !in_single => in_double = !in_double,
            '\'' if !in_double => in_single = !in_single,
            '#' if !in_double && !in_single => {
                return line[..byte_idx].trim_end();
            }
            _ => {}
        }
    }
    line
}

/// Returns `true` if `line`'s first non-whitespace character is `#`, i.e.
/// the whole line is a comment and should be discarded entirely.
#[must_use]
pub fn is_comment_only(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_unquoted_trailing_comment() {
        assert_eq!(
            strip_trailing_comment("And I am using a hammer # informational \"comment\""),
            "And I am using a hammer"
        );
    }

    #[test]
    fn preserves_hash_inside_double_quotes() {
        assert_eq!(
            strip_trailing_comment(r#"When I search for the hashtag "#hammer""#),
            r#"When I search for the hashtag "#hammer""#
        );
    }

    #[test]
    fn preserves_hash_inside_single_quotes() {
        assert_eq!(
            strip_trailing_comment("When I search for the hashtag '#hammer'"),
            "When I search for the hashtag '#hammer'"
        );
    }

    #[test]
    fn comment_only_line_detected_regardless_of_leading_whitespace() {
        assert!(is_comment_only("   # a comment"));
        assert!(!is_comment_only("Given a step # trailing"));
    }

    #[test]
    fn line_with_no_comment_is_unchanged() {
        assert_eq!(strip_trailing_comment("Given a plain step"), "Given a plain step");
    }
}
