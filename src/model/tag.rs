//! Tag tokens attached to a [`Feature`](super::feature::Feature) or
//! [`Scenario`](super::scenario::Scenario).

use once_cell::sync::Lazy;
use regex::Regex;

/// Tags are `@`-prefixed on their own line; stored without the leading `@`.
static TAG_BODY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-]+$").unwrap());

/// Returns `true` if `token` (including its leading `@`) is a well-formed
/// tag per the external interface's `@[A-Za-z0-9_\-]+` grammar.
#[must_use]
pub fn is_tag_token(token: &str) -> bool {
    token
        .strip_prefix('@')
        .is_some_and(|body| !body.is_empty() && TAG_BODY.is_match(body))
}

/// Strips the leading `@` from a tag token already known to be well-formed.
#[must_use]
pub fn tag_body(token: &str) -> &str {
    token.strip_prefix('@').unwrap_or(token)
}

/// Scans a whitespace-separated line for tag tokens, returning their bodies
/// (without `@`). Tokens that don't match the tag grammar are ignored rather
/// than rejected, per the open question resolution in `SPEC_FULL.md` §9.
#[must_use]
pub fn parse_tag_line(line: &str) -> Vec<String> {
    line.split_whitespace()
        .filter(|tok| is_tag_token(tok))
        .map(tag_body)
        .map(str::to_owned)
        .collect()
}

/// Returns `true` if every token on `line` (once split on whitespace) looks
/// like a tag, i.e. the line is *only* tags and can't be anything else.
#[must_use]
pub fn is_tag_only_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.split_whitespace().all(is_tag_token)
}
