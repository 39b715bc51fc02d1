//! Validation helpers for option records.

use miette::SourceSpan;
use solwiz_core::{is_identifier, is_reserved_word};

/// Find the span of the value assigned to a top-level `key`.
///
/// Matches lines of the form `key = value`, ignoring leading whitespace and a
/// trailing `#` comment. Quotes are part of the span.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let trimmed = line.trim_start();
        let Some(rest) = trimmed.strip_prefix(key) else {
            continue;
        };
        let after_key = rest.trim_start();
        let Some(value) = after_key.strip_prefix('=') else {
            continue;
        };

        let value = value.trim_start();
        let value_start = line_start + (line.len() - value.len());
        let value = match value.find(" #") {
            Some(comment) => &value[..comment],
            None => value,
        }
        .trim_end();
        if value.is_empty() {
            return None;
        }
        return Some(SourceSpan::from((value_start, value.len())));
    }
    None
}

/// Check that `name` can be used as a contract name.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_contract_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if is_reserved_word(name) {
        return Some("name is a Solidity reserved word");
    }
    if !is_identifier(name) {
        return Some("name is not a Solidity identifier");
    }
    None
}

/// Check that `license` is a plain SPDX license expression.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_license(license: &str) -> Option<&'static str> {
    if license.trim().is_empty() {
        return Some("license cannot be empty");
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+' | '(' | ')' | ' ');
    if !license.chars().all(allowed) {
        return Some("license must be an SPDX expression (letters, digits, `.-+()` and spaces)");
    }
    None
}
