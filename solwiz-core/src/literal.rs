//! Solidity lexical helpers: string literals and identifiers.

use std::fmt::Write;

/// Keywords and reserved words a contract name may not use.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "address", "after", "alias", "anonymous", "apply", "as", "assembly", "auto",
    "bool", "break", "byte", "bytes", "calldata", "case", "catch", "constant", "constructor",
    "continue", "contract", "copyof", "default", "define", "delete", "do", "else", "emit",
    "enum", "error", "event", "external", "fallback", "false", "final", "for", "function",
    "if", "immutable", "implements", "import", "in", "indexed", "inline", "int", "interface",
    "internal", "is", "let", "library", "macro", "mapping", "match", "memory", "modifier",
    "mutable", "new", "null", "of", "override", "partial", "payable", "pragma", "private",
    "promise", "public", "pure", "receive", "reference", "relocatable", "return", "returns",
    "revert", "sealed", "sizeof", "static", "storage", "string", "struct", "super", "supports",
    "switch", "this", "throw", "true", "try", "type", "typedef", "typeof", "uint", "unchecked",
    "using", "var", "view", "virtual", "while",
];

/// Render `value` as a single-line Solidity string literal.
///
/// Quotes, backslashes and control characters are escaped. Values containing
/// non-ASCII characters use the `unicode"..."` literal form, which keeps the
/// characters themselves and decodes to the same UTF-8 bytes.
pub fn string_literal(value: &str) -> String {
    let prefix = if value.is_ascii() { "" } else { "unicode" };

    let mut out = String::with_capacity(prefix.len() + value.len() + 2);
    out.push_str(prefix);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            // Line and paragraph separators would split the literal in most editors,
            // and solc rejects unbalanced direction overrides.
            c if c.is_control() || is_line_separator(c) || is_bidi_control(c) => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn is_line_separator(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}')
}

fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}')
}

/// Whether `name` is a Solidity keyword or reserved word.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Whether `name` lexes as a single Solidity identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Decode a literal produced by [`string_literal`] back to its value.
    fn unescape(literal: &str) -> String {
        let body = literal
            .strip_prefix("unicode")
            .unwrap_or(literal)
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .expect("quoted literal");

        let mut out = String::new();
        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next().expect("escape") {
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'x' => {
                    let hex: String = chars.by_ref().take(2).collect();
                    out.push(char::from(u8::from_str_radix(&hex, 16).unwrap()));
                }
                'u' => {
                    let hex: String = chars.by_ref().take(4).collect();
                    out.push(char::from_u32(u32::from_str_radix(&hex, 16).unwrap()).unwrap());
                }
                other => out.push(other),
            }
        }
        out
    }

    #[test]
    fn test_plain_ascii() {
        assert_eq!(string_literal("MyToken"), "\"MyToken\"");
        assert_eq!(string_literal(""), "\"\"");
    }

    #[test]
    fn test_escapes_quotes_and_backslashes() {
        assert_eq!(
            string_literal(r#"say "hi" \o/"#),
            r#""say \"hi\" \\o/""#
        );
    }

    #[test]
    fn test_escapes_control_characters() {
        assert_eq!(string_literal("a\nb\tc"), r#""a\nb\tc""#);
        assert_eq!(string_literal("\u{0}\u{7f}"), r#""\x00\x7f""#);
    }

    #[test]
    fn test_non_ascii_uses_unicode_prefix() {
        assert_eq!(string_literal("ipfs://café/"), "unicode\"ipfs://café/\"");
        assert_eq!(string_literal("line\u{2028}sep"), r#"unicode"line\u2028sep""#);
    }

    #[test]
    fn test_escapes_bidi_controls() {
        assert_eq!(string_literal("a\u{202E}b"), r#"unicode"a\u202eb""#);
        assert_eq!(string_literal("\u{2067}x"), r#"unicode"\u2067x""#);
    }

    #[test]
    fn test_literal_is_single_line_and_round_trips() {
        let values = [
            "https://example.com/",
            "quote \" and backslash \\",
            "tab\tnewline\ncarriage\r",
            "ünïcödé \"mixed\" 🎨",
            "\u{85}next line",
            "ipfs://a\u{202E}b/",
            "\u{2066}isolate\u{2069} \u{202A}embed\u{202C}",
        ];
        for value in values {
            let literal = string_literal(value);
            assert!(!literal.contains('\n') && !literal.contains('\r'), "{literal}");
            assert!(!literal.chars().any(is_bidi_control), "{literal}");
            assert_eq!(unescape(&literal), value);
        }
    }

    #[test]
    fn test_differs_from_json_where_solidity_needs_it() {
        // JSON leaves non-ASCII bare inside a plain literal, which Solidity rejects.
        let json = serde_json::to_string("é").unwrap();
        assert_eq!(json, "\"é\"");
        assert_eq!(string_literal("é"), "unicode\"é\"");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("MyToken"));
        assert!(is_identifier("_token$2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2Token"));
        assert!(!is_identifier("My Token"));
        assert!(!is_identifier("My-Token"));
    }

    #[test]
    fn test_is_reserved_word() {
        assert!(is_reserved_word("contract"));
        assert!(is_reserved_word("mapping"));
        assert!(!is_reserved_word("MyToken"));
    }
}
