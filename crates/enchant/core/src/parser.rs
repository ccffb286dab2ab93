//! Splits a lore line into a candidate enchantment name and level.
//!
//! A line is read as `<name> <numeral>`: the numeral is the last
//! whitespace-separated token and the name is everything before it, trimmed.
//! Names may contain spaces (`Frost Walker II` parses as `Frost Walker`).
//!
//! The parser only looks at shape. Whether the name belongs to a registered
//! enchantment is decided by [`crate::codec`].

use crate::numeral;

/// Marker that starts a legacy formatting code (`§7`, `§o`, ...).
pub const FORMAT_MARKER: char = '§';

/// Removes legacy formatting codes from a line.
///
/// Each marker consumes itself and the following character. A trailing marker
/// with nothing after it is dropped.
pub fn strip_formatting(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        if ch == FORMAT_MARKER {
            chars.next();
        } else {
            out.push(ch);
        }
    }
    out
}

/// Splits a cleaned line into (name, numeral token).
fn split(line: &str) -> Option<(String, String)> {
    let clean = strip_formatting(line);
    let trimmed = clean.trim();
    let (name, token) = trimmed.rsplit_once(char::is_whitespace)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), token.to_string()))
}

/// Extracts the name preceding the trailing numeral.
///
/// Returns `None` when the line does not end in a valid numeral or has no
/// text before it.
pub fn parse_name(line: &str) -> Option<String> {
    let (name, token) = split(line)?;
    numeral::is_numeral(&token).then_some(name)
}

/// Extracts and decodes the trailing numeral, returning 0 if absent or invalid.
pub fn parse_level(line: &str) -> u32 {
    split(line).map_or(0, |(_, token)| numeral::decode(&token))
}

/// Parses both parts at once. `None` unless the line has a name and a level.
pub fn parse(line: &str) -> Option<(String, u32)> {
    let (name, token) = split(line)?;
    match numeral::decode(&token) {
        0 => None,
        level => Some((name, level)),
    }
}

/// Returns true if `line` parses to a name equal to `name` (case-insensitive).
pub fn names(line: &str, name: &str) -> bool {
    parse_name(line).is_some_and(|parsed| eq_ignore_case(&parsed, name.trim()))
}

/// Case-insensitive comparison used for every name match.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_uppercase() == b.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_line() {
        assert_eq!(parse_name("Sharpness V").as_deref(), Some("Sharpness"));
        assert_eq!(parse_level("Sharpness V"), 5);
        assert_eq!(parse("Lifesteal III"), Some(("Lifesteal".to_string(), 3)));
    }

    #[test]
    fn strips_formatting_codes() {
        assert_eq!(strip_formatting("§7Sharpness §lV"), "Sharpness V");
        assert_eq!(parse_name("§7Sharpness V").as_deref(), Some("Sharpness"));
        assert_eq!(parse_level("§7Sharpness V"), 5);
        assert_eq!(strip_formatting("dangling§"), "dangling");
    }

    #[test]
    fn multi_word_names_keep_inner_spaces() {
        assert_eq!(parse_name("Frost Walker II").as_deref(), Some("Frost Walker"));
        assert_eq!(parse_name("  Frost   Walker   II  ").as_deref(), Some("Frost   Walker"));
        assert_eq!(parse_level("Frost Walker II"), 2);
    }

    #[test]
    fn name_ending_in_numeral_word_uses_last_token() {
        // "Power V" as a name still parses; only the final token is the level.
        assert_eq!(parse("Power V II"), Some(("Power V".to_string(), 2)));
    }

    #[test]
    fn rejects_lines_without_numeral() {
        assert_eq!(parse_name("A trusty blade"), None);
        assert_eq!(parse_level("A trusty blade"), 0);
        assert_eq!(parse_name("Sharpness iv"), None);
        assert_eq!(parse_name("Sharpness 4"), None);
        assert_eq!(parse("Sharpness"), None);
    }

    #[test]
    fn rejects_bare_numeral() {
        assert_eq!(parse_name("IV"), None);
        assert_eq!(parse_name("   IV"), None);
        assert_eq!(parse_level("IV"), 0);
    }

    #[test]
    fn name_match_is_exact_not_substring() {
        assert!(names("Sharpness V", "sharpness"));
        assert!(!names("Sharpness V", "Sharp"));
        assert!(!names("Sharp V", "Sharpness"));
    }
}
