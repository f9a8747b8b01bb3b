use once_cell::sync::Lazy;
use regex::Regex;

pub static TABLE_ROW_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<tr>(.*?)</tr>").expect("Failed to compile table row regex"));

/// Exactly four cells: name, reason, status, kind. Only the leading digits
/// of the status cell are captured.
pub static ERROR_ROW_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)\A<td>(.*?)</td><td>(.*?)</td><td>([0-9]*)[^<]*</td><td>(Client|Server)</td>\z",
    )
    .expect("Failed to compile error row regex")
});

/// ASCII whitespace only; non-breaking and other Unicode spaces are text.
pub static WHITESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\n\r\x0B\x0C]+").expect("Failed to compile whitespace regex"));

fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

pub fn normalize_name(raw: &str) -> String {
    raw.trim_matches(is_ascii_space).to_string()
}

/// Collapses every ASCII whitespace run to one space. Leading and trailing
/// whitespace is collapsed too, never removed.
pub fn normalize_reason(raw: &str) -> String {
    WHITESPACE_PATTERN.replace_all(raw, " ").into_owned()
}
