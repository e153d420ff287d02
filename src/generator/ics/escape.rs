//! iCalendar text escaping (RFC 5545 §3.3.11).

/// Escapes a raw TEXT value in a single pass.
///
/// Backslash, semicolon and comma get a leading backslash; newlines become `\n`.
/// CRLF and a lone CR both count as one newline.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {
                chars.next_if_eq(&'\n');
                result.push_str("\\n");
            }
            _ => result.push(c),
        }
    }
    result
}
