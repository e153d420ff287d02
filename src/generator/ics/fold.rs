//! Content line folding (RFC 5545 §3.1).

/// Maximum line length in octets, not counting the line ending.
pub const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line and terminates it with `line_ending`.
///
/// Continuation lines start with a single space, which counts towards their
/// 75 octets. Lines are never split inside a UTF-8 sequence.
#[must_use]
pub fn fold_line(line: &str, line_ending: &str) -> String {
    let folds = line.len() / (MAX_LINE_OCTETS - 1);
    let mut result = String::with_capacity(line.len() + (folds + 1) * (line_ending.len() + 1));
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;

    while rest.len() > limit {
        // limit is far larger than any UTF-8 sequence, so this never reaches 0
        let mut end = limit;
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (head, tail) = rest.split_at(end);
        result.push_str(head);
        result.push_str(line_ending);
        result.push(' ');
        rest = tail;
        limit = MAX_LINE_OCTETS - 1;
    }
    result.push_str(rest);
    result.push_str(line_ending);
    result
}
