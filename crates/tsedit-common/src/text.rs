//! Line and whitespace scanning over source text.
//!
//! All positions are byte offsets. Only ASCII whitespace is treated as
//! indentation; other Unicode whitespace is skipped by `skip_whitespace` but
//! never produced by the formatting code.

use memchr::{memchr, memrchr};

#[inline]
const fn is_space_or_tab(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Start of the line containing `pos`.
pub fn line_start(text: &str, pos: usize) -> usize {
    let pos = pos.min(text.len());
    memrchr(b'\n', &text.as_bytes()[..pos]).map_or(0, |i| i + 1)
}

/// Walks back from `pos` over spaces and tabs.
///
/// Returns the start of the line when only indentation precedes `pos` on its
/// line, otherwise the position right after the last non-blank character.
pub fn pos_at_start_of_line_or_non_whitespace(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut pos = pos.min(bytes.len());
    while pos > 0 {
        let byte = bytes[pos - 1];
        if byte == b'\n' || !is_space_or_tab(byte) {
            return pos;
        }
        pos -= 1;
    }
    0
}

/// The indentation (spaces and tabs) at the start of the line containing `pos`.
pub fn line_indentation(text: &str, pos: usize) -> &str {
    let start = line_start(text, pos);
    let bytes = text.as_bytes();
    let mut end = start;
    while end < bytes.len() && is_space_or_tab(bytes[end]) {
        end += 1;
    }
    &text[start..end]
}

/// First position at or after `pos` that is not whitespace.
pub fn skip_whitespace(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    for ch in text[pos..].chars() {
        if !ch.is_whitespace() && ch != '\u{feff}' {
            break;
        }
        pos += ch.len_utf8();
    }
    pos
}

/// Whether `pos` is preceded only by indentation on its line.
pub fn is_at_line_start(text: &str, pos: usize) -> bool {
    pos_at_start_of_line_or_non_whitespace(text, pos) == line_start(text, pos)
}

/// If only spaces/tabs separate `pos` from a line break, returns the position
/// after that line break (`\n` or `\r\n`).
pub fn end_of_line_break(text: &str, pos: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = pos.min(bytes.len());
    while pos < bytes.len() && is_space_or_tab(bytes[pos]) {
        pos += 1;
    }
    match bytes.get(pos) {
        Some(b'\n') => Some(pos + 1),
        Some(b'\r') if bytes.get(pos + 1) == Some(&b'\n') => Some(pos + 2),
        _ => None,
    }
}

/// Extends a statement end over comments that start on the same line.
///
/// `a(); // note` and `a(); /* note */` both extend to the end of the comment.
pub fn extend_over_trailing_comments(text: &str, end: usize) -> usize {
    let bytes = text.as_bytes();
    let mut result = end.min(bytes.len());
    loop {
        let mut pos = result;
        while pos < bytes.len() && is_space_or_tab(bytes[pos]) {
            pos += 1;
        }
        if bytes.get(pos) != Some(&b'/') {
            return result;
        }
        match bytes.get(pos + 1) {
            Some(b'/') => {
                let line_end = memchr(b'\n', &bytes[pos..]).map_or(bytes.len(), |i| pos + i);
                return if line_end > pos && bytes[line_end - 1] == b'\r' {
                    line_end - 1
                } else {
                    line_end
                };
            }
            Some(b'*') => {
                let body = &text[pos + 2..];
                match body.find("*/") {
                    Some(close) => result = pos + 2 + close + 2,
                    None => return bytes.len(),
                }
            }
            _ => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_line_or_non_whitespace() {
        let text = "a;\n    b;";
        assert_eq!(pos_at_start_of_line_or_non_whitespace(text, 7), 3);
        assert_eq!(pos_at_start_of_line_or_non_whitespace("case 1: x;", 8), 7);
        assert_eq!(pos_at_start_of_line_or_non_whitespace("  x", 2), 0);
    }

    #[test]
    fn indentation_of_line() {
        let text = "namespace N {\n\t  class A {}\n}";
        assert_eq!(line_indentation(text, 20), "\t  ");
        assert_eq!(line_indentation(text, 0), "");
    }

    #[test]
    fn line_break_after_trailing_spaces() {
        assert_eq!(end_of_line_break("a;  \nb", 2), Some(5));
        assert_eq!(end_of_line_break("a;\r\nb", 2), Some(4));
        assert_eq!(end_of_line_break("a; b", 2), None);
    }

    #[test]
    fn trailing_comments_extend_statement_end() {
        let text = "a(); // note\nb();";
        assert_eq!(extend_over_trailing_comments(text, 4), 12);
        let text = "a(); /* x */ b();";
        assert_eq!(extend_over_trailing_comments(text, 4), 12);
        assert_eq!(extend_over_trailing_comments("a();\n// next", 4), 4);
    }
}
