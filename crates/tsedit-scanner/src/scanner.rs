//! Scanner state machine.
//!
//! Produces tokens with their full start (`pos`, end of the previous token),
//! their start (first character of the token) and whether a line break
//! appeared in the trivia before them. Comments are trivia.
//!
//! Template literals are scanned with a brace-depth stack so that `}` closing a
//! `${ ... }` substitution resumes the template instead of producing a
//! `CloseBraceToken`. Regular expressions are recognised with the usual
//! "previous token cannot end an expression" heuristic.

use crate::SyntaxKind;

/// A scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    /// Full start, including leading trivia.
    pub pos: u32,
    /// Start of the token text.
    pub start: u32,
    pub end: u32,
    pub has_preceding_line_break: bool,
}

pub struct ScannerState<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    brace_depth: u32,
    template_stack: Vec<u32>,
    last_kind: SyntaxKind,
}

/// Scan the whole text. The last token is always `EndOfFileToken`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut scanner = ScannerState::new(text);
    let mut tokens = Vec::with_capacity(text.len() / 4 + 1);
    loop {
        let token = scanner.scan();
        tokens.push(token);
        if token.kind == SyntaxKind::EndOfFileToken {
            break;
        }
    }
    tracing::trace!(count = tokens.len(), "tokenize");
    tokens
}

#[inline]
fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$' || (!ch.is_ascii() && ch.is_alphabetic())
}

#[inline]
fn is_identifier_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch == '_'
        || ch == '$'
        || ch == '\u{200c}'
        || ch == '\u{200d}'
        || (!ch.is_ascii() && ch.is_alphanumeric())
}

impl<'a> ScannerState<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut scanner = ScannerState {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            brace_depth: 0,
            template_stack: Vec::new(),
            last_kind: SyntaxKind::Unknown,
        };
        scanner.scan_shebang_trivia();
        scanner
    }

    pub fn source_text(&self) -> &'a str {
        self.text
    }

    fn scan_shebang_trivia(&mut self) {
        if self.text.starts_with("#!") {
            self.pos = self.text.find('\n').unwrap_or(self.text.len());
        }
    }

    #[inline]
    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Skip whitespace and comments. Returns whether a line break was seen.
    fn skip_trivia(&mut self) -> bool {
        let mut line_break = false;
        while let Some(ch) = self.current_char() {
            match ch {
                '\n' | '\r' | '\u{2028}' | '\u{2029}' => {
                    line_break = true;
                    self.pos += ch.len_utf8();
                }
                '/' if self.peek(1) == Some(b'/') => {
                    while let Some(byte) = self.peek(0) {
                        if byte == b'\n' || byte == b'\r' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                '/' if self.peek(1) == Some(b'*') => {
                    let body_start = self.pos + 2;
                    match self.text[body_start..].find("*/") {
                        Some(close) => {
                            if self.text[body_start..body_start + close].contains('\n') {
                                line_break = true;
                            }
                            self.pos = body_start + close + 2;
                        }
                        None => self.pos = self.bytes.len(),
                    }
                }
                c if c.is_whitespace() || c == '\u{feff}' => self.pos += c.len_utf8(),
                _ => break,
            }
        }
        line_break
    }

    /// Scan the next token.
    pub fn scan(&mut self) -> Token {
        let full_start = self.pos;
        let has_preceding_line_break = self.skip_trivia();
        let start = self.pos;
        let kind = self.scan_token_kind();
        if kind != SyntaxKind::EndOfFileToken || start == self.bytes.len() {
            self.last_kind = kind;
        }
        Token {
            kind,
            pos: full_start as u32,
            start: start as u32,
            end: self.pos as u32,
            has_preceding_line_break,
        }
    }

    fn scan_token_kind(&mut self) -> SyntaxKind {
        let Some(ch) = self.current_char() else {
            return SyntaxKind::EndOfFileToken;
        };

        if is_identifier_start(ch) || ch == '\\' {
            return self.scan_identifier_or_keyword();
        }
        if ch.is_ascii_digit() || (ch == '.' && self.peek(1).is_some_and(|b| b.is_ascii_digit())) {
            return self.scan_number();
        }

        match ch {
            '"' | '\'' => self.scan_string(ch as u8),
            '`' => {
                self.pos += 1;
                self.scan_template_part(true)
            }
            '{' => {
                self.pos += 1;
                self.brace_depth += 1;
                SyntaxKind::OpenBraceToken
            }
            '}' => {
                self.pos += 1;
                if self.template_stack.last() == Some(&self.brace_depth) {
                    self.scan_template_part(false)
                } else {
                    self.brace_depth = self.brace_depth.saturating_sub(1);
                    SyntaxKind::CloseBraceToken
                }
            }
            '(' => self.single(SyntaxKind::OpenParenToken),
            ')' => self.single(SyntaxKind::CloseParenToken),
            '[' => self.single(SyntaxKind::OpenBracketToken),
            ']' => self.single(SyntaxKind::CloseBracketToken),
            ';' => self.single(SyntaxKind::SemicolonToken),
            ',' => self.single(SyntaxKind::CommaToken),
            ':' => self.single(SyntaxKind::ColonToken),
            '@' => self.single(SyntaxKind::AtToken),
            '~' => self.single(SyntaxKind::OperatorToken),
            '#' => {
                self.pos += 1;
                if self.current_char().is_some_and(is_identifier_start) {
                    self.scan_identifier_or_keyword();
                    SyntaxKind::PrivateIdentifier
                } else {
                    SyntaxKind::Unknown
                }
            }
            '.' => {
                if self.peek(1) == Some(b'.') && self.peek(2) == Some(b'.') {
                    self.pos += 3;
                    SyntaxKind::DotDotDotToken
                } else {
                    self.single(SyntaxKind::DotToken)
                }
            }
            '?' => match (self.peek(1), self.peek(2)) {
                (Some(b'.'), next) if !next.is_some_and(|b| b.is_ascii_digit()) => {
                    self.pos += 2;
                    SyntaxKind::QuestionDotToken
                }
                (Some(b'?'), Some(b'=')) => {
                    self.pos += 3;
                    SyntaxKind::OperatorToken
                }
                (Some(b'?'), _) => {
                    self.pos += 2;
                    SyntaxKind::OperatorToken
                }
                _ => self.single(SyntaxKind::QuestionToken),
            },
            '=' => match (self.peek(1), self.peek(2)) {
                (Some(b'>'), _) => {
                    self.pos += 2;
                    SyntaxKind::EqualsGreaterThanToken
                }
                (Some(b'='), Some(b'=')) => {
                    self.pos += 3;
                    SyntaxKind::OperatorToken
                }
                (Some(b'='), _) => {
                    self.pos += 2;
                    SyntaxKind::OperatorToken
                }
                _ => self.single(SyntaxKind::EqualsToken),
            },
            '!' => match (self.peek(1), self.peek(2)) {
                (Some(b'='), Some(b'=')) => {
                    self.pos += 3;
                    SyntaxKind::OperatorToken
                }
                (Some(b'='), _) => {
                    self.pos += 2;
                    SyntaxKind::OperatorToken
                }
                _ => self.single(SyntaxKind::ExclamationToken),
            },
            '<' => match (self.peek(1), self.peek(2)) {
                (Some(b'<'), Some(b'=')) => {
                    self.pos += 3;
                    SyntaxKind::OperatorToken
                }
                (Some(b'<' | b'='), _) => {
                    self.pos += 2;
                    SyntaxKind::OperatorToken
                }
                _ => self.single(SyntaxKind::LessThanToken),
            },
            // `>` is always scanned alone so `Array<Array<T>>` closes twice.
            '>' => self.single(SyntaxKind::GreaterThanToken),
            '+' | '-' => {
                let byte = ch as u8;
                if self.peek(1) == Some(byte) {
                    self.pos += 2;
                    if byte == b'+' {
                        SyntaxKind::PlusPlusToken
                    } else {
                        SyntaxKind::MinusMinusToken
                    }
                } else {
                    self.operator_with_optional_equals(1)
                }
            }
            '*' => {
                if self.peek(1) == Some(b'*') {
                    self.operator_with_optional_equals(2)
                } else if self.peek(1) == Some(b'=') {
                    self.operator_with_optional_equals(1)
                } else {
                    self.single(SyntaxKind::AsteriskToken)
                }
            }
            '|' | '&' => {
                let byte = ch as u8;
                if self.peek(1) == Some(byte) {
                    self.operator_with_optional_equals(2)
                } else if self.peek(1) == Some(b'=') {
                    self.operator_with_optional_equals(1)
                } else if byte == b'|' {
                    self.single(SyntaxKind::BarToken)
                } else {
                    self.single(SyntaxKind::AmpersandToken)
                }
            }
            '%' | '^' => self.operator_with_optional_equals(1),
            '/' => {
                if !self.last_kind.can_end_expression() {
                    if let Some(kind) = self.try_scan_regex() {
                        return kind;
                    }
                }
                self.operator_with_optional_equals(1)
            }
            _ => {
                self.pos += ch.len_utf8();
                SyntaxKind::Unknown
            }
        }
    }

    #[inline]
    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    fn operator_with_optional_equals(&mut self, len: usize) -> SyntaxKind {
        self.pos += len;
        if self.peek(0) == Some(b'=') {
            self.pos += 1;
        }
        SyntaxKind::OperatorToken
    }

    fn scan_identifier_or_keyword(&mut self) -> SyntaxKind {
        let start = self.pos;
        while let Some(ch) = self.current_char() {
            if ch == '\\' {
                // Unicode escape: `a` or `\u{61}`
                self.pos += 1;
                if self.peek(0) == Some(b'u') {
                    self.pos += 1;
                    if self.peek(0) == Some(b'{') {
                        while let Some(byte) = self.peek(0) {
                            self.pos += 1;
                            if byte == b'}' {
                                break;
                            }
                        }
                    } else {
                        self.pos = (self.pos + 4).min(self.bytes.len());
                    }
                }
            } else if is_identifier_part(ch) {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
        SyntaxKind::from_keyword(&self.text[start..self.pos]).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let is_hex_like = self.peek(0) == Some(b'0')
            && matches!(self.peek(1), Some(b'x' | b'X' | b'b' | b'B' | b'o' | b'O'));
        while let Some(byte) = self.peek(0) {
            if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'.' {
                self.pos += 1;
            } else if (byte == b'+' || byte == b'-')
                && !is_hex_like
                && matches!(self.bytes.get(self.pos.wrapping_sub(1)), Some(b'e' | b'E'))
            {
                self.pos += 1;
            } else {
                break;
            }
        }
        SyntaxKind::NumericLiteral
    }

    fn scan_string(&mut self, quote: u8) -> SyntaxKind {
        self.pos += 1;
        while let Some(byte) = self.peek(0) {
            match byte {
                b'\\' => self.pos += 2,
                b'\n' | b'\r' => break, // unterminated
                _ if byte == quote => {
                    self.pos += 1;
                    break;
                }
                _ => self.pos += 1,
            }
        }
        self.pos = self.pos.min(self.bytes.len());
        SyntaxKind::StringLiteral
    }

    /// Scan template text after a backtick (`is_start`) or after the `}` that
    /// closes a substitution.
    fn scan_template_part(&mut self, is_start: bool) -> SyntaxKind {
        while let Some(byte) = self.peek(0) {
            match byte {
                b'`' => {
                    self.pos += 1;
                    return if is_start {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        self.template_stack.pop();
                        SyntaxKind::TemplateTail
                    };
                }
                b'$' if self.peek(1) == Some(b'{') => {
                    self.pos += 2;
                    return if is_start {
                        self.template_stack.push(self.brace_depth);
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                }
                b'\\' => self.pos = (self.pos + 2).min(self.bytes.len()),
                _ => self.pos += 1,
            }
        }
        // Unterminated template: close it at end of file.
        if is_start {
            SyntaxKind::NoSubstitutionTemplateLiteral
        } else {
            self.template_stack.pop();
            SyntaxKind::TemplateTail
        }
    }

    fn try_scan_regex(&mut self) -> Option<SyntaxKind> {
        let mut pos = self.pos + 1;
        let mut in_class = false;
        loop {
            let byte = *self.bytes.get(pos)?;
            match byte {
                b'\n' | b'\r' => return None,
                b'\\' => pos += 2,
                b'[' => {
                    in_class = true;
                    pos += 1;
                }
                b']' => {
                    in_class = false;
                    pos += 1;
                }
                b'/' if !in_class => {
                    pos += 1;
                    break;
                }
                _ => pos += 1,
            }
        }
        while self.bytes.get(pos).is_some_and(|b| b.is_ascii_alphabetic()) {
            pos += 1;
        }
        self.pos = pos;
        Some(SyntaxKind::RegularExpressionLiteral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<SyntaxKind> {
        tokenize(text).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn scans_declaration_keywords_and_punctuation() {
        assert_eq!(
            kinds("export class A {}"),
            vec![
                SyntaxKind::ExportKeyword,
                SyntaxKind::ClassKeyword,
                SyntaxKind::Identifier,
                SyntaxKind::OpenBraceToken,
                SyntaxKind::CloseBraceToken,
                SyntaxKind::EndOfFileToken,
            ]
        );
    }

    #[test]
    fn comments_are_trivia_and_record_line_breaks() {
        let tokens = tokenize("a /* x\n */ b // c\nc");
        assert_eq!(tokens.len(), 4);
        assert!(!tokens[0].has_preceding_line_break);
        assert!(tokens[1].has_preceding_line_break);
        assert!(tokens[2].has_preceding_line_break);
        assert_eq!(tokens[1].pos, 1);
        assert_eq!(tokens[1].start, 11);
    }

    #[test]
    fn template_substitutions_do_not_produce_braces() {
        assert_eq!(
            kinds("`a${ {x: 1} }b${c}d`"),
            vec![
                SyntaxKind::TemplateHead,
                SyntaxKind::OpenBraceToken,
                SyntaxKind::Identifier,
                SyntaxKind::ColonToken,
                SyntaxKind::NumericLiteral,
                SyntaxKind::CloseBraceToken,
                SyntaxKind::TemplateMiddle,
                SyntaxKind::Identifier,
                SyntaxKind::TemplateTail,
                SyntaxKind::EndOfFileToken,
            ]
        );
    }

    #[test]
    fn regex_versus_division() {
        assert_eq!(
            kinds("x = /}/g"),
            vec![
                SyntaxKind::Identifier,
                SyntaxKind::EqualsToken,
                SyntaxKind::RegularExpressionLiteral,
                SyntaxKind::EndOfFileToken,
            ]
        );
        assert_eq!(
            kinds("a / b"),
            vec![
                SyntaxKind::Identifier,
                SyntaxKind::OperatorToken,
                SyntaxKind::Identifier,
                SyntaxKind::EndOfFileToken,
            ]
        );
    }

    #[test]
    fn shebang_is_skipped() {
        let tokens = tokenize("#!/usr/bin/env node\nfoo");
        assert_eq!(tokens[0].kind, SyntaxKind::Identifier);
        assert_eq!(tokens[0].start, 20);
    }
}
