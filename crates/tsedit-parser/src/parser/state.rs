//! Parser state: token cursor and diagnostics.

use super::base::NodeIndex;
use super::node::NodeArena;
use tsedit_scanner::{SyntaxKind, Token, tokenize};

/// A recoverable syntax error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub start: u32,
    pub length: u32,
    pub message: String,
    pub code: u32,
}

pub mod diagnostic_codes {
    pub const EXPECTED: u32 = 1005;
    pub const DECLARATION_OR_STATEMENT_EXPECTED: u32 = 1128;
}

/// Parser over a pre-scanned token list.
///
/// The parser only understands statement structure. Expressions and types are
/// skipped token by token, tracking bracket depth to find where a statement
/// ends.
pub struct ParserState {
    pub(crate) file_name: String,
    pub(crate) tokens: Vec<Token>,
    pub(crate) token_index: usize,
    pub(crate) arena: NodeArena,
    pub(crate) parse_diagnostics: Vec<ParseDiagnostic>,
}

impl ParserState {
    pub fn new(file_name: String, source_text: String) -> ParserState {
        let tokens = tokenize(&source_text);
        let mut arena = NodeArena::with_capacity_for_text(source_text.len());
        arena.set_source_text(source_text);
        ParserState {
            file_name,
            tokens,
            token_index: 0,
            arena,
            parse_diagnostics: Vec::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// `.d.ts` files are ambient as a whole.
    pub fn is_declaration_file(&self) -> bool {
        let name = self.file_name.to_ascii_lowercase();
        name.ends_with(".d.ts") || name.ends_with(".d.mts") || name.ends_with(".d.cts")
    }

    pub fn get_arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    pub fn get_diagnostics(&self) -> &[ParseDiagnostic] {
        &self.parse_diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<ParseDiagnostic> {
        std::mem::take(&mut self.parse_diagnostics)
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.peek(0)
    }

    /// Token `offset` positions ahead. Past the end, the end-of-file token.
    #[inline]
    pub(crate) fn peek(&self, offset: usize) -> Token {
        let last = self.tokens.len() - 1;
        self.tokens[(self.token_index + offset).min(last)]
    }

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.token() == kind
    }

    #[inline]
    pub(crate) fn next_token(&mut self) {
        if self.token() != SyntaxKind::EndOfFileToken {
            self.token_index += 1;
        }
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or report `'<text>' expected.`
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind, text: &str) -> bool {
        if self.parse_optional(kind) {
            return true;
        }
        self.parse_error_at_current_token(&format!("'{text}' expected."), diagnostic_codes::EXPECTED);
        false
    }

    /// Kind of the token before the current one.
    #[inline]
    pub(crate) fn previous_kind(&self) -> SyntaxKind {
        match self.token_index.checked_sub(1) {
            Some(index) => self.tokens[index].kind,
            None => SyntaxKind::Unknown,
        }
    }

    /// End of the token before the current one.
    #[inline]
    pub(crate) fn previous_end(&self) -> u32 {
        match self.token_index.checked_sub(1) {
            Some(index) => self.tokens[index].end,
            None => self.current().pos,
        }
    }

    /// Whether the token `offset` ahead is on the same line as the one before it.
    #[inline]
    pub(crate) fn next_on_same_line(&self, offset: usize) -> bool {
        !self.peek(offset).has_preceding_line_break
    }

    pub(crate) fn token_text(&self, token: Token) -> &str {
        self.arena
            .source_text()
            .get(token.start as usize..token.end as usize)
            .unwrap_or("")
    }

    pub(crate) fn parse_error_at_current_token(&mut self, message: &str, code: u32) {
        let token = self.current();
        // One diagnostic per position is enough to recover.
        if self
            .parse_diagnostics
            .last()
            .is_some_and(|last| last.start == token.start)
        {
            return;
        }
        self.parse_diagnostics.push(ParseDiagnostic {
            start: token.start,
            length: token.end - token.start,
            message: message.to_string(),
            code,
        });
    }

    #[inline]
    pub(crate) fn node_end(&self, index: NodeIndex) -> u32 {
        self.arena.get(index).map_or(0, |node| node.end)
    }
}
