//! Parser state - statement and declaration parsing methods

use super::base::NodeIndex;
use super::node::{ModifierFlags, NodeData, VariableDeclarationKind};
use super::state::{ParserState, diagnostic_codes};
use tsedit_common::text::{extend_over_trailing_comments, skip_whitespace};
use tsedit_scanner::{SyntaxKind, Token};

/// Where a statement list stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListContext {
    SourceFile,
    Block,
    Clause,
}

/// How tokens are skipped while looking for the end of a statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SkipMode {
    Expression,
    /// `<` and `>` nest like brackets.
    Type,
    /// Type annotation of a variable declaration: stops at `,` and `=`.
    DeclarationType,
    /// Initializer of a variable declaration: stops at `,`.
    DeclarationInitializer,
    /// Function return type: stops at the body's `{`.
    ReturnType,
    /// Type parameters and heritage clauses: stops at `{`, no line-break ends.
    Heritage,
}

impl SkipMode {
    const fn is_type(self) -> bool {
        matches!(
            self,
            Self::Type | Self::DeclarationType | Self::ReturnType | Self::Heritage
        )
    }
}

/// Tokens after which a `{` in a return type position opens the body.
fn is_type_ender(kind: SyntaxKind) -> bool {
    match kind {
        SyntaxKind::CloseBraceToken
        | SyntaxKind::CloseBracketToken
        | SyntaxKind::CloseParenToken
        | SyntaxKind::GreaterThanToken => true,
        SyntaxKind::KeyOfKeyword
        | SyntaxKind::ExtendsKeyword
        | SyntaxKind::InKeyword
        | SyntaxKind::AsKeyword => false,
        _ => kind.is_identifier_or_keyword() || kind.is_literal(),
    }
}

const fn matching_open(close: SyntaxKind) -> SyntaxKind {
    match close {
        SyntaxKind::CloseBraceToken => SyntaxKind::OpenBraceToken,
        SyntaxKind::CloseParenToken => SyntaxKind::OpenParenToken,
        _ => SyntaxKind::OpenBracketToken,
    }
}

impl ParserState {
    /// Parse a source file
    pub fn parse_source_file(&mut self) -> NodeIndex {
        tracing::trace!(file_name = %self.file_name, tokens = self.tokens.len(), "parse_source_file");

        let statements = self.parse_statement_list(ListContext::SourceFile);
        let end = self.arena.source_text().len() as u32;
        let is_declaration_file = self.is_declaration_file();
        let root = self.arena.add_node(
            SyntaxKind::SourceFile,
            ModifierFlags::empty(),
            0,
            0,
            end,
            NodeData::SourceFile {
                statements,
                is_declaration_file,
            },
        );
        self.arena.link_parents(root);
        self.parse_diagnostics.sort_by_key(|d| d.start);
        root
    }

    fn parse_statement_list(&mut self, context: ListContext) -> Vec<NodeIndex> {
        let mut statements = Vec::new();
        let mut last_end = self.previous_end();
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken => break,
                SyntaxKind::CloseBraceToken if context != ListContext::SourceFile => break,
                SyntaxKind::CaseKeyword | SyntaxKind::DefaultKeyword
                    if context == ListContext::Clause =>
                {
                    break;
                }
                _ => {}
            }
            let statement = self.parse_statement();
            self.attach_trivia(statement, last_end);
            last_end = self.node_end(statement);
            statements.push(statement);
        }
        statements
    }

    /// Give a list statement its leading comments and the comments that follow
    /// it on its last line.
    fn attach_trivia(&mut self, statement: NodeIndex, last_end: u32) {
        let Some(node) = self.arena.get(statement) else {
            return;
        };
        let text = self.arena.source_text();
        let pos = node.pos.max(last_end);
        let start = (skip_whitespace(text, pos as usize) as u32).min(node.start);
        let end = extend_over_trailing_comments(text, node.end as usize) as u32;
        if let Some(node) = self.arena.get_mut(statement) {
            node.pos = pos;
            node.start = start;
            node.end = end;
        }
    }

    fn finish_node(
        &mut self,
        kind: SyntaxKind,
        flags: ModifierFlags,
        first: Token,
        data: NodeData,
    ) -> NodeIndex {
        let end = self.previous_end().max(first.start);
        self.arena
            .add_node(kind, flags, first.pos, first.start, end, data)
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub(crate) fn parse_statement(&mut self) -> NodeIndex {
        let first = self.current();
        self.skip_decorators();

        let mut flags = ModifierFlags::empty();
        loop {
            match self.token() {
                SyntaxKind::ExportKeyword => match self.peek(1).kind {
                    SyntaxKind::EqualsToken => {
                        return self.parse_opaque_statement(
                            first,
                            flags | ModifierFlags::EXPORT,
                            SyntaxKind::ExportAssignment,
                        );
                    }
                    SyntaxKind::AsteriskToken
                    | SyntaxKind::OpenBraceToken
                    | SyntaxKind::AsKeyword => {
                        return self.parse_opaque_statement(
                            first,
                            flags | ModifierFlags::EXPORT,
                            SyntaxKind::ExportDeclaration,
                        );
                    }
                    SyntaxKind::TypeKeyword
                        if matches!(
                            self.peek(2).kind,
                            SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken
                        ) =>
                    {
                        return self.parse_opaque_statement(
                            first,
                            flags | ModifierFlags::EXPORT,
                            SyntaxKind::ExportDeclaration,
                        );
                    }
                    SyntaxKind::DefaultKeyword => {
                        flags |= ModifierFlags::EXPORT | ModifierFlags::DEFAULT;
                        self.next_token();
                        self.next_token();
                        if !self.is_start_of_default_export_declaration() {
                            return self.parse_opaque_statement(
                                first,
                                flags,
                                SyntaxKind::ExportAssignment,
                            );
                        }
                    }
                    _ => {
                        flags |= ModifierFlags::EXPORT;
                        self.next_token();
                    }
                },
                SyntaxKind::DeclareKeyword
                    if self.next_on_same_line(1) && self.is_declaration_after_declare() =>
                {
                    flags |= ModifierFlags::DECLARE;
                    self.next_token();
                }
                SyntaxKind::AbstractKeyword
                    if self.next_on_same_line(1)
                        && self.peek(1).kind == SyntaxKind::ClassKeyword =>
                {
                    flags |= ModifierFlags::ABSTRACT;
                    self.next_token();
                }
                SyntaxKind::AsyncKeyword
                    if self.next_on_same_line(1)
                        && self.peek(1).kind == SyntaxKind::FunctionKeyword =>
                {
                    flags |= ModifierFlags::ASYNC;
                    self.next_token();
                }
                SyntaxKind::ConstKeyword if self.peek(1).kind == SyntaxKind::EnumKeyword => {
                    flags |= ModifierFlags::CONST;
                    self.next_token();
                }
                _ => break,
            }
        }

        let same_line = self.next_on_same_line(1);
        let next = self.peek(1).kind;
        match self.token() {
            SyntaxKind::ClassKeyword => {
                self.parse_class_like(first, flags, SyntaxKind::ClassDeclaration)
            }
            SyntaxKind::InterfaceKeyword if same_line && next.is_identifier_or_keyword() => {
                self.parse_class_like(first, flags, SyntaxKind::InterfaceDeclaration)
            }
            SyntaxKind::EnumKeyword => {
                self.parse_class_like(first, flags, SyntaxKind::EnumDeclaration)
            }
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(first, flags),
            SyntaxKind::NamespaceKeyword | SyntaxKind::ModuleKeyword
                if same_line
                    && (next.is_identifier_or_keyword() || next == SyntaxKind::StringLiteral) =>
            {
                self.parse_module_declaration(first, flags)
            }
            SyntaxKind::GlobalKeyword if same_line && next == SyntaxKind::OpenBraceToken => {
                self.parse_module_declaration(first, flags)
            }
            SyntaxKind::TypeKeyword
                if same_line
                    && next.is_identifier_or_keyword()
                    && matches!(
                        self.peek(2).kind,
                        SyntaxKind::EqualsToken | SyntaxKind::LessThanToken
                    ) =>
            {
                self.parse_type_alias_declaration(first, flags)
            }
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => {
                self.parse_variable_statement(first, flags)
            }
            SyntaxKind::LetKeyword
                if same_line
                    && (next.is_identifier_or_keyword()
                        || matches!(
                            next,
                            SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken
                        )) =>
            {
                self.parse_variable_statement(first, flags)
            }
            SyntaxKind::UsingKeyword if same_line && next == SyntaxKind::Identifier => {
                self.parse_variable_statement(first, flags)
            }
            SyntaxKind::ImportKeyword
                if !matches!(next, SyntaxKind::OpenParenToken | SyntaxKind::DotToken) =>
            {
                self.parse_opaque_statement(first, flags, SyntaxKind::ImportDeclaration)
            }
            SyntaxKind::OpenBraceToken => self.parse_block(SyntaxKind::Block),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(first),
            SyntaxKind::IfKeyword => self.parse_if_statement(first),
            SyntaxKind::ForKeyword => self.parse_iteration_statement(first, SyntaxKind::ForStatement),
            SyntaxKind::WhileKeyword => {
                self.parse_iteration_statement(first, SyntaxKind::WhileStatement)
            }
            SyntaxKind::WithKeyword => {
                self.parse_iteration_statement(first, SyntaxKind::WithStatement)
            }
            SyntaxKind::DoKeyword => self.parse_do_statement(first),
            SyntaxKind::TryKeyword => self.parse_try_statement(first),
            SyntaxKind::SemicolonToken => {
                self.next_token();
                self.finish_node(SyntaxKind::EmptyStatement, flags, first, NodeData::None)
            }
            SyntaxKind::ReturnKeyword => {
                self.parse_restricted_statement(first, SyntaxKind::ReturnStatement)
            }
            SyntaxKind::ThrowKeyword => {
                self.parse_restricted_statement(first, SyntaxKind::ThrowStatement)
            }
            SyntaxKind::BreakKeyword => self.parse_jump_statement(first, SyntaxKind::BreakStatement),
            SyntaxKind::ContinueKeyword => {
                self.parse_jump_statement(first, SyntaxKind::ContinueStatement)
            }
            SyntaxKind::DebuggerKeyword => {
                self.next_token();
                self.parse_optional(SyntaxKind::SemicolonToken);
                self.finish_node(SyntaxKind::DebuggerStatement, flags, first, NodeData::None)
            }
            kind if kind.is_identifier_or_keyword() && next == SyntaxKind::ColonToken => {
                self.parse_labeled_statement(first)
            }
            _ => self.parse_expression_statement(first, flags),
        }
    }

    fn skip_decorators(&mut self) {
        while self.is_token(SyntaxKind::AtToken) {
            self.next_token();
            if self.token().is_identifier_or_keyword() {
                self.next_token();
            }
            while self.is_token(SyntaxKind::DotToken) && self.peek(1).kind.is_identifier_or_keyword()
            {
                self.next_token();
                self.next_token();
            }
            if self.is_token(SyntaxKind::OpenParenToken) {
                self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
            }
        }
    }

    fn is_declaration_after_declare(&self) -> bool {
        let next = self.peek(1).kind;
        match next {
            SyntaxKind::ClassKeyword
            | SyntaxKind::AbstractKeyword
            | SyntaxKind::EnumKeyword
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::InterfaceKeyword
            | SyntaxKind::NamespaceKeyword
            | SyntaxKind::ModuleKeyword
            | SyntaxKind::GlobalKeyword
            | SyntaxKind::TypeKeyword
            | SyntaxKind::VarKeyword
            | SyntaxKind::LetKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::UsingKeyword
            | SyntaxKind::AsyncKeyword => true,
            _ => false,
        }
    }

    fn is_start_of_default_export_declaration(&self) -> bool {
        match self.token() {
            SyntaxKind::ClassKeyword | SyntaxKind::FunctionKeyword => true,
            SyntaxKind::InterfaceKeyword => self.peek(1).kind.is_identifier_or_keyword(),
            SyntaxKind::AbstractKeyword => self.peek(1).kind == SyntaxKind::ClassKeyword,
            SyntaxKind::AsyncKeyword => self.peek(1).kind == SyntaxKind::FunctionKeyword,
            _ => false,
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// Classes, interfaces and enums: a name, an optional heritage and a
    /// braced member list whose contents are not parsed.
    fn parse_class_like(
        &mut self,
        first: Token,
        flags: ModifierFlags,
        kind: SyntaxKind,
    ) -> NodeIndex {
        self.next_token();
        let name = match self.token() {
            SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword => None,
            token if token.is_identifier_or_keyword() => {
                let name = self.token_text(self.current()).to_string();
                self.next_token();
                Some(name)
            }
            _ => None,
        };
        self.skip_to_statement_end(SkipMode::Heritage);
        self.skip_braced_body();
        self.finish_node(kind, flags, first, NodeData::Declaration { name, body: None })
    }

    fn parse_function_declaration(&mut self, first: Token, flags: ModifierFlags) -> NodeIndex {
        self.next_token();
        self.parse_optional(SyntaxKind::AsteriskToken);
        let name = if self.token().is_identifier_or_keyword() {
            let name = self.token_text(self.current()).to_string();
            self.next_token();
            Some(name)
        } else {
            None
        };
        if self.is_token(SyntaxKind::LessThanToken) {
            self.skip_balanced(SyntaxKind::LessThanToken, SyntaxKind::GreaterThanToken);
        }
        if self.is_token(SyntaxKind::OpenParenToken) {
            self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
        } else {
            self.parse_error_at_current_token("'(' expected.", diagnostic_codes::EXPECTED);
        }
        if self.parse_optional(SyntaxKind::ColonToken) {
            self.skip_to_statement_end(SkipMode::ReturnType);
        }
        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            Some(self.parse_block(SyntaxKind::Block))
        } else {
            self.parse_optional(SyntaxKind::SemicolonToken);
            None
        };
        self.finish_node(
            SyntaxKind::FunctionDeclaration,
            flags,
            first,
            NodeData::Declaration { name, body },
        )
    }

    /// `namespace A.B.C { }`, `module "m";`, `declare global { }`.
    ///
    /// Dotted names are kept as one declaration whose body is the innermost block.
    fn parse_module_declaration(&mut self, first: Token, flags: ModifierFlags) -> NodeIndex {
        let name = if self.is_token(SyntaxKind::GlobalKeyword) {
            self.next_token();
            "global".to_string()
        } else {
            self.next_token();
            let mut name = self.token_text(self.current()).to_string();
            let is_string = self.is_token(SyntaxKind::StringLiteral);
            self.next_token();
            while !is_string
                && self.is_token(SyntaxKind::DotToken)
                && self.peek(1).kind.is_identifier_or_keyword()
            {
                self.next_token();
                name.push('.');
                name.push_str(self.token_text(self.current()));
                self.next_token();
            }
            name
        };
        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            Some(self.parse_block(SyntaxKind::ModuleBlock))
        } else {
            self.parse_optional(SyntaxKind::SemicolonToken);
            None
        };
        self.finish_node(
            SyntaxKind::ModuleDeclaration,
            flags,
            first,
            NodeData::Declaration {
                name: Some(name),
                body,
            },
        )
    }

    fn parse_type_alias_declaration(&mut self, first: Token, flags: ModifierFlags) -> NodeIndex {
        self.next_token();
        let name = self.token_text(self.current()).to_string();
        self.next_token();
        self.skip_to_statement_end(SkipMode::Type);
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.finish_node(
            SyntaxKind::TypeAliasDeclaration,
            flags,
            first,
            NodeData::Declaration {
                name: Some(name),
                body: None,
            },
        )
    }

    fn parse_variable_statement(&mut self, first: Token, flags: ModifierFlags) -> NodeIndex {
        let declaration_kind = match self.token() {
            SyntaxKind::VarKeyword => VariableDeclarationKind::Var,
            SyntaxKind::ConstKeyword => VariableDeclarationKind::Const,
            SyntaxKind::UsingKeyword => VariableDeclarationKind::Using,
            _ => VariableDeclarationKind::Let,
        };
        self.next_token();

        let mut declarations = Vec::new();
        loop {
            let declaration_first = self.current();
            let name = match self.token() {
                SyntaxKind::OpenBraceToken => {
                    self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
                    self.text_since(declaration_first)
                }
                SyntaxKind::OpenBracketToken => {
                    self.skip_balanced(SyntaxKind::OpenBracketToken, SyntaxKind::CloseBracketToken);
                    self.text_since(declaration_first)
                }
                token if token.is_identifier_or_keyword() => {
                    let name = self.token_text(declaration_first).to_string();
                    self.next_token();
                    Some(name)
                }
                _ => {
                    self.parse_error_at_current_token(
                        "Variable declaration expected.",
                        diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                    );
                    None
                }
            };
            self.parse_optional(SyntaxKind::ExclamationToken);
            if self.parse_optional(SyntaxKind::ColonToken) {
                self.skip_to_statement_end(SkipMode::DeclarationType);
            }
            if self.parse_optional(SyntaxKind::EqualsToken) {
                self.skip_to_statement_end(SkipMode::DeclarationInitializer);
            }
            declarations.push(self.finish_node(
                SyntaxKind::VariableDeclaration,
                ModifierFlags::empty(),
                declaration_first,
                NodeData::VariableDeclaration { name },
            ));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.finish_node(
            SyntaxKind::VariableStatement,
            flags,
            first,
            NodeData::VariableStatement {
                declaration_kind,
                declarations,
            },
        )
    }

    fn text_since(&self, first: Token) -> Option<String> {
        self.arena
            .source_text()
            .get(first.start as usize..self.previous_end() as usize)
            .map(str::to_string)
    }

    // =========================================================================
    // Containers
    // =========================================================================

    /// `{ statements }` as a `Block` or `ModuleBlock`.
    fn parse_block(&mut self, kind: SyntaxKind) -> NodeIndex {
        let open = self.current();
        self.next_token();
        let statements = self.parse_statement_list(ListContext::Block);
        let close_brace_start = if self.is_token(SyntaxKind::CloseBraceToken) {
            let start = self.current().start;
            self.next_token();
            Some(start)
        } else {
            self.parse_error_at_current_token("'}' expected.", diagnostic_codes::EXPECTED);
            None
        };
        self.finish_node(
            kind,
            ModifierFlags::empty(),
            open,
            NodeData::Block {
                statements,
                open_brace_end: open.end,
                close_brace_start,
            },
        )
    }

    fn parse_switch_statement(&mut self, first: Token) -> NodeIndex {
        self.next_token();
        if self.is_token(SyntaxKind::OpenParenToken) {
            self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
        }
        let mut clauses = Vec::new();
        if self.parse_expected(SyntaxKind::OpenBraceToken, "{") {
            loop {
                match self.token() {
                    SyntaxKind::CaseKeyword | SyntaxKind::DefaultKeyword => {
                        clauses.push(self.parse_case_or_default_clause());
                    }
                    SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken => break,
                    _ => {
                        self.parse_error_at_current_token(
                            "'case' or 'default' expected.",
                            diagnostic_codes::EXPECTED,
                        );
                        self.next_token();
                    }
                }
            }
            self.parse_expected(SyntaxKind::CloseBraceToken, "}");
        }
        self.finish_node(
            SyntaxKind::SwitchStatement,
            ModifierFlags::empty(),
            first,
            NodeData::Switch { clauses },
        )
    }

    fn parse_case_or_default_clause(&mut self) -> NodeIndex {
        let first = self.current();
        let kind = if self.is_token(SyntaxKind::CaseKeyword) {
            SyntaxKind::CaseClause
        } else {
            SyntaxKind::DefaultClause
        };
        self.next_token();
        if kind == SyntaxKind::CaseClause {
            self.skip_case_expression();
        }
        let colon_end = if self.is_token(SyntaxKind::ColonToken) {
            let end = self.current().end;
            self.next_token();
            end
        } else {
            self.parse_error_at_current_token("':' expected.", diagnostic_codes::EXPECTED);
            self.previous_end()
        };
        let statements = self.parse_statement_list(ListContext::Clause);
        let end = statements
            .last()
            .map_or(colon_end, |&last| self.node_end(last));
        self.arena.add_node(
            kind,
            ModifierFlags::empty(),
            first.pos,
            first.start,
            end,
            NodeData::Clause {
                colon_end,
                statements,
            },
        )
    }

    /// Skip a `case` expression up to its `:`, pairing conditional `? :`.
    fn skip_case_expression(&mut self) {
        let mut depth = 0u32;
        let mut pending_conditionals = 0u32;
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken => break,
                SyntaxKind::ColonToken if depth == 0 => {
                    if pending_conditionals == 0 {
                        break;
                    }
                    pending_conditionals -= 1;
                }
                SyntaxKind::QuestionToken if depth == 0 => pending_conditionals += 1,
                SyntaxKind::OpenBraceToken
                | SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken => depth += 1,
                SyntaxKind::CloseBraceToken
                | SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.next_token();
        }
    }

    // =========================================================================
    // Compound statements
    // =========================================================================

    /// The statement nested in an `if`, loop or label, unless the enclosing
    /// block ends first.
    fn parse_embedded_statement(&mut self, children: &mut Vec<NodeIndex>) {
        if matches!(
            self.token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            self.parse_error_at_current_token(
                "Declaration or statement expected.",
                diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
            );
            return;
        }
        children.push(self.parse_statement());
    }

    fn parse_if_statement(&mut self, first: Token) -> NodeIndex {
        self.next_token();
        if self.is_token(SyntaxKind::OpenParenToken) {
            self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
        } else {
            self.parse_error_at_current_token("'(' expected.", diagnostic_codes::EXPECTED);
        }
        let mut children = Vec::new();
        self.parse_embedded_statement(&mut children);
        if self.parse_optional(SyntaxKind::ElseKeyword) {
            self.parse_embedded_statement(&mut children);
        }
        self.finish_node(
            SyntaxKind::IfStatement,
            ModifierFlags::empty(),
            first,
            NodeData::Compound { children },
        )
    }

    /// `for`, `while` and `with`: a parenthesized head and one statement.
    fn parse_iteration_statement(&mut self, first: Token, kind: SyntaxKind) -> NodeIndex {
        self.next_token();
        self.parse_optional(SyntaxKind::AwaitKeyword);
        if self.is_token(SyntaxKind::OpenParenToken) {
            self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
        } else {
            self.parse_error_at_current_token("'(' expected.", diagnostic_codes::EXPECTED);
        }
        let mut children = Vec::new();
        self.parse_embedded_statement(&mut children);
        self.finish_node(
            kind,
            ModifierFlags::empty(),
            first,
            NodeData::Compound { children },
        )
    }

    fn parse_do_statement(&mut self, first: Token) -> NodeIndex {
        self.next_token();
        let mut children = Vec::new();
        self.parse_embedded_statement(&mut children);
        if self.parse_expected(SyntaxKind::WhileKeyword, "while")
            && self.is_token(SyntaxKind::OpenParenToken)
        {
            self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
        }
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.finish_node(
            SyntaxKind::DoStatement,
            ModifierFlags::empty(),
            first,
            NodeData::Compound { children },
        )
    }

    fn parse_try_statement(&mut self, first: Token) -> NodeIndex {
        self.next_token();
        let mut children = Vec::new();
        if self.is_token(SyntaxKind::OpenBraceToken) {
            children.push(self.parse_block(SyntaxKind::Block));
        }
        if self.parse_optional(SyntaxKind::CatchKeyword) {
            if self.is_token(SyntaxKind::OpenParenToken) {
                self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
            }
            if self.is_token(SyntaxKind::OpenBraceToken) {
                children.push(self.parse_block(SyntaxKind::Block));
            }
        }
        if self.parse_optional(SyntaxKind::FinallyKeyword)
            && self.is_token(SyntaxKind::OpenBraceToken)
        {
            children.push(self.parse_block(SyntaxKind::Block));
        }
        if children.is_empty() {
            self.parse_error_at_current_token("'{' expected.", diagnostic_codes::EXPECTED);
        }
        self.finish_node(
            SyntaxKind::TryStatement,
            ModifierFlags::empty(),
            first,
            NodeData::Compound { children },
        )
    }

    fn parse_labeled_statement(&mut self, first: Token) -> NodeIndex {
        self.next_token();
        self.next_token();
        let mut children = Vec::new();
        self.parse_embedded_statement(&mut children);
        self.finish_node(
            SyntaxKind::LabeledStatement,
            ModifierFlags::empty(),
            first,
            NodeData::Compound { children },
        )
    }

    /// `return` and `throw`: a line break right after the keyword ends the statement.
    fn parse_restricted_statement(&mut self, first: Token, kind: SyntaxKind) -> NodeIndex {
        self.next_token();
        let current = self.current();
        if !current.has_preceding_line_break
            && !matches!(
                current.kind,
                SyntaxKind::SemicolonToken
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::EndOfFileToken
            )
        {
            self.skip_to_statement_end(SkipMode::Expression);
        }
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.finish_node(kind, ModifierFlags::empty(), first, NodeData::None)
    }

    fn parse_jump_statement(&mut self, first: Token, kind: SyntaxKind) -> NodeIndex {
        self.next_token();
        if self.next_on_same_line(0) && self.token().is_identifier_or_keyword() {
            self.next_token();
        }
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.finish_node(kind, ModifierFlags::empty(), first, NodeData::None)
    }

    /// Imports, re-exports and `export =` / `export default <expr>`.
    fn parse_opaque_statement(
        &mut self,
        first: Token,
        flags: ModifierFlags,
        kind: SyntaxKind,
    ) -> NodeIndex {
        self.skip_to_statement_end(SkipMode::Expression);
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.finish_node(kind, flags, first, NodeData::None)
    }

    fn parse_expression_statement(&mut self, first: Token, flags: ModifierFlags) -> NodeIndex {
        let before = self.token_index;
        self.skip_to_statement_end(SkipMode::Expression);
        if self.token_index == before && !self.is_token(SyntaxKind::SemicolonToken) {
            // Stray closing bracket: report it and make it its own statement.
            self.parse_error_at_current_token(
                "Declaration or statement expected.",
                diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
            );
            self.next_token();
        }
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.finish_node(SyntaxKind::ExpressionStatement, flags, first, NodeData::None)
    }

    // =========================================================================
    // Token skipping
    // =========================================================================

    /// Skip tokens up to the end of the current statement.
    ///
    /// Stops before `;`, before an unbalanced closing bracket, and before a
    /// token on a new line that cannot continue the expression when the
    /// previous token can end one.
    fn skip_to_statement_end(&mut self, mode: SkipMode) {
        let mut stack: Vec<SyntaxKind> = Vec::new();
        let mut consumed = false;
        loop {
            let token = self.current();
            let kind = token.kind;
            if kind == SyntaxKind::EndOfFileToken {
                break;
            }
            if stack.is_empty() {
                let previous = self.previous_kind();
                let previous_ends = previous.can_end_expression()
                    || (mode.is_type() && previous == SyntaxKind::GreaterThanToken);
                if consumed
                    && mode != SkipMode::Heritage
                    && token.has_preceding_line_break
                    && previous_ends
                    && !kind.continues_expression()
                {
                    break;
                }
                let stop = match kind {
                    SyntaxKind::SemicolonToken
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::CloseParenToken
                    | SyntaxKind::CloseBracketToken => true,
                    SyntaxKind::CommaToken => matches!(
                        mode,
                        SkipMode::DeclarationType | SkipMode::DeclarationInitializer
                    ),
                    SyntaxKind::EqualsToken => mode == SkipMode::DeclarationType,
                    SyntaxKind::OpenBraceToken => match mode {
                        SkipMode::Heritage => true,
                        SkipMode::ReturnType => consumed && is_type_ender(self.previous_kind()),
                        _ => false,
                    },
                    _ => false,
                };
                if stop {
                    break;
                }
            }
            match kind {
                SyntaxKind::OpenBraceToken
                | SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken => stack.push(kind),
                SyntaxKind::LessThanToken if mode.is_type() => stack.push(kind),
                SyntaxKind::GreaterThanToken if mode.is_type() => {
                    if stack.last() == Some(&SyntaxKind::LessThanToken) {
                        stack.pop();
                    }
                }
                SyntaxKind::CloseBraceToken
                | SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken => {
                    let open = matching_open(kind);
                    while let Some(top) = stack.pop() {
                        if top == open {
                            break;
                        }
                    }
                }
                _ => {}
            }
            self.next_token();
            consumed = true;
        }
    }

    /// Skip from an opening token through its matching closing token.
    fn skip_balanced(&mut self, open: SyntaxKind, close: SyntaxKind) {
        let mut depth = 0u32;
        loop {
            let kind = self.token();
            if kind == SyntaxKind::EndOfFileToken {
                self.parse_error_at_current_token(
                    if close == SyntaxKind::CloseParenToken {
                        "')' expected."
                    } else {
                        "Closing bracket expected."
                    },
                    diagnostic_codes::EXPECTED,
                );
                return;
            }
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    self.next_token();
                    return;
                }
            }
            self.next_token();
        }
    }

    /// Skip a `{ ... }` member list. Reports a missing `{` or `}`.
    fn skip_braced_body(&mut self) {
        if !self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_error_at_current_token("'{' expected.", diagnostic_codes::EXPECTED);
            return;
        }
        let mut depth = 0u32;
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken => {
                    self.parse_error_at_current_token("'}' expected.", diagnostic_codes::EXPECTED);
                    return;
                }
                SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseBraceToken => {
                    depth -= 1;
                    if depth == 0 {
                        self.next_token();
                        return;
                    }
                }
                _ => {}
            }
            self.next_token();
        }
    }
}
