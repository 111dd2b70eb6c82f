//! Token and node kinds.
//!
//! Only the kinds needed to segment a file into statements are modelled.
//! Keywords that never start or delimit a statement (`new`, `typeof`,
//! `this`, ...) are scanned as plain identifiers.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // Names
    Identifier,
    PrivateIdentifier,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    GreaterThanToken,
    EqualsToken,
    EqualsGreaterThanToken,
    PlusPlusToken,
    MinusMinusToken,
    AsteriskToken,
    BarToken,
    AmpersandToken,
    ExclamationToken,
    QuestionToken,
    ColonToken,
    AtToken,
    /// Any other operator (`+`, `===`, `&&`, `+=`, `??`, ...).
    OperatorToken,

    // Keywords
    AbstractKeyword,
    AsKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DeclareKeyword,
    DefaultKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    GlobalKeyword,
    IfKeyword,
    ImplementsKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    InterfaceKeyword,
    KeyOfKeyword,
    LetKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    ReturnKeyword,
    SatisfiesKeyword,
    SwitchKeyword,
    ThrowKeyword,
    TryKeyword,
    TypeKeyword,
    UsingKeyword,
    VarKeyword,
    WhileKeyword,
    WithKeyword,

    // Nodes
    SourceFile,
    Block,
    ModuleBlock,
    ClassDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    FunctionDeclaration,
    ModuleDeclaration,
    TypeAliasDeclaration,
    VariableStatement,
    VariableDeclaration,
    ImportDeclaration,
    ExportDeclaration,
    ExportAssignment,
    ExpressionStatement,
    EmptyStatement,
    IfStatement,
    ForStatement,
    WhileStatement,
    DoStatement,
    WithStatement,
    TryStatement,
    LabeledStatement,
    ReturnStatement,
    ThrowStatement,
    BreakStatement,
    ContinueStatement,
    DebuggerStatement,
    SwitchStatement,
    CaseClause,
    DefaultClause,
}

impl SyntaxKind {
    /// Look up the keyword kind for an identifier's text.
    pub fn from_keyword(text: &str) -> Option<Self> {
        let kind = match text {
            "abstract" => Self::AbstractKeyword,
            "as" => Self::AsKeyword,
            "async" => Self::AsyncKeyword,
            "await" => Self::AwaitKeyword,
            "break" => Self::BreakKeyword,
            "case" => Self::CaseKeyword,
            "catch" => Self::CatchKeyword,
            "class" => Self::ClassKeyword,
            "const" => Self::ConstKeyword,
            "continue" => Self::ContinueKeyword,
            "debugger" => Self::DebuggerKeyword,
            "declare" => Self::DeclareKeyword,
            "default" => Self::DefaultKeyword,
            "do" => Self::DoKeyword,
            "else" => Self::ElseKeyword,
            "enum" => Self::EnumKeyword,
            "export" => Self::ExportKeyword,
            "extends" => Self::ExtendsKeyword,
            "finally" => Self::FinallyKeyword,
            "for" => Self::ForKeyword,
            "function" => Self::FunctionKeyword,
            "global" => Self::GlobalKeyword,
            "if" => Self::IfKeyword,
            "implements" => Self::ImplementsKeyword,
            "import" => Self::ImportKeyword,
            "in" => Self::InKeyword,
            "instanceof" => Self::InstanceOfKeyword,
            "interface" => Self::InterfaceKeyword,
            "keyof" => Self::KeyOfKeyword,
            "let" => Self::LetKeyword,
            "module" => Self::ModuleKeyword,
            "namespace" => Self::NamespaceKeyword,
            "return" => Self::ReturnKeyword,
            "satisfies" => Self::SatisfiesKeyword,
            "switch" => Self::SwitchKeyword,
            "throw" => Self::ThrowKeyword,
            "try" => Self::TryKeyword,
            "type" => Self::TypeKeyword,
            "using" => Self::UsingKeyword,
            "var" => Self::VarKeyword,
            "while" => Self::WhileKeyword,
            "with" => Self::WithKeyword,
            _ => return None,
        };
        Some(kind)
    }

    pub const fn is_keyword(self) -> bool {
        (self as u16) >= (Self::AbstractKeyword as u16) && (self as u16) <= (Self::WithKeyword as u16)
    }

    pub const fn is_identifier_or_keyword(self) -> bool {
        matches!(self, Self::Identifier) || self.is_keyword()
    }

    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::NumericLiteral
                | Self::StringLiteral
                | Self::RegularExpressionLiteral
                | Self::NoSubstitutionTemplateLiteral
                | Self::TemplateTail
        )
    }

    /// Whether a token of this kind can be the last token of an expression.
    ///
    /// Statement keywords (`return`, `if`, ...) cannot; contextual keywords
    /// can, since they double as identifiers.
    pub const fn can_end_expression(self) -> bool {
        match self {
            Self::Identifier
            | Self::PrivateIdentifier
            | Self::CloseParenToken
            | Self::CloseBracketToken
            | Self::CloseBraceToken
            | Self::PlusPlusToken
            | Self::MinusMinusToken
            | Self::ExclamationToken => true,
            Self::AbstractKeyword
            | Self::AsyncKeyword
            | Self::AwaitKeyword
            | Self::DeclareKeyword
            | Self::GlobalKeyword
            | Self::KeyOfKeyword
            | Self::LetKeyword
            | Self::ModuleKeyword
            | Self::NamespaceKeyword
            | Self::TypeKeyword
            | Self::UsingKeyword => true,
            _ => self.is_literal(),
        }
    }

    /// Whether a token of this kind at the start of a line continues the
    /// previous line's expression, suppressing automatic semicolon insertion.
    pub const fn continues_expression(self) -> bool {
        matches!(
            self,
            Self::DotToken
                | Self::QuestionDotToken
                | Self::CommaToken
                | Self::EqualsToken
                | Self::EqualsGreaterThanToken
                | Self::OpenParenToken
                | Self::OpenBracketToken
                | Self::QuestionToken
                | Self::ColonToken
                | Self::LessThanToken
                | Self::GreaterThanToken
                | Self::AsteriskToken
                | Self::BarToken
                | Self::AmpersandToken
                | Self::OperatorToken
                | Self::TemplateHead
                | Self::NoSubstitutionTemplateLiteral
                | Self::AsKeyword
                | Self::SatisfiesKeyword
                | Self::InKeyword
                | Self::InstanceOfKeyword
                | Self::ExtendsKeyword
        )
    }

    /// Statement kinds that carry a body of their own (blank-line separated).
    pub const fn is_declaration_with_members(self) -> bool {
        matches!(
            self,
            Self::ClassDeclaration
                | Self::InterfaceDeclaration
                | Self::EnumDeclaration
                | Self::ModuleDeclaration
        )
    }
}
