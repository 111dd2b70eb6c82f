//! Node types stored in the `NodeArena`.
//!
//! Only statement-level structure is modelled: declarations keep their name
//! and body, containers keep their ordered statements, and everything else is
//! an opaque span of source text.

use super::base::NodeIndex;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tsedit_scanner::SyntaxKind;

bitflags! {
    /// Modifiers written before a declaration.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u8 {
        const EXPORT = 1 << 0;
        const DEFAULT = 1 << 1;
        const DECLARE = 1 << 2;
        const ASYNC = 1 << 3;
        const ABSTRACT = 1 << 4;
        const CONST = 1 << 5;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableDeclarationKind {
    Var,
    Let,
    Const,
    Using,
}

impl VariableDeclarationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
            Self::Using => "using",
        }
    }
}

/// Per-kind payload of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    None,
    SourceFile {
        statements: Vec<NodeIndex>,
        is_declaration_file: bool,
    },
    /// `Block` and `ModuleBlock`.
    Block {
        statements: Vec<NodeIndex>,
        open_brace_end: u32,
        /// `None` when the block is not closed before the end of the file.
        close_brace_start: Option<u32>,
    },
    /// Classes, interfaces, enums, functions, namespaces and type aliases.
    Declaration {
        name: Option<String>,
        body: Option<NodeIndex>,
    },
    VariableStatement {
        declaration_kind: VariableDeclarationKind,
        declarations: Vec<NodeIndex>,
    },
    VariableDeclaration {
        name: Option<String>,
    },
    Switch {
        clauses: Vec<NodeIndex>,
    },
    /// `case` and `default` clauses.
    Clause {
        colon_end: u32,
        statements: Vec<NodeIndex>,
    },
    /// Statements that nest other statements: `if`, loops, `try`, labels.
    Compound {
        children: Vec<NodeIndex>,
    },
}

/// A parsed node.
///
/// `pos` is the full start (including leading trivia), `start` the first
/// character of the node. Statements in a list own the comments that lead
/// them and the comments that follow them on their last line, so for those
/// `start` may point at a comment and `end` may extend past the last token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: SyntaxKind,
    pub flags: ModifierFlags,
    pub pos: u32,
    pub start: u32,
    pub end: u32,
    pub parent: NodeIndex,
    pub data: NodeData,
}

impl Node {
    #[inline]
    pub fn has_modifier(&self, flag: ModifierFlags) -> bool {
        self.flags.contains(flag)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.end - self.start
    }
}

/// Flat node storage. Nodes reference each other by `NodeIndex`.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) source_text: String,
}
