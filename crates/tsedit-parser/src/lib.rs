//! Statement-level TypeScript parser for the tsedit crates.
//!
//! This crate provides:
//! - `NodeArena` - Flat storage of statement nodes with parent links
//! - `ParserState` - Parser producing a `NodeArena` from source text
//! - `ParseDiagnostic` - Recoverable syntax errors reported while parsing

pub mod parser;
pub use parser::{
    ModifierFlags, Node, NodeArena, NodeData, NodeIndex, NodePath, ParseDiagnostic, ParserState,
    VariableDeclarationKind, parse_source_file,
};

pub use tsedit_scanner::SyntaxKind;
