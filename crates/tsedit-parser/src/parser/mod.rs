//! Parser module: node storage, access helpers and statement parsing.

pub mod base;
pub use base::{NodeIndex, NodePath};

pub mod node;
pub use node::{ModifierFlags, Node, NodeArena, NodeData, VariableDeclarationKind};

mod node_access;
mod node_arena;

pub mod state;
pub use state::{ParseDiagnostic, ParserState};

mod state_statements;

/// Parse `source_text` and return the arena, the root node and diagnostics.
pub fn parse_source_file(
    file_name: &str,
    source_text: &str,
) -> (NodeArena, NodeIndex, Vec<ParseDiagnostic>) {
    let mut parser = ParserState::new(file_name.to_string(), source_text.to_string());
    let root = parser.parse_source_file();
    let diagnostics = parser.take_diagnostics();
    (parser.into_arena(), root, diagnostics)
}
