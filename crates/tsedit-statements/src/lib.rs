//! Statement container editing.
//!
//! A `StatementedNode` edits the ordered statements of a source file, a
//! block, a function or namespace body, or a `case`/`default` clause. Every
//! edit splices generated text into the `SourceFile` and re-parses it.

mod container;
pub mod error;
pub use error::{EntityKind, ManipulationError, Result};

mod declarations;
mod insertion;
mod lookup;
pub use lookup::NameOrPredicate;

pub mod nodes;
pub use nodes::{
    ClassDeclaration, EnumDeclaration, FunctionDeclaration, InterfaceDeclaration,
    NamespaceDeclaration, TypeAliasDeclaration, TypedNode, VariableDeclaration, VariableStatement,
};

mod removal;
mod set;

pub mod source_file;
pub use source_file::SourceFile;

pub mod statemented;
pub use statemented::{StatementText, StatementedNode};

pub mod validation;
