//! Statement-level editing of TypeScript source files.
//!
//! A `SourceFile` is parsed into statements; a `StatementedNode` edits the
//! statements of the file, of a function or namespace body, of a block or of a
//! `case` clause. Declarations are added from plain structures
//! (`ClassStructure`, `FunctionStructure`, ...) and printed with the file's
//! `ManipulationSettings`.
//!
//! ```
//! use tsedit::{ClassStructure, SourceFile, TypedNode};
//!
//! let mut file = SourceFile::new("a.ts", "");
//! let class = file.statements().add_class(&ClassStructure::new("A")).unwrap();
//! assert_eq!(file.text(), "class A {\n}\n");
//! assert_eq!(class.name(&file), Some("A"));
//! ```

pub mod tracing_config;

pub use tsedit_common as common;
pub use tsedit_parser as parser;
pub use tsedit_printer as printer;
pub use tsedit_scanner as scanner;
pub use tsedit_statements as statements;

pub use tsedit_common::{
    IndentationText, ManipulationSettings, NewLineKind, QuoteKind, SettingsError, TextRange,
};
pub use tsedit_parser::{NodeIndex, SyntaxKind};
pub use tsedit_printer::{
    ClassStructure, EnumMemberStructure, EnumStructure, EnumValue, FunctionOverloadStructure,
    FunctionStructure, InterfaceStructure, MethodSignatureStructure, MethodStructure,
    NamespaceDeclarationKind, NamespaceStructure, ParameterStructure, PropertySignatureStructure,
    PropertyStructure, Scope, StatementedStructure, TypeAliasStructure, TypeParameterStructure,
    VariableDeclarationKind, VariableDeclarationStructure, VariableStatementStructure,
};
pub use tsedit_statements::{
    ClassDeclaration, EntityKind, EnumDeclaration, FunctionDeclaration, InterfaceDeclaration,
    ManipulationError, NameOrPredicate, NamespaceDeclaration, SourceFile, StatementText,
    StatementedNode, TypeAliasDeclaration, TypedNode, VariableDeclaration, VariableStatement,
};
