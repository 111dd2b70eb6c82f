//! Typed handles over declaration statements.
//!
//! Handles are plain indices: they are `Copy` and only valid for the tree
//! version they were obtained from. Any edit to the file invalidates them.

use crate::error::EntityKind;
use crate::source_file::SourceFile;
use tsedit_parser::{ModifierFlags, NodeIndex, SyntaxKind};

pub trait TypedNode: Copy {
    const KIND: SyntaxKind;
    const ENTITY: EntityKind;

    /// Wrap without checking the kind.
    fn wrap(node: NodeIndex) -> Self;

    fn node(self) -> NodeIndex;

    /// Wrap if `node` has this handle's kind.
    fn cast(file: &SourceFile, node: NodeIndex) -> Option<Self> {
        (file.arena().kind_of(node) == Some(Self::KIND)).then(|| Self::wrap(node))
    }

    fn name(self, file: &SourceFile) -> Option<&str> {
        file.arena().name_of(self.node())
    }

    fn matches_name(self, file: &SourceFile, name: &str) -> bool {
        self.name(file) == Some(name)
    }

    /// Whether the statement is listed by the kind's getter.
    fn is_listed(self, _file: &SourceFile) -> bool {
        true
    }

    fn text(self, file: &SourceFile) -> &str {
        file.node_text(self.node())
    }

    fn is_exported(self, file: &SourceFile) -> bool {
        file.arena()
            .get(self.node())
            .is_some_and(|node| node.has_modifier(ModifierFlags::EXPORT))
    }

    fn has_declare_keyword(self, file: &SourceFile) -> bool {
        file.arena()
            .get(self.node())
            .is_some_and(|node| node.has_modifier(ModifierFlags::DECLARE))
    }
}

macro_rules! typed_node {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $entity:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name(NodeIndex);

        impl TypedNode for $name {
            const KIND: SyntaxKind = SyntaxKind::$kind;
            const ENTITY: EntityKind = EntityKind::$entity;

            fn wrap(node: NodeIndex) -> Self {
                $name(node)
            }

            fn node(self) -> NodeIndex {
                self.0
            }
        }
    };
}

typed_node!(ClassDeclaration, ClassDeclaration, Class);
typed_node!(EnumDeclaration, EnumDeclaration, Enum);
typed_node!(InterfaceDeclaration, InterfaceDeclaration, Interface);
typed_node!(
    /// `namespace`, `module` and `declare global` declarations.
    NamespaceDeclaration,
    ModuleDeclaration,
    Namespace
);
typed_node!(TypeAliasDeclaration, TypeAliasDeclaration, TypeAlias);
typed_node!(VariableDeclaration, VariableDeclaration, VariableDeclaration);

/// A function declaration. Overload signatures are function declarations
/// without a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FunctionDeclaration(NodeIndex);

impl FunctionDeclaration {
    pub fn has_body(self, file: &SourceFile) -> bool {
        file.arena().has_body(self.0)
    }

    pub fn is_ambient(self, file: &SourceFile) -> bool {
        file.arena().is_ambient_or_in_ambient_context(self.0)
    }

    pub fn is_overload(self, file: &SourceFile) -> bool {
        !self.has_body(file) && !self.is_ambient(file)
    }
}

impl TypedNode for FunctionDeclaration {
    const KIND: SyntaxKind = SyntaxKind::FunctionDeclaration;
    const ENTITY: EntityKind = EntityKind::Function;

    fn wrap(node: NodeIndex) -> Self {
        FunctionDeclaration(node)
    }

    fn node(self) -> NodeIndex {
        self.0
    }

    /// Overload signatures of implemented functions are hidden.
    fn is_listed(self, file: &SourceFile) -> bool {
        self.is_ambient(file) || self.has_body(file)
    }
}

/// `var`/`let`/`const` statement. Matches a name when any of its
/// declarations has it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VariableStatement(NodeIndex);

impl VariableStatement {
    pub fn declarations(self, file: &SourceFile) -> Vec<VariableDeclaration> {
        file.arena()
            .variable_declarations(self.0)
            .iter()
            .map(|&node| VariableDeclaration::wrap(node))
            .collect()
    }
}

impl TypedNode for VariableStatement {
    const KIND: SyntaxKind = SyntaxKind::VariableStatement;
    const ENTITY: EntityKind = EntityKind::VariableStatement;

    fn wrap(node: NodeIndex) -> Self {
        VariableStatement(node)
    }

    fn node(self) -> NodeIndex {
        self.0
    }

    /// Name of the first declaration.
    fn name(self, file: &SourceFile) -> Option<&str> {
        let first = *file.arena().variable_declarations(self.0).first()?;
        file.arena().name_of(first)
    }

    fn matches_name(self, file: &SourceFile, name: &str) -> bool {
        file.arena()
            .variable_declarations(self.0)
            .iter()
            .any(|&declaration| file.arena().name_of(declaration) == Some(name))
    }
}
