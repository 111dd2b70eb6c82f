//! Errors raised by statement manipulation.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManipulationError {
    #[error("index {index} is out of bounds for a collection of length {length}")]
    OutOfBounds { index: isize, length: usize },
    #[error("Expected to find {0}.")]
    NotFound(String),
    #[error("Not implemented: {0}")]
    NotImplemented(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, ManipulationError>;

/// What a lookup was looking for, used in `NotFound` messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Class,
    Enum,
    Function,
    Interface,
    Namespace,
    TypeAlias,
    VariableStatement,
    VariableDeclaration,
    Statement,
}

impl EntityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Function => "function",
            Self::Interface => "interface",
            Self::Namespace => "namespace",
            Self::TypeAlias => "type alias",
            Self::VariableStatement => "variable statement",
            Self::VariableDeclaration => "variable declaration",
            Self::Statement => "statement",
        }
    }

    pub fn named(self, name: &str) -> ManipulationError {
        ManipulationError::NotFound(format!("{self} named '{name}'"))
    }

    pub fn matching_condition(self) -> ManipulationError {
        ManipulationError::NotFound(format!("{self} matching the provided condition"))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
