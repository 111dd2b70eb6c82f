//! Plain-data descriptions of declarations to generate.
//!
//! All structures deserialize from camelCase JSON with every field optional,
//! so `{"name": "A"}` is a valid `ClassStructure`.

use serde::{Deserialize, Deserializer, Serialize};

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    Public,
    Protected,
    Private,
}

impl Scope {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeParameterStructure {
    pub name: String,
    pub constraint: Option<String>,
    pub default: Option<String>,
}

impl TypeParameterStructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterStructure {
    pub name: String,
    pub is_rest_parameter: bool,
    pub has_question_token: bool,
    #[serde(rename = "type")]
    pub type_text: Option<String>,
    pub initializer: Option<String>,
}

impl ParameterStructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, type_text: impl Into<String>) -> Self {
        self.type_text = Some(type_text.into());
        self
    }
}

// =============================================================================
// Classes
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyStructure {
    pub name: String,
    pub docs: Vec<String>,
    pub scope: Option<Scope>,
    pub is_static: bool,
    pub is_readonly: bool,
    pub has_question_token: bool,
    #[serde(rename = "type")]
    pub type_text: Option<String>,
    pub initializer: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodStructure {
    pub name: String,
    pub docs: Vec<String>,
    pub scope: Option<Scope>,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_async: bool,
    pub type_parameters: Vec<TypeParameterStructure>,
    pub parameters: Vec<ParameterStructure>,
    pub return_type: Option<String>,
    pub body_text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassStructure {
    /// `None` only for `export default class { }`.
    pub name: Option<String>,
    pub docs: Vec<String>,
    pub is_exported: bool,
    pub is_default_export: bool,
    pub has_declare_keyword: bool,
    pub is_abstract: bool,
    pub type_parameters: Vec<TypeParameterStructure>,
    pub extends: Option<String>,
    pub implements: Vec<String>,
    pub properties: Vec<PropertyStructure>,
    pub methods: Vec<MethodStructure>,
}

impl ClassStructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

// =============================================================================
// Interfaces
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertySignatureStructure {
    pub name: String,
    pub docs: Vec<String>,
    pub has_question_token: bool,
    pub is_readonly: bool,
    #[serde(rename = "type")]
    pub type_text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodSignatureStructure {
    pub name: String,
    pub docs: Vec<String>,
    pub has_question_token: bool,
    pub type_parameters: Vec<TypeParameterStructure>,
    pub parameters: Vec<ParameterStructure>,
    pub return_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterfaceStructure {
    pub name: String,
    pub docs: Vec<String>,
    pub is_exported: bool,
    pub is_default_export: bool,
    pub has_declare_keyword: bool,
    pub type_parameters: Vec<TypeParameterStructure>,
    pub extends: Vec<String>,
    pub properties: Vec<PropertySignatureStructure>,
    pub methods: Vec<MethodSignatureStructure>,
}

impl InterfaceStructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Enums
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Number(f64),
    String(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumMemberStructure {
    pub name: String,
    pub docs: Vec<String>,
    /// Printed as a literal. Ignored when `initializer` is set.
    pub value: Option<EnumValue>,
    pub initializer: Option<String>,
}

impl EnumMemberStructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumStructure {
    pub name: String,
    pub docs: Vec<String>,
    pub is_exported: bool,
    pub has_declare_keyword: bool,
    pub is_const: bool,
    pub members: Vec<EnumMemberStructure>,
}

impl EnumStructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Functions
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionOverloadStructure {
    pub docs: Vec<String>,
    pub is_exported: bool,
    pub is_default_export: bool,
    pub has_declare_keyword: bool,
    pub is_async: bool,
    pub is_generator: bool,
    pub type_parameters: Vec<TypeParameterStructure>,
    pub parameters: Vec<ParameterStructure>,
    pub return_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionStructure {
    pub name: Option<String>,
    pub docs: Vec<String>,
    pub is_exported: bool,
    pub is_default_export: bool,
    pub has_declare_keyword: bool,
    pub is_async: bool,
    pub is_generator: bool,
    pub type_parameters: Vec<TypeParameterStructure>,
    pub parameters: Vec<ParameterStructure>,
    pub return_type: Option<String>,
    /// Each overload becomes its own statement before the implementation.
    pub overloads: Vec<FunctionOverloadStructure>,
    #[serde(flatten)]
    pub body: StatementedStructure,
}

impl FunctionStructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Number of statements the printed text parses into.
    pub fn statement_count(&self) -> usize {
        self.overloads.len() + 1
    }
}

// =============================================================================
// Namespaces
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamespaceDeclarationKind {
    #[default]
    Namespace,
    Module,
    Global,
}

impl NamespaceDeclarationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::Module => "module",
            Self::Global => "global",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamespaceStructure {
    pub name: String,
    pub docs: Vec<String>,
    pub is_exported: bool,
    pub is_default_export: bool,
    pub has_declare_keyword: bool,
    pub declaration_kind: NamespaceDeclarationKind,
    #[serde(flatten)]
    pub body: StatementedStructure,
}

impl NamespaceStructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Type aliases and variables
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeAliasStructure {
    pub name: String,
    pub docs: Vec<String>,
    pub is_exported: bool,
    pub has_declare_keyword: bool,
    pub type_parameters: Vec<TypeParameterStructure>,
    #[serde(rename = "type")]
    pub type_text: String,
}

impl TypeAliasStructure {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableDeclarationKind {
    Var,
    #[default]
    Let,
    Const,
}

impl VariableDeclarationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariableDeclarationStructure {
    pub name: String,
    pub has_exclamation_token: bool,
    #[serde(rename = "type")]
    pub type_text: Option<String>,
    pub initializer: Option<String>,
}

impl VariableDeclarationStructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariableStatementStructure {
    pub docs: Vec<String>,
    pub is_exported: bool,
    pub has_declare_keyword: bool,
    pub declaration_kind: VariableDeclarationKind,
    pub declarations: Vec<VariableDeclarationStructure>,
}

impl VariableStatementStructure {
    pub fn new(
        declaration_kind: VariableDeclarationKind,
        declarations: Vec<VariableDeclarationStructure>,
    ) -> Self {
        Self {
            declaration_kind,
            declarations,
            ..Self::default()
        }
    }
}

// =============================================================================
// Statement containers
// =============================================================================

/// The statements of a container, grouped by declaration kind.
///
/// `None` lists are left untouched by `set`; `Some(vec![])` removes every
/// declaration of that kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatementedStructure {
    pub classes: Option<Vec<ClassStructure>>,
    pub enums: Option<Vec<EnumStructure>>,
    pub functions: Option<Vec<FunctionStructure>>,
    pub interfaces: Option<Vec<InterfaceStructure>>,
    pub namespaces: Option<Vec<NamespaceStructure>>,
    pub type_aliases: Option<Vec<TypeAliasStructure>>,
    pub variable_statements: Option<Vec<VariableStatementStructure>>,
    /// `Some(None)` (an explicit `null`) removes the body or its statements.
    #[serde(deserialize_with = "deserialize_some", skip_serializing_if = "Option::is_none")]
    pub body_text: Option<Option<String>>,
}
