//! Per-kind accessors: `add_*`, `insert_*` and `get_*` for every declaration
//! kind a container can hold.

use crate::error::{ManipulationError, Result};
use crate::insertion::SpacingRule;
use crate::lookup::{self, NameOrPredicate};
use crate::nodes::{
    ClassDeclaration, EnumDeclaration, FunctionDeclaration, InterfaceDeclaration,
    NamespaceDeclaration, TypeAliasDeclaration, TypedNode, VariableDeclaration, VariableStatement,
};
use crate::statemented::StatementedNode;
use crate::validation::verify_and_get_index;
use tsedit_parser::SyntaxKind;
use tsedit_printer::{
    ClassPrinter, ClassStructure, CodeWriter, EnumPrinter, EnumStructure, FunctionPrinter,
    FunctionStructure, InterfacePrinter, InterfaceStructure, NamespacePrinter, NamespaceStructure,
    StructurePrinter, TypeAliasPrinter, TypeAliasStructure, VariableStatementPrinter,
    VariableStatementStructure,
};

/// A structure that prints into one or more statements of a single kind.
pub(crate) trait InsertableStructure: Sized {
    type Node: TypedNode;

    /// Statements produced by printing the structure.
    fn occupied_statements(&self) -> usize {
        1
    }

    fn spacing(_structures: &[Self]) -> SpacingRule {
        SpacingRule::Never
    }

    fn print(writer: &mut CodeWriter, structures: &[Self], is_ambient: bool);
}

impl InsertableStructure for ClassStructure {
    type Node = ClassDeclaration;

    fn print(writer: &mut CodeWriter, structures: &[Self], is_ambient: bool) {
        ClassPrinter::new(is_ambient).print_texts(writer, structures);
    }
}

impl InsertableStructure for EnumStructure {
    type Node = EnumDeclaration;

    fn print(writer: &mut CodeWriter, structures: &[Self], _is_ambient: bool) {
        EnumPrinter.print_texts(writer, structures);
    }
}

impl InsertableStructure for FunctionStructure {
    type Node = FunctionDeclaration;

    /// Overloads come first; the implementation is the last statement.
    fn occupied_statements(&self) -> usize {
        self.statement_count()
    }

    fn spacing(structures: &[Self]) -> SpacingRule {
        SpacingRule::AmbientFunction {
            first_declare: structures.first().is_some_and(|f| f.has_declare_keyword),
            last_declare: structures.last().is_some_and(|f| f.has_declare_keyword),
        }
    }

    fn print(writer: &mut CodeWriter, structures: &[Self], is_ambient: bool) {
        FunctionPrinter::new(is_ambient).print_texts(writer, structures);
    }
}

impl InsertableStructure for InterfaceStructure {
    type Node = InterfaceDeclaration;

    fn print(writer: &mut CodeWriter, structures: &[Self], _is_ambient: bool) {
        InterfacePrinter.print_texts(writer, structures);
    }
}

impl InsertableStructure for NamespaceStructure {
    type Node = NamespaceDeclaration;

    fn print(writer: &mut CodeWriter, structures: &[Self], is_ambient: bool) {
        NamespacePrinter::new(is_ambient).print_texts(writer, structures);
    }
}

impl InsertableStructure for TypeAliasStructure {
    type Node = TypeAliasDeclaration;

    fn spacing(_structures: &[Self]) -> SpacingRule {
        SpacingRule::SameKind(SyntaxKind::TypeAliasDeclaration)
    }

    fn print(writer: &mut CodeWriter, structures: &[Self], _is_ambient: bool) {
        TypeAliasPrinter.print_texts(writer, structures);
    }
}

impl InsertableStructure for VariableStatementStructure {
    type Node = VariableStatement;

    fn spacing(_structures: &[Self]) -> SpacingRule {
        SpacingRule::SameKind(SyntaxKind::VariableStatement)
    }

    fn print(writer: &mut CodeWriter, structures: &[Self], _is_ambient: bool) {
        VariableStatementPrinter.print_texts(writer, structures);
    }
}

impl StatementedNode<'_> {
    pub(crate) fn insert_structures<S: InsertableStructure>(
        &mut self,
        index: isize,
        structures: &[S],
    ) -> Result<Vec<S::Node>> {
        if structures.is_empty() {
            verify_and_get_index(index, self.statement_count()?)?;
            return Ok(Vec::new());
        }
        let is_ambient = self.is_ambient();
        let range = self.insert_with_writer(index, S::spacing(structures), |writer| {
            S::print(writer, structures, is_ambient);
        })?;

        let expected: usize = structures.iter().map(S::occupied_statements).sum();
        if range.len() != expected {
            return Err(ManipulationError::InvalidOperation(format!(
                "expected {expected} inserted statements but found {}",
                range.len()
            )));
        }
        let statements = self.statements_in(range)?;
        let file = &*self.file;
        let mut offset = 0;
        let mut inserted = Vec::with_capacity(structures.len());
        for structure in structures {
            let occupied = statements
                .get(offset..offset + structure.occupied_statements())
                .ok_or_else(unexpected_kind::<S::Node>)?;
            offset += occupied.len();
            let mut typed = occupied.iter().map(|&node| S::Node::cast(file, node));
            let Some(Some(last)) = typed.next_back() else {
                return Err(unexpected_kind::<S::Node>());
            };
            if typed.any(|node| node.is_none()) {
                return Err(unexpected_kind::<S::Node>());
            }
            inserted.push(last);
        }
        Ok(inserted)
    }

    /// Direct children of kind `T` that its getter lists.
    pub(crate) fn get_typed<T: TypedNode>(&self) -> Result<Vec<T>> {
        let file = &*self.file;
        Ok(self
            .get_statements()?
            .into_iter()
            .filter_map(|node| T::cast(file, node))
            .filter(|node| node.is_listed(file))
            .collect())
    }

    pub(crate) fn get_typed_by<T: TypedNode>(
        &self,
        name_or_predicate: &NameOrPredicate<'_, T>,
    ) -> Result<Option<T>> {
        let items = self.get_typed::<T>()?;
        Ok(lookup::find_by_name_or_predicate(&*self.file, items, name_or_predicate))
    }

    pub(crate) fn get_typed_by_or_throw<T: TypedNode>(
        &self,
        name_or_predicate: &NameOrPredicate<'_, T>,
    ) -> Result<T> {
        let items = self.get_typed::<T>()?;
        lookup::find_by_name_or_predicate_or_throw(&*self.file, items, name_or_predicate)
    }
}

fn unexpected_kind<T: TypedNode>() -> ManipulationError {
    ManipulationError::InvalidOperation(format!(
        "the inserted text did not produce a {}",
        T::ENTITY
    ))
}

macro_rules! declaration_accessors {
    (
        $structure:ty => $node:ty,
        $add:ident, $add_many:ident, $insert:ident, $insert_many:ident,
        $get_all:ident, $get:ident, $get_or_throw:ident
    ) => {
        impl StatementedNode<'_> {
            pub fn $add(&mut self, structure: &$structure) -> Result<$node> {
                let count = self.statement_count()?;
                self.$insert(count as isize, structure)
            }

            pub fn $add_many(&mut self, structures: &[$structure]) -> Result<Vec<$node>> {
                let count = self.statement_count()?;
                self.$insert_many(count as isize, structures)
            }

            pub fn $insert(&mut self, index: isize, structure: &$structure) -> Result<$node> {
                self.$insert_many(index, std::slice::from_ref(structure))?
                    .pop()
                    .ok_or_else(unexpected_kind::<$node>)
            }

            pub fn $insert_many(
                &mut self,
                index: isize,
                structures: &[$structure],
            ) -> Result<Vec<$node>> {
                self.insert_structures(index, structures)
            }

            pub fn $get_all(&self) -> Result<Vec<$node>> {
                self.get_typed()
            }

            pub fn $get<'p>(
                &self,
                name_or_predicate: impl Into<NameOrPredicate<'p, $node>>,
            ) -> Result<Option<$node>> {
                self.get_typed_by(&name_or_predicate.into())
            }

            pub fn $get_or_throw<'p>(
                &self,
                name_or_predicate: impl Into<NameOrPredicate<'p, $node>>,
            ) -> Result<$node> {
                self.get_typed_by_or_throw(&name_or_predicate.into())
            }
        }
    };
}

declaration_accessors!(
    ClassStructure => ClassDeclaration,
    add_class, add_classes, insert_class, insert_classes,
    get_classes, get_class, get_class_or_throw
);
declaration_accessors!(
    EnumStructure => EnumDeclaration,
    add_enum, add_enums, insert_enum, insert_enums,
    get_enums, get_enum, get_enum_or_throw
);
declaration_accessors!(
    FunctionStructure => FunctionDeclaration,
    add_function, add_functions, insert_function, insert_functions,
    get_functions, get_function, get_function_or_throw
);
declaration_accessors!(
    InterfaceStructure => InterfaceDeclaration,
    add_interface, add_interfaces, insert_interface, insert_interfaces,
    get_interfaces, get_interface, get_interface_or_throw
);
declaration_accessors!(
    NamespaceStructure => NamespaceDeclaration,
    add_namespace, add_namespaces, insert_namespace, insert_namespaces,
    get_namespaces, get_namespace, get_namespace_or_throw
);
declaration_accessors!(
    TypeAliasStructure => TypeAliasDeclaration,
    add_type_alias, add_type_aliases, insert_type_alias, insert_type_aliases,
    get_type_aliases, get_type_alias, get_type_alias_or_throw
);
declaration_accessors!(
    VariableStatementStructure => VariableStatement,
    add_variable_statement, add_variable_statements, insert_variable_statement,
    insert_variable_statements, get_variable_statements, get_variable_statement,
    get_variable_statement_or_throw
);

impl StatementedNode<'_> {
    /// Declarations of every variable statement, in document order.
    pub fn get_variable_declarations(&self) -> Result<Vec<VariableDeclaration>> {
        let file = &*self.file;
        Ok(self
            .get_variable_statements()?
            .into_iter()
            .flat_map(|statement| statement.declarations(file))
            .collect())
    }

    pub fn get_variable_declaration<'p>(
        &self,
        name_or_predicate: impl Into<NameOrPredicate<'p, VariableDeclaration>>,
    ) -> Result<Option<VariableDeclaration>> {
        let declarations = self.get_variable_declarations()?;
        Ok(lookup::find_by_name_or_predicate(
            &*self.file,
            declarations,
            &name_or_predicate.into(),
        ))
    }

    pub fn get_variable_declaration_or_throw<'p>(
        &self,
        name_or_predicate: impl Into<NameOrPredicate<'p, VariableDeclaration>>,
    ) -> Result<VariableDeclaration> {
        let declarations = self.get_variable_declarations()?;
        lookup::find_by_name_or_predicate_or_throw(
            &*self.file,
            declarations,
            &name_or_predicate.into(),
        )
    }
}
