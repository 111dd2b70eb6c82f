//! Replacing a container's declarations from a `StatementedStructure`.

use crate::container::ContainerShape;
use crate::declarations::InsertableStructure;
use crate::error::Result;
use crate::nodes::TypedNode;
use crate::statemented::{StatementText, StatementedNode};
use tracing::debug;
use tsedit_printer::StatementedStructure;

impl StatementedNode<'_> {
    /// Replace every declaration kind present in `structure`, then apply its
    /// body text.
    ///
    /// Kinds whose list is absent are left alone. `body_text: Some(None)`
    /// removes the body of a function or namespace and empties any other
    /// container.
    pub fn set(&mut self, structure: &StatementedStructure) -> Result<&mut Self> {
        if let Some(classes) = &structure.classes {
            self.replace_declarations(classes)?;
        }
        if let Some(enums) = &structure.enums {
            self.replace_declarations(enums)?;
        }
        if let Some(functions) = &structure.functions {
            self.replace_declarations(functions)?;
        }
        if let Some(interfaces) = &structure.interfaces {
            self.replace_declarations(interfaces)?;
        }
        if let Some(namespaces) = &structure.namespaces {
            self.replace_declarations(namespaces)?;
        }
        if let Some(type_aliases) = &structure.type_aliases {
            self.replace_declarations(type_aliases)?;
        }
        if let Some(variable_statements) = &structure.variable_statements {
            self.replace_declarations(variable_statements)?;
        }

        match &structure.body_text {
            Some(Some(body_text)) => {
                self.ensure_body()?;
                let has_statements = self.statement_count()? > 0;
                self.add_statements(StatementText::writer(|writer| {
                    if has_statements {
                        writer.new_line();
                    }
                    writer.write(body_text);
                }))?;
            }
            Some(None) => match self.shape()? {
                ContainerShape::Bodyable { body: Some(_) } => self.remove_body()?,
                shape if shape.is_bodyable() => {}
                _ => {
                    let count = self.statement_count()?;
                    if count > 0 {
                        self.remove_statements((0, count - 1))?;
                    }
                }
            },
            None => {}
        }
        Ok(self)
    }

    fn replace_declarations<S: InsertableStructure>(&mut self, structures: &[S]) -> Result<()> {
        self.remove_all_of::<S::Node>()?;
        let count = self.statement_count()?;
        self.insert_structures(count as isize, structures)?;
        Ok(())
    }

    /// Remove every statement of `T`'s kind, including hidden overloads.
    fn remove_all_of<T: TypedNode>(&mut self) -> Result<()> {
        let arena = self.file.arena();
        let indices: Vec<usize> = self
            .get_statements()?
            .iter()
            .enumerate()
            .filter(|&(_, &node)| arena.kind_of(node) == Some(T::KIND))
            .map(|(index, _)| index)
            .collect();
        debug!(kind = %T::ENTITY, count = indices.len(), "remove declarations");
        for index in indices.into_iter().rev() {
            self.remove_statement(index)?;
        }
        Ok(())
    }
}
