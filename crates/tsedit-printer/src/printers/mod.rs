//! Structure printers.
//!
//! Each printer writes the text of one declaration kind. `is_ambient` is set
//! when the text lands in an ambient context (a `declare` container or a
//! declaration file), where function and method bodies are omitted.

mod class;
mod enums;
mod function;
mod interface;
mod namespace;
mod statemented;
mod type_alias;
mod variable;

pub use class::ClassPrinter;
pub use enums::EnumPrinter;
pub use function::FunctionPrinter;
pub use interface::InterfacePrinter;
pub use namespace::NamespacePrinter;
pub use statemented::StatementedPrinter;
pub use type_alias::TypeAliasPrinter;
pub use variable::VariableStatementPrinter;

use crate::structures::{ParameterStructure, TypeParameterStructure};
use crate::writer::CodeWriter;

pub trait StructurePrinter {
    type Structure;

    fn print_text(&self, writer: &mut CodeWriter, structure: &Self::Structure);

    /// Written between two consecutive structures of one `print_texts` call.
    fn print_separator(
        &self,
        writer: &mut CodeWriter,
        _previous: &Self::Structure,
        _current: &Self::Structure,
    ) {
        writer.blank_line();
    }

    fn print_texts(&self, writer: &mut CodeWriter, structures: &[Self::Structure]) {
        let mut previous = None;
        for structure in structures {
            if let Some(previous) = previous {
                self.print_separator(writer, previous, structure);
            }
            self.print_text(writer, structure);
            previous = Some(structure);
        }
    }
}

/// Keywords written before a declaration, in source order.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Modifiers {
    pub exported: bool,
    pub default_export: bool,
    pub declare: bool,
    pub is_abstract: bool,
    pub is_const: bool,
    pub is_async: bool,
}

pub(crate) fn write_modifiers(writer: &mut CodeWriter, modifiers: Modifiers) {
    let keywords = [
        (modifiers.exported, "export "),
        (modifiers.default_export, "default "),
        (modifiers.declare, "declare "),
        (modifiers.is_abstract, "abstract "),
        (modifiers.is_const, "const "),
        (modifiers.is_async, "async "),
    ];
    for (present, keyword) in keywords {
        if present {
            writer.write(keyword);
        }
    }
}

/// JSDoc blocks, one per entry.
pub(crate) fn write_docs(writer: &mut CodeWriter, docs: &[String]) {
    for doc in docs {
        writer.write("/**").new_line();
        for line in doc.lines() {
            writer.write(" *");
            if !line.is_empty() {
                writer.write(" ").write(line);
            }
            writer.new_line();
        }
        writer.write(" */").new_line();
    }
}

pub(crate) fn write_type_parameters(writer: &mut CodeWriter, parameters: &[TypeParameterStructure]) {
    if parameters.is_empty() {
        return;
    }
    writer.write("<");
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            writer.write(", ");
        }
        writer.write(&parameter.name);
        if let Some(constraint) = &parameter.constraint {
            writer.write(" extends ").write(constraint);
        }
        if let Some(default) = &parameter.default {
            writer.write(" = ").write(default);
        }
    }
    writer.write(">");
}

pub(crate) fn write_parameters(writer: &mut CodeWriter, parameters: &[ParameterStructure]) {
    writer.write("(");
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            writer.write(", ");
        }
        if parameter.is_rest_parameter {
            writer.write("...");
        }
        writer.write(&parameter.name);
        if parameter.has_question_token {
            writer.write("?");
        }
        if let Some(type_text) = &parameter.type_text {
            writer.write(": ").write(type_text);
        }
        if let Some(initializer) = &parameter.initializer {
            writer.write(" = ").write(initializer);
        }
    }
    writer.write(")");
}

pub(crate) fn write_return_type(writer: &mut CodeWriter, return_type: Option<&str>) {
    if let Some(return_type) = return_type {
        writer.write(": ").write(return_type);
    }
}
