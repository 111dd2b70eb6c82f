use super::{Modifiers, StructurePrinter, write_docs, write_modifiers};
use crate::structures::VariableStatementStructure;
use crate::writer::CodeWriter;

pub struct VariableStatementPrinter;

impl StructurePrinter for VariableStatementPrinter {
    type Structure = VariableStatementStructure;

    fn print_separator(
        &self,
        writer: &mut CodeWriter,
        _: &VariableStatementStructure,
        _: &VariableStatementStructure,
    ) {
        writer.new_line();
    }

    fn print_text(&self, writer: &mut CodeWriter, structure: &VariableStatementStructure) {
        write_docs(writer, &structure.docs);
        write_modifiers(
            writer,
            Modifiers {
                exported: structure.is_exported,
                declare: structure.has_declare_keyword,
                ..Modifiers::default()
            },
        );
        writer.write(structure.declaration_kind.as_str()).write(" ");
        for (i, declaration) in structure.declarations.iter().enumerate() {
            if i > 0 {
                writer.write(", ");
            }
            writer.write(&declaration.name);
            if declaration.has_exclamation_token {
                writer.write("!");
            }
            if let Some(type_text) = &declaration.type_text {
                writer.write(": ").write(type_text);
            }
            if let Some(initializer) = &declaration.initializer {
                writer.write(" = ").write(initializer);
            }
        }
        writer.write(";");
    }
}
