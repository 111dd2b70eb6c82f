use super::{Modifiers, StructurePrinter, write_docs, write_modifiers, write_type_parameters};
use crate::structures::TypeAliasStructure;
use crate::writer::CodeWriter;

pub struct TypeAliasPrinter;

impl StructurePrinter for TypeAliasPrinter {
    type Structure = TypeAliasStructure;

    fn print_separator(&self, writer: &mut CodeWriter, _: &TypeAliasStructure, _: &TypeAliasStructure) {
        writer.new_line();
    }

    fn print_text(&self, writer: &mut CodeWriter, structure: &TypeAliasStructure) {
        write_docs(writer, &structure.docs);
        write_modifiers(
            writer,
            Modifiers {
                exported: structure.is_exported,
                declare: structure.has_declare_keyword,
                ..Modifiers::default()
            },
        );
        writer.write("type ").write(&structure.name);
        write_type_parameters(writer, &structure.type_parameters);
        writer.write(" = ").write(&structure.type_text).write(";");
    }
}
