use super::{
    Modifiers, StructurePrinter, write_docs, write_modifiers, write_parameters, write_return_type,
    write_type_parameters,
};
use crate::structures::InterfaceStructure;
use crate::writer::CodeWriter;

pub struct InterfacePrinter;

impl StructurePrinter for InterfacePrinter {
    type Structure = InterfaceStructure;

    fn print_text(&self, writer: &mut CodeWriter, structure: &InterfaceStructure) {
        write_docs(writer, &structure.docs);
        write_modifiers(
            writer,
            Modifiers {
                exported: structure.is_exported,
                default_export: structure.is_default_export,
                declare: structure.has_declare_keyword,
                ..Modifiers::default()
            },
        );
        writer.write("interface ").write(&structure.name);
        write_type_parameters(writer, &structure.type_parameters);
        if !structure.extends.is_empty() {
            writer.write(" extends ").write(&structure.extends.join(", "));
        }
        writer.inline_block(|writer| {
            for property in &structure.properties {
                write_docs(writer, &property.docs);
                if property.is_readonly {
                    writer.write("readonly ");
                }
                writer.write(&property.name);
                if property.has_question_token {
                    writer.write("?");
                }
                write_return_type(writer, property.type_text.as_deref());
                writer.write(";").new_line();
            }
            for method in &structure.methods {
                write_docs(writer, &method.docs);
                writer.write(&method.name);
                if method.has_question_token {
                    writer.write("?");
                }
                write_type_parameters(writer, &method.type_parameters);
                write_parameters(writer, &method.parameters);
                write_return_type(writer, method.return_type.as_deref());
                writer.write(";").new_line();
            }
        });
    }
}
