use super::{
    Modifiers, StatementedPrinter, StructurePrinter, write_docs, write_modifiers,
    write_parameters, write_return_type, write_type_parameters,
};
use crate::structures::{FunctionOverloadStructure, FunctionStructure};
use crate::writer::CodeWriter;

pub struct FunctionPrinter {
    is_ambient: bool,
}

impl FunctionPrinter {
    pub fn new(is_ambient: bool) -> Self {
        FunctionPrinter { is_ambient }
    }

    fn print_overload(writer: &mut CodeWriter, name: Option<&str>, overload: &FunctionOverloadStructure) {
        write_docs(writer, &overload.docs);
        write_modifiers(
            writer,
            Modifiers {
                exported: overload.is_exported,
                default_export: overload.is_default_export,
                declare: overload.has_declare_keyword,
                is_async: overload.is_async,
                ..Modifiers::default()
            },
        );
        write_function_name(writer, name, overload.is_generator);
        write_type_parameters(writer, &overload.type_parameters);
        write_parameters(writer, &overload.parameters);
        write_return_type(writer, overload.return_type.as_deref());
        writer.write(";").new_line();
    }
}

fn write_function_name(writer: &mut CodeWriter, name: Option<&str>, is_generator: bool) {
    writer.write("function");
    if is_generator {
        writer.write("*");
    }
    if let Some(name) = name {
        writer.write(" ").write(name);
    }
}

impl StructurePrinter for FunctionPrinter {
    type Structure = FunctionStructure;

    fn print_separator(
        &self,
        writer: &mut CodeWriter,
        previous: &FunctionStructure,
        current: &FunctionStructure,
    ) {
        if self.is_ambient || (previous.has_declare_keyword && current.has_declare_keyword) {
            writer.new_line();
        } else {
            writer.blank_line();
        }
    }

    fn print_text(&self, writer: &mut CodeWriter, structure: &FunctionStructure) {
        let name = structure.name.as_deref();
        for overload in &structure.overloads {
            Self::print_overload(writer, name, overload);
        }
        write_docs(writer, &structure.docs);
        write_modifiers(
            writer,
            Modifiers {
                exported: structure.is_exported,
                default_export: structure.is_default_export,
                declare: structure.has_declare_keyword,
                is_async: structure.is_async,
                ..Modifiers::default()
            },
        );
        write_function_name(writer, name, structure.is_generator);
        write_type_parameters(writer, &structure.type_parameters);
        write_parameters(writer, &structure.parameters);
        write_return_type(writer, structure.return_type.as_deref());
        if self.is_ambient || structure.has_declare_keyword {
            writer.write(";");
        } else {
            writer.inline_block(|writer| {
                StatementedPrinter::new(false).print_text(writer, &structure.body);
            });
        }
    }
}
