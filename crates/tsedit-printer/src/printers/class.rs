use super::{
    Modifiers, StructurePrinter, write_docs, write_modifiers, write_parameters, write_return_type,
    write_type_parameters,
};
use crate::structures::{ClassStructure, MethodStructure, PropertyStructure};
use crate::writer::CodeWriter;

pub struct ClassPrinter {
    is_ambient: bool,
}

impl ClassPrinter {
    pub fn new(is_ambient: bool) -> Self {
        ClassPrinter { is_ambient }
    }

    fn print_property(writer: &mut CodeWriter, property: &PropertyStructure) {
        write_docs(writer, &property.docs);
        if let Some(scope) = property.scope {
            writer.write(scope.as_str()).write(" ");
        }
        if property.is_static {
            writer.write("static ");
        }
        if property.is_readonly {
            writer.write("readonly ");
        }
        writer.write(&property.name);
        if property.has_question_token {
            writer.write("?");
        }
        if let Some(type_text) = &property.type_text {
            writer.write(": ").write(type_text);
        }
        if let Some(initializer) = &property.initializer {
            writer.write(" = ").write(initializer);
        }
        writer.write(";");
    }

    fn print_method(writer: &mut CodeWriter, method: &MethodStructure, is_ambient: bool) {
        write_docs(writer, &method.docs);
        if let Some(scope) = method.scope {
            writer.write(scope.as_str()).write(" ");
        }
        if method.is_static {
            writer.write("static ");
        }
        if method.is_abstract {
            writer.write("abstract ");
        }
        if method.is_async {
            writer.write("async ");
        }
        writer.write(&method.name);
        write_type_parameters(writer, &method.type_parameters);
        write_parameters(writer, &method.parameters);
        write_return_type(writer, method.return_type.as_deref());
        if is_ambient || method.is_abstract {
            writer.write(";");
        } else {
            writer.inline_block(|writer| {
                if let Some(body_text) = &method.body_text {
                    writer.write(body_text);
                }
            });
        }
    }
}

impl StructurePrinter for ClassPrinter {
    type Structure = ClassStructure;

    fn print_separator(&self, writer: &mut CodeWriter, _: &ClassStructure, _: &ClassStructure) {
        if self.is_ambient {
            writer.new_line();
        } else {
            writer.blank_line();
        }
    }

    fn print_text(&self, writer: &mut CodeWriter, structure: &ClassStructure) {
        let is_ambient = self.is_ambient || structure.has_declare_keyword;
        write_docs(writer, &structure.docs);
        write_modifiers(
            writer,
            Modifiers {
                exported: structure.is_exported,
                default_export: structure.is_default_export,
                declare: structure.has_declare_keyword,
                is_abstract: structure.is_abstract,
                ..Modifiers::default()
            },
        );
        writer.write("class");
        if let Some(name) = &structure.name {
            writer.write(" ").write(name);
        }
        write_type_parameters(writer, &structure.type_parameters);
        if let Some(extends) = &structure.extends {
            writer.write(" extends ").write(extends);
        }
        if !structure.implements.is_empty() {
            writer
                .write(" implements ")
                .write(&structure.implements.join(", "));
        }
        writer.inline_block(|writer| {
            for property in &structure.properties {
                Self::print_property(writer, property);
                writer.new_line();
            }
            for (i, method) in structure.methods.iter().enumerate() {
                if i > 0 || !structure.properties.is_empty() {
                    if is_ambient {
                        writer.new_line_if_last_not();
                    } else {
                        writer.blank_line();
                    }
                }
                Self::print_method(writer, method, is_ambient);
            }
        });
    }
}
