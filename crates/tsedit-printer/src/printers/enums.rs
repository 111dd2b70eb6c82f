use super::{Modifiers, StructurePrinter, write_docs, write_modifiers};
use crate::structures::{EnumStructure, EnumValue};
use crate::writer::CodeWriter;

pub struct EnumPrinter;

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl StructurePrinter for EnumPrinter {
    type Structure = EnumStructure;

    fn print_text(&self, writer: &mut CodeWriter, structure: &EnumStructure) {
        write_docs(writer, &structure.docs);
        write_modifiers(
            writer,
            Modifiers {
                exported: structure.is_exported,
                declare: structure.has_declare_keyword,
                is_const: structure.is_const,
                ..Modifiers::default()
            },
        );
        writer.write("enum ").write(&structure.name);
        writer.inline_block(|writer| {
            let last = structure.members.len().saturating_sub(1);
            for (i, member) in structure.members.iter().enumerate() {
                write_docs(writer, &member.docs);
                writer.write(&member.name);
                match (&member.initializer, &member.value) {
                    (Some(initializer), _) => {
                        writer.write(" = ").write(initializer);
                    }
                    (None, Some(EnumValue::Number(value))) => {
                        writer.write(" = ").write(&format_number(*value));
                    }
                    (None, Some(EnumValue::String(value))) => {
                        writer.write(" = ").quote(value);
                    }
                    (None, None) => {}
                }
                if i < last {
                    writer.write(",");
                }
                writer.new_line();
            }
        });
    }
}
