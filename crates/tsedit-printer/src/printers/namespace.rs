use super::{Modifiers, StatementedPrinter, StructurePrinter, write_docs, write_modifiers};
use crate::structures::{NamespaceDeclarationKind, NamespaceStructure};
use crate::writer::CodeWriter;

pub struct NamespacePrinter {
    is_ambient: bool,
}

impl NamespacePrinter {
    pub fn new(is_ambient: bool) -> Self {
        NamespacePrinter { is_ambient }
    }
}

impl StructurePrinter for NamespacePrinter {
    type Structure = NamespaceStructure;

    fn print_text(&self, writer: &mut CodeWriter, structure: &NamespaceStructure) {
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
        writer.write(structure.declaration_kind.as_str());
        if structure.declaration_kind != NamespaceDeclarationKind::Global {
            writer.write(" ").write(&structure.name);
        }
        let is_ambient = self.is_ambient || structure.has_declare_keyword;
        writer.inline_block(|writer| {
            StatementedPrinter::new(is_ambient).print_text(writer, &structure.body);
        });
    }
}
