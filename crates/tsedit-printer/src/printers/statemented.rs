use super::{
    ClassPrinter, EnumPrinter, FunctionPrinter, InterfacePrinter, NamespacePrinter,
    StructurePrinter, TypeAliasPrinter, VariableStatementPrinter,
};
use crate::structures::StatementedStructure;
use crate::writer::CodeWriter;

/// Prints the contents of a body: each kind's group in a fixed order, groups
/// separated by a blank line, then the body text.
pub struct StatementedPrinter {
    is_ambient: bool,
}

impl StatementedPrinter {
    pub fn new(is_ambient: bool) -> Self {
        StatementedPrinter { is_ambient }
    }
}

fn print_group<P: StructurePrinter>(
    writer: &mut CodeWriter,
    wrote_group: &mut bool,
    printer: P,
    structures: Option<&Vec<P::Structure>>,
) {
    let Some(structures) = structures.filter(|structures| !structures.is_empty()) else {
        return;
    };
    if *wrote_group {
        writer.blank_line_if_last_not();
    }
    printer.print_texts(writer, structures);
    *wrote_group = true;
}

impl StructurePrinter for StatementedPrinter {
    type Structure = StatementedStructure;

    fn print_text(&self, writer: &mut CodeWriter, structure: &StatementedStructure) {
        let mut wrote_group = false;
        let wrote = &mut wrote_group;
        print_group(writer, wrote, TypeAliasPrinter, structure.type_aliases.as_ref());
        print_group(writer, wrote, InterfacePrinter, structure.interfaces.as_ref());
        print_group(writer, wrote, EnumPrinter, structure.enums.as_ref());
        print_group(
            writer,
            wrote,
            FunctionPrinter::new(self.is_ambient),
            structure.functions.as_ref(),
        );
        print_group(
            writer,
            wrote,
            ClassPrinter::new(self.is_ambient),
            structure.classes.as_ref(),
        );
        print_group(
            writer,
            wrote,
            NamespacePrinter::new(self.is_ambient),
            structure.namespaces.as_ref(),
        );
        print_group(
            writer,
            wrote,
            VariableStatementPrinter,
            structure.variable_statements.as_ref(),
        );
        if let Some(Some(body_text)) = &structure.body_text {
            if *wrote {
                writer.blank_line_if_last_not();
            }
            writer.write(body_text);
        }
    }
}
