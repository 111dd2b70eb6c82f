//! Text generation for the tsedit crates.
//!
//! This crate provides:
//! - `CodeWriter` - Indentation-aware writer honouring `ManipulationSettings`
//! - Declaration structures (`ClassStructure`, `FunctionStructure`, ...)
//! - One `StructurePrinter` per declaration kind

pub mod writer;
pub use writer::CodeWriter;

pub mod structures;
pub use structures::*;

pub mod printers;
pub use printers::{
    ClassPrinter, EnumPrinter, FunctionPrinter, InterfacePrinter, NamespacePrinter,
    StatementedPrinter, StructurePrinter, TypeAliasPrinter, VariableStatementPrinter,
};
