//! TypeScript scanner/tokenizer for the tsedit crates.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token and node kinds
//! - `ScannerState` - Tokenizer state machine
//! - `Token` - A scanned token with its trivia information

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod scanner;
pub use scanner::{ScannerState, Token, tokenize};
