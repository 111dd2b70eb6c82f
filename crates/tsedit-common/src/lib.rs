//! Common types and utilities for the tsedit crates.
//!
//! This crate provides foundational types used across all tsedit crates:
//! - Text ranges over source text (`TextRange`)
//! - Manipulation settings (`ManipulationSettings`, `IndentationText`,
//!   `NewLineKind`, `QuoteKind`)
//! - Whitespace and line scanning helpers used when splicing text

// Text ranges (byte offsets)
pub mod span;
pub use span::TextRange;

// Formatting settings applied to generated text
pub mod settings;
pub use settings::{IndentationText, ManipulationSettings, NewLineKind, QuoteKind, SettingsError};

// Line/whitespace helpers
pub mod text;
