//! Manipulation settings.
//!
//! Controls how generated text is laid out: the indentation unit, the newline
//! sequence and the quote character for string literals. Settings are usually
//! constructed with `Default` and tweaked, or loaded from a JSON document:
//!
//! ```json
//! { "indentationText": "TwoSpaces", "newLineKind": "CarriageReturnLineFeed", "quoteKind": "Single" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Indentation unit used for generated code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentationText {
    TwoSpaces,
    #[default]
    FourSpaces,
    EightSpaces,
    Tab,
}

impl IndentationText {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwoSpaces => "  ",
            Self::FourSpaces => "    ",
            Self::EightSpaces => "        ",
            Self::Tab => "\t",
        }
    }
}

/// Newline sequence used for generated code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewLineKind {
    #[default]
    LineFeed,
    CarriageReturnLineFeed,
}

impl NewLineKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LineFeed => "\n",
            Self::CarriageReturnLineFeed => "\r\n",
        }
    }
}

/// Quote character for generated string literals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteKind {
    #[default]
    Double,
    Single,
}

impl QuoteKind {
    pub const fn as_char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }
}

/// Settings applied whenever text is generated for a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManipulationSettings {
    pub indentation_text: IndentationText,
    pub new_line_kind: NewLineKind,
    pub quote_kind: QuoteKind,
}

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid manipulation settings: {0}")]
    Json(#[from] serde_json::Error),
}

impl ManipulationSettings {
    /// Parse settings from a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    #[must_use]
    pub const fn with_indentation(mut self, indentation_text: IndentationText) -> Self {
        self.indentation_text = indentation_text;
        self
    }

    #[must_use]
    pub const fn with_new_line_kind(mut self, new_line_kind: NewLineKind) -> Self {
        self.new_line_kind = new_line_kind;
        self
    }

    #[must_use]
    pub const fn with_quote_kind(mut self, quote_kind: QuoteKind) -> Self {
        self.quote_kind = quote_kind;
        self
    }
}
