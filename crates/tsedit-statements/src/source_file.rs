//! A parsed source file that is edited by splicing text and re-parsing.

use crate::error::{ManipulationError, Result};
use crate::statemented::StatementedNode;
use tracing::debug;
use tsedit_common::{ManipulationSettings, TextRange};
use tsedit_parser::{NodeArena, NodeIndex, ParseDiagnostic, parse_source_file};

pub struct SourceFile {
    file_name: String,
    arena: NodeArena,
    root: NodeIndex,
    diagnostics: Vec<ParseDiagnostic>,
    settings: ManipulationSettings,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_settings(file_name, text, ManipulationSettings::default())
    }

    pub fn with_settings(
        file_name: impl Into<String>,
        text: impl Into<String>,
        settings: ManipulationSettings,
    ) -> Self {
        let file_name = file_name.into();
        let (arena, root, diagnostics) = parse_source_file(&file_name, &text.into());
        SourceFile {
            file_name,
            arena,
            root,
            diagnostics,
            settings,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.arena.source_text()
    }

    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    pub fn settings(&self) -> &ManipulationSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ManipulationSettings) {
        self.settings = settings;
    }

    /// Text of a node from its start (including owned comments) to its end.
    pub fn node_text(&self, node: NodeIndex) -> &str {
        self.arena.text_of(node)
    }

    /// Replace `range` with `new_text` and re-parse.
    ///
    /// Every `NodeIndex` obtained before the call is invalidated. On error the
    /// file is left untouched.
    pub fn replace_text(&mut self, range: TextRange, new_text: &str) -> Result<()> {
        let text = self.text();
        let span = range.as_range();
        if span.start > span.end
            || span.end > text.len()
            || !text.is_char_boundary(span.start)
            || !text.is_char_boundary(span.end)
        {
            return Err(ManipulationError::InvalidOperation(format!(
                "cannot replace {}..{} in a text of length {}",
                span.start,
                span.end,
                text.len()
            )));
        }
        debug!(
            file_name = %self.file_name,
            pos = range.pos,
            end = range.end,
            inserted = new_text.len(),
            "replace_text"
        );

        let mut updated = String::with_capacity(text.len() - span.len() + new_text.len());
        updated.push_str(&text[..span.start]);
        updated.push_str(new_text);
        updated.push_str(&text[span.end..]);

        let (arena, root, diagnostics) = parse_source_file(&self.file_name, &updated);
        self.arena = arena;
        self.root = root;
        self.diagnostics = diagnostics;
        Ok(())
    }

    pub fn insert_text(&mut self, pos: usize, new_text: &str) -> Result<()> {
        self.replace_text(TextRange::at(pos as u32), new_text)
    }

    pub fn remove_text(&mut self, range: TextRange) -> Result<()> {
        self.replace_text(range, "")
    }

    /// Editor over the file's top-level statements.
    pub fn statements(&mut self) -> StatementedNode<'_> {
        StatementedNode::for_root(self)
    }

    /// Editor over the statements of `node`.
    pub fn statemented(&mut self, node: NodeIndex) -> Result<StatementedNode<'_>> {
        StatementedNode::new(self, node)
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("file_name", &self.file_name)
            .field("len", &self.text().len())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}
