//! The statement container editor.
//!
//! `StatementedNode` borrows the `SourceFile` mutably for as long as it edits
//! one container. The container is remembered by its path from the root so it
//! can be found again after every re-parse.

use crate::container::{self, ContainerShape};
use crate::error::{EntityKind, ManipulationError, Result};
use crate::insertion::SpacingRule;
use crate::lookup;
use crate::source_file::SourceFile;
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;
use tracing::debug;
use tsedit_common::TextRange;
use tsedit_common::text::line_indentation;
use tsedit_parser::{NodeIndex, NodePath, SyntaxKind};
use tsedit_printer::CodeWriter;
use tsedit_scanner::tokenize;

/// Text to insert as raw statements: literal text, or a callback writing into
/// a `CodeWriter` already set up with the container's indentation.
pub enum StatementText<'w> {
    Text(Cow<'w, str>),
    Writer(Box<dyn FnOnce(&mut CodeWriter) + 'w>),
}

impl<'w> StatementText<'w> {
    pub fn writer(write: impl FnOnce(&mut CodeWriter) + 'w) -> Self {
        StatementText::Writer(Box::new(write))
    }

    pub(crate) fn write_to(self, writer: &mut CodeWriter) {
        match self {
            StatementText::Text(text) => {
                writer.write(&text);
            }
            StatementText::Writer(write) => write(writer),
        }
    }
}

impl<'w> From<&'w str> for StatementText<'w> {
    fn from(text: &'w str) -> Self {
        StatementText::Text(Cow::Borrowed(text))
    }
}

impl From<String> for StatementText<'_> {
    fn from(text: String) -> Self {
        StatementText::Text(Cow::Owned(text))
    }
}

impl fmt::Debug for StatementText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementText::Text(text) => f.debug_tuple("Text").field(text).finish(),
            StatementText::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

pub struct StatementedNode<'a> {
    pub(crate) file: &'a mut SourceFile,
    pub(crate) node: NodeIndex,
    path: NodePath,
}

impl<'a> StatementedNode<'a> {
    /// Editor over the statements of `node`.
    ///
    /// Fails with `NotImplemented` when `node` cannot hold statements.
    pub fn new(file: &'a mut SourceFile, node: NodeIndex) -> Result<Self> {
        ContainerShape::resolve(file.arena(), node)?;
        let path = file.arena().path_of(node);
        Ok(StatementedNode { file, node, path })
    }

    pub fn for_root(file: &'a mut SourceFile) -> Self {
        let node = file.root();
        StatementedNode {
            file,
            node,
            path: NodePath::new(),
        }
    }

    #[inline]
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    pub fn kind(&self) -> Option<SyntaxKind> {
        self.file.arena().kind_of(self.node)
    }

    #[inline]
    pub fn source_file(&self) -> &SourceFile {
        &*self.file
    }

    pub fn text(&self) -> &str {
        self.file.text()
    }

    /// Whether text generated here lands in an ambient context.
    pub fn is_ambient(&self) -> bool {
        self.file.arena().is_ambient_or_in_ambient_context(self.node)
    }

    pub(crate) fn shape(&self) -> Result<ContainerShape> {
        ContainerShape::resolve(self.file.arena(), self.node)
    }

    /// Find the container again in the current tree.
    pub(crate) fn refresh(&mut self) -> Result<()> {
        let root = self.file.root();
        self.node = self
            .file
            .arena()
            .resolve_path(root, &self.path)
            .ok_or_else(|| {
                ManipulationError::InvalidOperation(
                    "the container could not be found after the edit".to_string(),
                )
            })?;
        Ok(())
    }

    pub(crate) fn replace_text(&mut self, range: TextRange, new_text: &str) -> Result<()> {
        self.file.replace_text(range, new_text)?;
        self.refresh()
    }

    pub(crate) fn new_line(&self) -> &'static str {
        self.file.settings().new_line_kind.as_str()
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// The container's statements, in order. Empty when there is no body.
    pub fn get_statements(&self) -> Result<Vec<NodeIndex>> {
        container::statements(&*self.file, self.node)
    }

    pub fn statement_count(&self) -> Result<usize> {
        Ok(self.get_statements()?.len())
    }

    pub fn get_statement(
        &self,
        predicate: impl Fn(&SourceFile, NodeIndex) -> bool,
    ) -> Result<Option<NodeIndex>> {
        let statements = self.get_statements()?;
        Ok(lookup::find(statements, |&statement| predicate(&*self.file, statement)))
    }

    pub fn get_statement_or_throw(
        &self,
        predicate: impl Fn(&SourceFile, NodeIndex) -> bool,
    ) -> Result<NodeIndex> {
        let statements = self.get_statements()?;
        lookup::find_or_throw(statements, EntityKind::Statement, |&statement| {
            predicate(&*self.file, statement)
        })
    }

    pub fn get_statement_by_kind(&self, kind: SyntaxKind) -> Result<Option<NodeIndex>> {
        let arena = self.file.arena();
        let statements = self.get_statements()?;
        Ok(lookup::find(statements, |&statement| {
            arena.kind_of(statement) == Some(kind)
        }))
    }

    pub fn get_statement_by_kind_or_throw(&self, kind: SyntaxKind) -> Result<NodeIndex> {
        self.get_statement_by_kind(kind)?.ok_or_else(|| {
            ManipulationError::NotFound(format!("statement of kind {kind:?}"))
        })
    }

    pub fn add_statements<'w>(&mut self, text: impl Into<StatementText<'w>>) -> Result<Vec<NodeIndex>> {
        let count = self.statement_count()?;
        self.insert_statements(count as isize, text)
    }

    /// Insert raw statement text at `index` and return the statements it produced.
    pub fn insert_statements<'w>(
        &mut self,
        index: isize,
        text: impl Into<StatementText<'w>>,
    ) -> Result<Vec<NodeIndex>> {
        let text = text.into();
        let range = self.insert_with_writer(index, SpacingRule::Always, |writer| {
            text.write_to(writer);
        })?;
        self.statements_in(range)
    }

    pub(crate) fn statements_in(&self, range: Range<usize>) -> Result<Vec<NodeIndex>> {
        let statements = self.get_statements()?;
        Ok(statements.get(range).map(<[NodeIndex]>::to_vec).unwrap_or_default())
    }

    // =========================================================================
    // Bodies
    // =========================================================================

    /// Give a bodyless function or namespace an empty body. No-op otherwise.
    pub fn ensure_body(&mut self) -> Result<()> {
        let ContainerShape::Bodyable { body: None } = self.shape()? else {
            return Ok(());
        };
        let (range, body) = {
            let text = self.file.text();
            let Some(node) = self.file.arena().get(self.node) else {
                return Ok(());
            };
            let start = node.start as usize;
            let tokens = tokenize(&text[start..node.end as usize]);
            let last = tokens
                .iter()
                .rev()
                .find(|token| token.kind != SyntaxKind::EndOfFileToken);
            let range = match last {
                Some(token) if token.kind == SyntaxKind::SemicolonToken => {
                    TextRange::new(start as u32 + token.start, start as u32 + token.end)
                }
                Some(token) => TextRange::at(start as u32 + token.end),
                None => TextRange::at(node.end),
            };
            let indentation = line_indentation(text, start);
            (range, format!(" {{{}{indentation}}}", self.new_line()))
        };
        debug!(pos = range.pos, end = range.end, "ensure_body");
        self.replace_text(range, &body)
    }

    /// Replace the body of a function or namespace with `;`.
    pub fn remove_body(&mut self) -> Result<()> {
        let shape = self.shape()?;
        let ContainerShape::Bodyable { body: Some(body) } = shape else {
            return Err(ManipulationError::InvalidOperation(format!(
                "{:?} does not have a removable body",
                self.kind().unwrap_or(SyntaxKind::Unknown)
            )));
        };
        let range = self
            .file
            .arena()
            .get(body)
            .map(|node| TextRange::new(node.pos, node.end))
            .ok_or_else(|| {
                ManipulationError::InvalidOperation("the body could not be found".to_string())
            })?;
        debug!(pos = range.pos, end = range.end, "remove_body");
        self.replace_text(range, ";")
    }
}

impl fmt::Debug for StatementedNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementedNode")
            .field("file_name", &self.file.file_name())
            .field("node", &self.node)
            .field("kind", &self.kind())
            .finish()
    }
}
