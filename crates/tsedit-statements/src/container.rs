//! Container shapes and the positions edits are spliced at.

use crate::error::{ManipulationError, Result};
use crate::source_file::SourceFile;
use tsedit_common::text::{
    line_indentation, line_start, pos_at_start_of_line_or_non_whitespace, skip_whitespace,
};
use tsedit_parser::{NodeArena, NodeData, NodeIndex, SyntaxKind};

/// The closed set of nodes that hold a statement list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ContainerShape {
    /// The file's own top-level statements.
    SourceFile,
    /// A standalone `{ }` block or module block.
    Braced { block: NodeIndex },
    /// Function and namespace declarations; the body may be missing.
    Bodyable { body: Option<NodeIndex> },
    /// `case`/`default` clause. A clause holding a single block edits the block.
    Clause { block: Option<NodeIndex> },
}

impl ContainerShape {
    pub(crate) fn resolve(arena: &NodeArena, container: NodeIndex) -> Result<Self> {
        let kind = arena.kind_of(container).ok_or_else(|| {
            ManipulationError::InvalidOperation(format!("node {} does not exist", container.0))
        })?;
        match kind {
            SyntaxKind::SourceFile => Ok(ContainerShape::SourceFile),
            SyntaxKind::Block | SyntaxKind::ModuleBlock => {
                Ok(ContainerShape::Braced { block: container })
            }
            SyntaxKind::FunctionDeclaration | SyntaxKind::ModuleDeclaration => {
                Ok(ContainerShape::Bodyable {
                    body: arena.body_of(container),
                })
            }
            SyntaxKind::CaseClause | SyntaxKind::DefaultClause => {
                let block = match arena.statements_of(container).unwrap_or_default() {
                    [only] if arena.kind_of(*only) == Some(SyntaxKind::Block) => Some(*only),
                    _ => None,
                };
                Ok(ContainerShape::Clause { block })
            }
            _ => Err(ManipulationError::NotImplemented(format!(
                "Could not find the statements for node kind: {kind:?}"
            ))),
        }
    }

    /// The node whose statement list is edited, or `None` for a missing body.
    pub(crate) fn list_owner(self, container: NodeIndex) -> Option<NodeIndex> {
        match self {
            ContainerShape::SourceFile => Some(container),
            ContainerShape::Braced { block } => Some(block),
            ContainerShape::Bodyable { body } => body,
            ContainerShape::Clause { block } => Some(block.unwrap_or(container)),
        }
    }

    pub(crate) fn is_bodyable(self) -> bool {
        matches!(self, ContainerShape::Bodyable { .. })
    }
}

/// Statement list of a container plus the positions around it.
#[derive(Clone, Debug)]
pub(crate) struct ContainerLayout {
    pub statements: Vec<NodeIndex>,
    /// Where text is inserted at index 0.
    pub open: usize,
    /// Where appended text stops replacing.
    pub close: usize,
    /// Start of the closing token (`}`), or `close` when there is none.
    pub close_token: usize,
    /// The closing brace shares a line with other text.
    pub close_is_inline: bool,
    pub is_clause: bool,
    /// Indentation of the container's own line.
    pub indentation: String,
    /// Indentation written before each statement in the list.
    pub child_indentation: String,
}

impl ContainerLayout {
    fn empty() -> Self {
        ContainerLayout {
            statements: Vec::new(),
            open: 0,
            close: 0,
            close_token: 0,
            close_is_inline: false,
            is_clause: false,
            indentation: String::new(),
            child_indentation: String::new(),
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.statements.len()
    }
}

/// The statements of `container`, empty for a missing body.
pub(crate) fn statements(file: &SourceFile, container: NodeIndex) -> Result<Vec<NodeIndex>> {
    let shape = ContainerShape::resolve(file.arena(), container)?;
    Ok(shape
        .list_owner(container)
        .and_then(|owner| file.arena().statements_of(owner))
        .map(<[NodeIndex]>::to_vec)
        .unwrap_or_default())
}

pub(crate) fn layout(file: &SourceFile, container: NodeIndex) -> Result<ContainerLayout> {
    let arena = file.arena();
    let text = file.text();
    let shape = ContainerShape::resolve(arena, container)?;
    let Some(owner) = shape.list_owner(container) else {
        return Ok(ContainerLayout::empty());
    };
    let Some(owner_node) = arena.get(owner) else {
        return Ok(ContainerLayout::empty());
    };
    let statements = arena.statements_of(owner).unwrap_or_default().to_vec();
    let last_end = statements
        .last()
        .and_then(|&last| arena.get(last))
        .map(|node| node.end as usize);

    let indentation = match shape {
        ContainerShape::SourceFile => String::new(),
        _ => arena
            .get(container)
            .map(|node| line_indentation(text, node.start as usize).to_string())
            .unwrap_or_default(),
    };
    let child_indentation = match shape {
        ContainerShape::SourceFile => String::new(),
        _ => format!("{indentation}{}", file.settings().indentation_text.as_str()),
    };

    let mut layout = ContainerLayout {
        statements,
        indentation,
        child_indentation,
        ..ContainerLayout::empty()
    };
    match &owner_node.data {
        NodeData::SourceFile { .. } => {
            let last_end = last_end.unwrap_or(0);
            layout.close = if text[last_end..].trim().is_empty() {
                text.len()
            } else {
                pos_at_start_of_line_or_non_whitespace(text, skip_whitespace(text, last_end))
            };
            layout.close_token = layout.close;
        }
        NodeData::Block {
            open_brace_end,
            close_brace_start,
            ..
        } => {
            layout.open = *open_brace_end as usize;
            layout.close_token = match close_brace_start {
                Some(_) => skip_whitespace(text, last_end.unwrap_or(layout.open)),
                None => text.len(),
            };
            layout.close = pos_at_start_of_line_or_non_whitespace(text, layout.close_token);
            layout.close_is_inline =
                close_brace_start.is_some() && layout.close != line_start(text, layout.close);
        }
        NodeData::Clause { colon_end, .. } => {
            layout.open = *colon_end as usize;
            layout.close = last_end.unwrap_or(layout.open);
            layout.close_token = layout.close;
            layout.is_clause = true;
        }
        _ => {
            return Err(ManipulationError::NotImplemented(format!(
                "Could not find the statements for node kind: {:?}",
                owner_node.kind
            )));
        }
    }
    Ok(layout)
}
