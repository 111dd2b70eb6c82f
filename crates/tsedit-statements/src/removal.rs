//! Removing a contiguous range of statements.

use crate::container;
use crate::error::{ManipulationError, Result};
use crate::statemented::StatementedNode;
use crate::validation::verify_range;
use tracing::debug;
use tsedit_common::TextRange;
use tsedit_common::text::{end_of_line_break, is_at_line_start, line_start};
use tsedit_parser::{Node, NodeArena, NodeIndex, SyntaxKind};

/// Declarations separated from their neighbours by a blank line.
fn has_members(arena: &NodeArena, node: NodeIndex) -> bool {
    match arena.kind_of(node) {
        Some(SyntaxKind::FunctionDeclaration) => arena.has_body(node),
        Some(kind) => kind.is_declaration_with_members(),
        None => false,
    }
}

fn statement_at<'t>(
    arena: &'t NodeArena,
    statements: &[NodeIndex],
    index: usize,
) -> Result<&'t Node> {
    statements
        .get(index)
        .and_then(|&node| arena.get(node))
        .ok_or_else(|| {
            ManipulationError::InvalidOperation(format!("statement {index} could not be found"))
        })
}

impl StatementedNode<'_> {
    pub fn remove_statement(&mut self, index: usize) -> Result<()> {
        self.remove_statements((index, index))
    }

    /// Remove the statements from `start` to `end`, both inclusive.
    pub fn remove_statements(&mut self, range: (usize, usize)) -> Result<()> {
        let (start, end) = range;
        let (span, replacement) = {
            let file = &*self.file;
            let arena = file.arena();
            let text = file.text();
            let new_line = file.settings().new_line_kind.as_str();
            let layout = container::layout(file, self.node)?;
            verify_range(range, layout.count())?;

            let node = |index: usize| statement_at(arena, &layout.statements, index);
            let first = node(start)?;
            let last = node(end)?;
            let previous = match start.checked_sub(1) {
                Some(index) => Some((layout.statements[index], node(index)?)),
                None => None,
            };
            let next = match layout.statements.get(end + 1) {
                Some(&next) => Some((next, node(end + 1)?)),
                None => None,
            };
            let is_inline = |start: u32| !is_at_line_start(text, start as usize);

            let removal_start = || line_start(text, first.start as usize).max(layout.open);
            let (pos, end_pos, replacement) = match (previous, next) {
                (Some((previous_index, previous)), Some((next_index, next))) => {
                    if is_inline(next.start) {
                        (previous.end as usize, last.end as usize, String::new())
                    } else {
                        let separator = if has_members(arena, previous_index)
                            || has_members(arena, next_index)
                        {
                            new_line.repeat(2)
                        } else {
                            new_line.to_string()
                        };
                        (
                            previous.end as usize,
                            line_start(text, next.start as usize),
                            separator,
                        )
                    }
                }
                (Some((_, previous)), None) => {
                    (previous.end as usize, last.end as usize, String::new())
                }
                (None, Some((_, next))) if is_inline(next.start) => {
                    (first.start as usize, next.start as usize, String::new())
                }
                // The first statement shares a line with `{` or `:`.
                (None, Some((_, next))) if line_start(text, first.start as usize) < layout.open => (
                    layout.open,
                    line_start(text, next.start as usize),
                    new_line.to_string(),
                ),
                (None, Some((_, next))) => (
                    removal_start(),
                    line_start(text, next.start as usize),
                    String::new(),
                ),
                (None, None) if layout.is_clause => (layout.open, last.end as usize, String::new()),
                (None, None) => {
                    let end = end_of_line_break(text, last.end as usize).unwrap_or(last.end as usize);
                    (removal_start(), end, String::new())
                }
            };
            debug!(start, end, pos, end_pos, "remove statements");
            (TextRange::new(pos as u32, end_pos as u32), replacement)
        };
        self.replace_text(span, &replacement)
    }
}
