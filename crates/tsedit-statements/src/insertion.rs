//! Splicing generated statements into a container.

use crate::container;
use crate::error::Result;
use crate::statemented::StatementedNode;
use crate::validation::verify_and_get_index;
use std::ops::Range;
use tracing::debug;
use tsedit_common::TextRange;
use tsedit_common::text::{is_at_line_start, pos_at_start_of_line_or_non_whitespace};
use tsedit_parser::{NodeArena, NodeIndex, SyntaxKind};
use tsedit_printer::CodeWriter;

/// Decides whether inserted text is separated from a neighbour by a single
/// newline instead of a blank line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SpacingRule {
    /// Always a blank line.
    Never,
    /// A newline next to a statement of the given kind.
    SameKind(SyntaxKind),
    /// A newline next to a bodyless function, when the inserted function on
    /// that edge has `declare`.
    AmbientFunction {
        first_declare: bool,
        last_declare: bool,
    },
    /// Always a newline.
    Always,
}

fn is_bodyless_function(arena: &NodeArena, node: NodeIndex) -> bool {
    arena.kind_of(node) == Some(SyntaxKind::FunctionDeclaration) && !arena.has_body(node)
}

impl SpacingRule {
    fn previous_new_line(self, arena: &NodeArena, previous: NodeIndex) -> bool {
        match self {
            SpacingRule::Never => false,
            SpacingRule::SameKind(kind) => arena.kind_of(previous) == Some(kind),
            SpacingRule::AmbientFunction { first_declare, .. } => {
                first_declare && is_bodyless_function(arena, previous)
            }
            SpacingRule::Always => true,
        }
    }

    fn next_new_line(self, arena: &NodeArena, next: NodeIndex) -> bool {
        match self {
            SpacingRule::Never => false,
            SpacingRule::SameKind(kind) => arena.kind_of(next) == Some(kind),
            SpacingRule::AmbientFunction { last_declare, .. } => {
                last_declare && is_bodyless_function(arena, next)
            }
            SpacingRule::Always => true,
        }
    }
}

fn push_new_line_if_missing(text: &mut String, new_line: &str) {
    if !text.ends_with('\n') {
        text.push_str(new_line);
    }
}

fn push_blank_line_if_missing(text: &mut String, new_line: &str) {
    push_new_line_if_missing(text, new_line);
    let current = text.as_str();
    let line = current.strip_suffix('\n').unwrap_or(current);
    let is_blank = line.strip_suffix('\r').unwrap_or(line).ends_with('\n');
    if !is_blank {
        text.push_str(new_line);
    }
}

impl StatementedNode<'_> {
    /// Insert the text produced by `write` before the statement at `index`.
    ///
    /// Returns the index range the new statements occupy in the re-parsed
    /// container.
    pub(crate) fn insert_with_writer(
        &mut self,
        index: isize,
        rule: SpacingRule,
        write: impl FnOnce(&mut CodeWriter),
    ) -> Result<Range<usize>> {
        let count = self.statement_count()?;
        let index = verify_and_get_index(index, count)?;
        self.ensure_body()?;

        let (range, new_text) = {
            let file = &*self.file;
            let arena = file.arena();
            let text = file.text();
            let new_line = file.settings().new_line_kind.as_str();
            let layout = container::layout(file, self.node)?;
            let previous = index
                .checked_sub(1)
                .and_then(|i| layout.statements.get(i))
                .and_then(|&node| arena.get(node).map(|data| (node, data.end as usize)));
            let next = layout
                .statements
                .get(index)
                .and_then(|&node| arena.get(node).map(|data| (node, data.start as usize)));

            // A following statement or `}` on the previous statement's line
            // stays there, after the inserted text.
            let next_shares_line = next.is_some_and(|(_, start)| !is_at_line_start(text, start));
            let keeps_line = previous.is_some()
                && (next_shares_line || (next.is_none() && layout.close_is_inline));

            let insert_pos = previous.map_or(layout.open, |(_, end)| end);
            let end_pos = match next {
                Some((_, start)) if next_shares_line && previous.is_none() => start,
                Some((_, start)) => pos_at_start_of_line_or_non_whitespace(text, start),
                None if layout.close_is_inline && previous.is_none() => layout.close_token,
                None => layout.close,
            };

            let mut writer = CodeWriter::new(file.settings())
                .with_base_indentation(layout.child_indentation.clone());
            write(&mut writer);
            if writer.is_empty() {
                return Ok(index..index);
            }

            let mut new_text = String::new();
            match previous {
                Some((node, _)) if !rule.previous_new_line(arena, node) => {
                    new_text.push_str(new_line);
                    new_text.push_str(new_line);
                }
                _ if insert_pos != 0 => new_text.push_str(new_line),
                _ => {}
            }
            new_text.push_str(writer.as_str());
            if keeps_line {
                let trimmed = new_text.trim_end_matches(['\r', '\n']).len();
                new_text.truncate(trimmed);
            } else {
                match next {
                    Some((node, _)) if !rule.next_new_line(arena, node) => {
                        push_blank_line_if_missing(&mut new_text, new_line);
                    }
                    None if layout.is_clause => {}
                    _ => push_new_line_if_missing(&mut new_text, new_line),
                }
                if next_shares_line {
                    new_text.push_str(&layout.child_indentation);
                } else if next.is_none() && layout.close_is_inline {
                    new_text.push_str(&layout.indentation);
                }
            }

            debug!(
                index,
                count,
                insert_pos,
                end_pos,
                previous = previous.is_some(),
                next = next.is_some(),
                keeps_line,
                "insert statements"
            );
            (TextRange::new(insert_pos as u32, end_pos as u32), new_text)
        };

        self.replace_text(range, &new_text)?;
        let inserted = self.statement_count()?.saturating_sub(count);
        Ok(index..index + inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_not_doubled() {
        let mut text = "a;\n".to_string();
        push_blank_line_if_missing(&mut text, "\n");
        assert_eq!(text, "a;\n\n");
        push_blank_line_if_missing(&mut text, "\n");
        assert_eq!(text, "a;\n\n");

        let mut text = "a;".to_string();
        push_blank_line_if_missing(&mut text, "\r\n");
        assert_eq!(text, "a;\r\n\r\n");
    }
}
