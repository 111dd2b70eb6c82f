//! NodeArena access methods.

use super::base::{NodeIndex, NodePath};
use super::node::{ModifierFlags, Node, NodeArena, NodeData};
use tsedit_scanner::SyntaxKind;

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The text the arena was parsed from.
    #[inline]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    #[inline]
    pub fn kind_of(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|node| node.kind)
    }

    /// Source text of a node, from `start` to `end`.
    pub fn text_of(&self, index: NodeIndex) -> &str {
        self.get(index)
            .and_then(|node| self.source_text.get(node.start as usize..node.end as usize))
            .unwrap_or("")
    }

    /// Direct children in source order.
    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        let Some(node) = self.get(index) else {
            return &[];
        };
        match &node.data {
            NodeData::SourceFile { statements, .. }
            | NodeData::Block { statements, .. }
            | NodeData::Clause { statements, .. } => statements,
            NodeData::Declaration { body, .. } => body.as_slice(),
            NodeData::VariableStatement { declarations, .. } => declarations,
            NodeData::Switch { clauses } => clauses,
            NodeData::Compound { children } => children,
            NodeData::None | NodeData::VariableDeclaration { .. } => &[],
        }
    }

    /// The statement list of a source file, block or clause node.
    pub fn statements_of(&self, index: NodeIndex) -> Option<&[NodeIndex]> {
        match &self.get(index)?.data {
            NodeData::SourceFile { statements, .. }
            | NodeData::Block { statements, .. }
            | NodeData::Clause { statements, .. } => Some(statements),
            _ => None,
        }
    }

    /// Declared name of a declaration or variable declaration.
    pub fn name_of(&self, index: NodeIndex) -> Option<&str> {
        match &self.get(index)?.data {
            NodeData::Declaration { name, .. } | NodeData::VariableDeclaration { name } => {
                name.as_deref()
            }
            _ => None,
        }
    }

    /// Body block of a function or namespace declaration.
    pub fn body_of(&self, index: NodeIndex) -> Option<NodeIndex> {
        match &self.get(index)?.data {
            NodeData::Declaration { body, .. } => *body,
            _ => None,
        }
    }

    #[inline]
    pub fn has_body(&self, index: NodeIndex) -> bool {
        self.body_of(index).is_some()
    }

    pub fn variable_declarations(&self, index: NodeIndex) -> &[NodeIndex] {
        match self.get(index).map(|node| &node.data) {
            Some(NodeData::VariableStatement { declarations, .. }) => declarations,
            _ => &[],
        }
    }

    /// Iterate from the node's parent up to the root.
    pub fn ancestors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let mut current = self.get(index).map_or(NodeIndex::NONE, |node| node.parent);
        std::iter::from_fn(move || {
            let node = self.get(current)?;
            let result = current;
            current = node.parent;
            Some(result)
        })
    }

    /// Whether the node has `declare`, sits inside a declaration with
    /// `declare`, or belongs to a declaration file.
    pub fn is_ambient_or_in_ambient_context(&self, index: NodeIndex) -> bool {
        if self.get(index).is_none() {
            return false;
        }
        std::iter::once(index).chain(self.ancestors(index)).any(|current| {
            self.get(current).is_some_and(|node| {
                node.has_modifier(ModifierFlags::DECLARE)
                    || matches!(
                        node.data,
                        NodeData::SourceFile {
                            is_declaration_file: true,
                            ..
                        }
                    )
            })
        })
    }

    /// Child ordinals leading from the root to `index`.
    pub fn path_of(&self, index: NodeIndex) -> NodePath {
        let mut path = NodePath::new();
        let mut current = index;
        while let Some(node) = self.get(current) {
            if node.parent.is_none() {
                break;
            }
            let Some(ordinal) = self
                .children(node.parent)
                .iter()
                .position(|&child| child == current)
            else {
                break;
            };
            path.push(ordinal as u32);
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Follow a path produced by `path_of` from `root`.
    pub fn resolve_path(&self, root: NodeIndex, path: &[u32]) -> Option<NodeIndex> {
        path.iter().try_fold(root, |current, &ordinal| {
            self.children(current).get(ordinal as usize).copied()
        })
    }
}
