//! NodeArena creation methods.

use super::base::NodeIndex;
use super::node::{ModifierFlags, Node, NodeArena, NodeData};
use tsedit_scanner::SyntaxKind;

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow in huge files.
    const MAX_NODE_PREALLOC: usize = 1_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena sized for a source of `text_len` bytes.
    /// Statements average a few dozen bytes in typical TypeScript.
    pub fn with_capacity_for_text(text_len: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity((text_len / 32 + 1).min(Self::MAX_NODE_PREALLOC)),
            source_text: String::new(),
        }
    }

    pub(crate) fn set_source_text(&mut self, text: String) {
        self.source_text = text;
    }

    /// Add a node with no parent yet. Parents are linked by `link_parents`.
    pub(crate) fn add_node(
        &mut self,
        kind: SyntaxKind,
        flags: ModifierFlags,
        pos: u32,
        start: u32,
        end: u32,
        data: NodeData,
    ) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            flags,
            pos,
            start,
            end,
            parent: NodeIndex::NONE,
            data,
        });
        index
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Set the parent of every node reachable from `root`.
    pub(crate) fn link_parents(&mut self, root: NodeIndex) {
        let mut stack = vec![root];
        while let Some(parent) = stack.pop() {
            let children: Vec<NodeIndex> = self.children(parent).to_vec();
            for child in children {
                if let Some(node) = self.get_mut(child) {
                    node.parent = parent;
                }
                stack.push(child);
            }
        }
    }
}
