//! Base index types shared by the arena and its users.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index of a node in a `NodeArena`.
///
/// Indices are only meaningful for the arena that produced them; every
/// re-parse creates a new arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        Self::NONE
    }
}

/// Child ordinals from the root down to a node.
///
/// A path survives a re-parse as long as the edit did not change the shape of
/// the tree above the node, which lets editors find "the same" node again.
pub type NodePath = SmallVec<[u32; 8]>;
