use std::fmt::{Display, Formatter};

use crate::types::NodeId;

/// A reference to a ZDD node.
///
/// `ZddId` is a lightweight handle into the manager's node arena. Because
/// nodes are hash-consed, handle equality coincides with structural
/// equality of the families the nodes denote.
///
/// # Terminal Values
///
/// - `ZddId::ZERO` (⊥) — empty family: no sets
/// - `ZddId::ONE` (⊤) — family containing only the empty set: {∅}
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ZddId(u32);

impl ZddId {
    /// Empty family (⊥): contains no sets.
    pub const ZERO: ZddId = ZddId(0);

    /// Family containing only the empty set (⊤): {∅}.
    pub const ONE: ZddId = ZddId(1);

    /// Sentinel for invalid references.
    pub const INVALID: ZddId = ZddId(0xFFFF_FFFF);

    /// Creates a ZddId from a NodeId.
    pub const fn from_node(id: NodeId) -> Self {
        ZddId(id.raw())
    }

    /// Creates a ZddId from a raw index.
    pub const fn new(index: u32) -> Self {
        ZddId(index)
    }

    /// Returns the underlying NodeId.
    pub const fn node_id(self) -> NodeId {
        NodeId::new(self.0)
    }

    /// Returns the raw index value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the index for array access.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true if this is a terminal (ZERO or ONE).
    pub const fn is_terminal(self) -> bool {
        self.0 <= 1
    }

    /// Returns true if this is the empty family.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this is the {∅} family.
    pub const fn is_one(self) -> bool {
        self.0 == 1
    }
}

impl Default for ZddId {
    fn default() -> Self {
        ZddId::INVALID
    }
}

impl Display for ZddId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "⊥"),
            1 => write!(f, "⊤"),
            _ => write!(f, "#{}", self.0),
        }
    }
}

impl From<NodeId> for ZddId {
    fn from(id: NodeId) -> Self {
        ZddId::from_node(id)
    }
}

impl From<ZddId> for NodeId {
    fn from(id: ZddId) -> Self {
        id.node_id()
    }
}
