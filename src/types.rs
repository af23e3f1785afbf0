use std::fmt;

/// A node identifier (index into the node storage array).
///
/// `NodeId` is a type-safe wrapper around `u32` that represents an index
/// into the manager's node storage.
///
/// # Invariants
///
/// - `NodeId(0)` is the ZERO terminal (⊥, empty family)
/// - `NodeId(1)` is the ONE terminal (⊤, family containing the empty set)
/// - Decision nodes start at index 2
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The ZERO terminal node (empty family).
    pub const ZERO: NodeId = NodeId(0);

    /// The ONE terminal node (family containing the empty set).
    pub const ONE: NodeId = NodeId(1);

    /// Sentinel value for invalid/uninitialized node references.
    pub const INVALID: NodeId = NodeId(0xFFFF_FFFF);

    /// Creates a new NodeId from a raw index.
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Returns the raw value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the node index as a `usize` for array indexing.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true if this is a terminal node (ZERO or ONE).
    pub const fn is_terminal(self) -> bool {
        self.0 <= 1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "⊥"),
            1 => write!(f, "⊤"),
            _ => write!(f, "@{}", self.0),
        }
    }
}

impl From<u32> for NodeId {
    fn from(index: u32) -> Self {
        NodeId::new(index)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// A decision variable: a 64-bit path hash.
///
/// Every edge position in a labeled tree is identified by the rolling hash
/// of the symbol path leading to it (see [`crate::hash::djb2`]). Two edges
/// reachable through identical symbol paths share a variable; edges on
/// diverging paths get (with overwhelming probability) distinct ones.
///
/// Variables order the diagram by their numeric value. The terminals sort
/// above every variable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Var(u64);

impl Var {
    /// Creates a variable from its 64-bit id.
    pub const fn new(id: u64) -> Self {
        Var(id)
    }

    /// Returns the raw 64-bit id.
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{:x}", self.0)
    }
}

impl From<u64> for Var {
    fn from(id: u64) -> Self {
        Var::new(id)
    }
}

impl From<Var> for u64 {
    fn from(v: Var) -> Self {
        v.0
    }
}
