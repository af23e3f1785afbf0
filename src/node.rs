use crate::reference::ZddId;
use crate::types::{NodeId, Var};

/// A ZDD node representing a decision point in the diagram.
///
/// # Fields
///
/// - `var`: the path-hash variable at this decision point
/// - `lo`: low child — sets NOT containing this variable
/// - `hi`: high child — sets containing this variable (with it removed)
/// - `next`: next node in the unique-table collision chain
///
/// # Invariants
///
/// - **Zero-suppression**: `hi` is never `ZddId::ZERO`; such nodes are
///   replaced by their `lo` child before they exist.
/// - **Ordering**: `var` is strictly smaller than the variable of either
///   child (terminals count as +∞).
///
/// # Semantics
///
/// ```text
/// F(node) = F(lo) ∪ { S ∪ {var} | S ∈ F(hi) }
/// ```
#[derive(Debug, Copy, Clone)]
pub struct ZddNode {
    /// Decision variable.
    pub var: Var,
    /// Low child: sets NOT containing var.
    pub lo: ZddId,
    /// High child: sets containing var (never ZERO).
    pub hi: ZddId,
    /// Next node in the collision chain of the unique table.
    pub next: NodeId,
}

impl Default for ZddNode {
    fn default() -> Self {
        Self {
            var: Var::new(0),
            lo: ZddId::INVALID,
            hi: ZddId::INVALID,
            next: Self::NO_NEXT,
        }
    }
}

impl ZddNode {
    /// Sentinel value for end of a collision chain.
    pub const NO_NEXT: NodeId = NodeId::INVALID;

    /// Creates a new ZDD node.
    ///
    /// # Panics
    ///
    /// Debug-panics if `hi == ZddId::ZERO` (violates zero-suppression).
    pub fn new(var: Var, lo: ZddId, hi: ZddId) -> Self {
        debug_assert!(!hi.is_zero(), "ZDD node cannot have hi=ZERO (zero-suppression rule)");
        Self {
            var,
            lo,
            hi,
            next: Self::NO_NEXT,
        }
    }
}

impl PartialEq for ZddNode {
    fn eq(&self, other: &Self) -> bool {
        self.var == other.var && self.lo == other.lo && self.hi == other.hi
    }
}

impl Eq for ZddNode {}
