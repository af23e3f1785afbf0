//! The ZDD manager: hash-consed node storage and the set-family algebra.
//!
//! # Overview
//!
//! A ZDD represents a family of sets of variables as a DAG. The key
//! reduction is the **zero-suppression rule**: nodes whose `hi` child is
//! `⊥` are never materialized. Together with the unique table this makes
//! the representation canonical: one family, one node graph, one handle.
//!
//! Variables here are 64-bit path hashes (see [`crate::hash`]) and order
//! the diagram by numeric value; the terminals sort above every variable.
//!
//! # Quick Start
//!
//! ```
//! use zdd_forest::types::Var;
//! use zdd_forest::zdd::ZddManager;
//!
//! let mgr = ZddManager::new();
//!
//! let x = mgr.singleton(Var::new(1)); // {{1}}
//! let y = mgr.singleton(Var::new(2)); // {{2}}
//!
//! let either = mgr.union(x, y);       // {{1}, {2}}
//! let both = mgr.cross_union(x, y);   // {{1, 2}}
//!
//! assert_eq!(mgr.count(either), 2);
//! assert_eq!(mgr.count(both), 1);
//! ```

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashSet;

use log::debug;

use crate::cache::{CountCache, OpCache};
use crate::node::ZddNode;
use crate::reference::ZddId;
use crate::subtable::Subtable;
use crate::types::{NodeId, Var};

/// The ZDD manager: owns all nodes and performs all operations.
///
/// The manager maintains:
/// - node storage (a `Vec` of [`ZddNode`], indices are handles)
/// - the unique table for hash-consed node construction
/// - one memo table per binary operation, plus a counting cache
///
/// # Design
///
/// - **Uniqueness**: identical `(var, lo, hi)` triples yield the same
///   handle, so handle equality is structural equality.
/// - **Zero-suppression**: nodes with `hi = ⊥` are never created.
/// - **Sharing across calls**: lowering several expressions through one
///   manager memoizes across them; identical subexpressions come back as
///   identical handles. Fresh managers give fresh, reproducible graphs.
///
/// A manager is single-threaded; run independent managers on independent
/// threads instead of sharing one.
///
/// # Terminal Semantics
///
/// - `ZddId::ZERO` (⊥): empty family
/// - `ZddId::ONE` (⊤): family containing only the empty set: {∅}
pub struct ZddManager {
    /// Node storage. Index 0 = ZERO terminal, index 1 = ONE terminal.
    nodes: RefCell<Vec<ZddNode>>,

    /// Unique table over `(var, lo, hi)`.
    table: RefCell<Subtable>,

    /// Memo table for `cross_union`.
    cross_cache: RefCell<OpCache>,

    /// Memo table for `union`.
    union_cache: RefCell<OpCache>,

    /// Counting cache.
    count_cache: RefCell<CountCache>,
}

impl Default for ZddManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ZddManager {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates a new ZDD manager.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Creates a manager with the given initial node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(2));

        // Index 0: ZERO terminal (⊥)
        nodes.push(ZddNode::default());

        // Index 1: ONE terminal (⊤)
        nodes.push(ZddNode::default());

        Self {
            nodes: RefCell::new(nodes),
            table: RefCell::new(Subtable::new()),
            cross_cache: RefCell::new(OpCache::new()),
            union_cache: RefCell::new(OpCache::new()),
            count_cache: RefCell::new(CountCache::new()),
        }
    }

    // ========================================================================
    // Terminals
    // ========================================================================

    /// Returns the empty family (⊥).
    pub fn zero(&self) -> ZddId {
        ZddId::ZERO
    }

    /// Returns the family containing only the empty set (⊤): {∅}.
    pub fn one(&self) -> ZddId {
        ZddId::ONE
    }

    /// Returns true if this is the empty family.
    #[inline(always)]
    pub fn is_zero(&self, f: ZddId) -> bool {
        f.is_zero()
    }

    /// Returns true if this is the {∅} family.
    #[inline(always)]
    pub fn is_one(&self, f: ZddId) -> bool {
        f.is_one()
    }

    /// Returns true if this is a terminal node.
    #[inline(always)]
    pub fn is_terminal(&self, f: ZddId) -> bool {
        f.is_terminal()
    }

    // ========================================================================
    // Node Construction
    // ========================================================================

    /// Creates or retrieves the node `(var, lo, hi)`.
    ///
    /// Enforces the zero-suppression rule: if `hi = ⊥`, returns `lo`
    /// without creating a node.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not strictly smaller than the variables of both
    /// children (terminals count as +∞). A violation means the caller is
    /// broken, not the input.
    pub fn get_node(&self, var: Var, lo: ZddId, hi: ZddId) -> ZddId {
        // Zero-suppression rule: if hi = ⊥, return lo
        if hi.is_zero() {
            return lo;
        }

        assert!(self.precedes(var, lo), "variable ordering violated: {} !< lo {}", var, lo);
        assert!(self.precedes(var, hi), "variable ordering violated: {} !< hi {}", var, hi);

        // Check unique table
        {
            let table = self.table.borrow();
            let nodes = self.nodes.borrow();
            if let Some(id) = table.find(var, lo, hi, &nodes) {
                return ZddId::from_node(id);
            }
        }

        // Create new node
        let id = {
            let mut nodes = self.nodes.borrow_mut();
            let id = NodeId::new(nodes.len() as u32);
            nodes.push(ZddNode::new(var, lo, hi));
            id
        };

        // Insert into unique table
        {
            let mut table = self.table.borrow_mut();
            let mut nodes = self.nodes.borrow_mut();
            table.insert(var, lo, hi, id, &mut nodes);
        }

        ZddId::from_node(id)
    }

    /// True if `var` may be the parent of `child` in the ordering.
    fn precedes(&self, var: Var, child: ZddId) -> bool {
        child.is_terminal() || var < self.node(child).var
    }

    /// Access node data.
    pub fn node(&self, id: ZddId) -> ZddNode {
        self.nodes.borrow()[id.index()]
    }

    /// Creates the family `{{var}}`: one set, one member.
    ///
    /// This is the fundamental building block: `get_node(var, ⊥, ⊤)`.
    pub fn singleton(&self, var: impl Into<Var>) -> ZddId {
        self.get_node(var.into(), ZddId::ZERO, ZddId::ONE)
    }

    // ========================================================================
    // Set Operations
    // ========================================================================

    /// Union: `F ∪ G` — sets in either family.
    pub fn union(&self, f: ZddId, g: ZddId) -> ZddId {
        debug!("union({}, {})", f, g);

        // Terminal cases
        if f.is_zero() {
            return g;
        }
        if g.is_zero() || f == g {
            return f;
        }

        if let Some(result) = self.union_cache.borrow().get(f, g) {
            return result;
        }

        let result = if f.is_one() {
            // g is non-terminal; ⊤ sorts below every variable, so only
            // the lo spine changes.
            let g_node = self.node(g);
            let lo = self.union(ZddId::ONE, g_node.lo);
            self.get_node(g_node.var, lo, g_node.hi)
        } else if g.is_one() {
            let f_node = self.node(f);
            let lo = self.union(f_node.lo, ZddId::ONE);
            self.get_node(f_node.var, lo, f_node.hi)
        } else {
            let f_node = self.node(f);
            let g_node = self.node(g);

            match f_node.var.cmp(&g_node.var) {
                Ordering::Less => {
                    let lo = self.union(f_node.lo, g);
                    self.get_node(f_node.var, lo, f_node.hi)
                }
                Ordering::Greater => {
                    let lo = self.union(f, g_node.lo);
                    self.get_node(g_node.var, lo, g_node.hi)
                }
                Ordering::Equal => {
                    let lo = self.union(f_node.lo, g_node.lo);
                    let hi = self.union(f_node.hi, g_node.hi);
                    self.get_node(f_node.var, lo, hi)
                }
            }
        };

        self.union_cache.borrow_mut().insert(f, g, result);
        result
    }

    /// Cross union: `{ S ∪ T | S ∈ F, T ∈ G }`.
    ///
    /// The pairwise union of members, sometimes called the join or
    /// product of set families.
    pub fn cross_union(&self, f: ZddId, g: ZddId) -> ZddId {
        debug!("cross_union({}, {})", f, g);

        // Terminal cases
        if f.is_zero() || g.is_zero() {
            return ZddId::ZERO;
        }
        if f.is_one() {
            return g; // {∅} distributes into each member of G
        }
        if g.is_one() {
            return f;
        }

        if let Some(result) = self.cross_cache.borrow().get(f, g) {
            return result;
        }

        let f_node = self.node(f);
        let g_node = self.node(g);

        let result = match f_node.var.cmp(&g_node.var) {
            Ordering::Less => {
                let lo = self.cross_union(f_node.lo, g);
                let hi = self.cross_union(f_node.hi, g);
                self.get_node(f_node.var, lo, hi)
            }
            Ordering::Greater => {
                let lo = self.cross_union(f, g_node.lo);
                let hi = self.cross_union(f, g_node.hi);
                self.get_node(g_node.var, lo, hi)
            }
            Ordering::Equal => {
                // hi: every combination where at least one side holds var
                let hi_hi = self.cross_union(f_node.hi, g_node.hi);
                let hi_lo = self.cross_union(f_node.hi, g_node.lo);
                let lo_hi = self.cross_union(f_node.lo, g_node.hi);
                let hi = self.union(hi_hi, self.union(hi_lo, lo_hi));
                let lo = self.cross_union(f_node.lo, g_node.lo);
                self.get_node(f_node.var, lo, hi)
            }
        };

        self.cross_cache.borrow_mut().insert(f, g, result);
        result
    }

    /// Left-to-right fold of `union` starting from `⊥`.
    pub fn union_all(&self, fs: impl IntoIterator<Item = ZddId>) -> ZddId {
        fs.into_iter().fold(ZddId::ZERO, |acc, f| self.union(acc, f))
    }

    /// Left-to-right fold of `cross_union` starting from `⊤`.
    pub fn cross_union_all(&self, fs: impl IntoIterator<Item = ZddId>) -> ZddId {
        fs.into_iter().fold(ZddId::ONE, |acc, f| self.cross_union(acc, f))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns true if the family contains the empty set.
    pub fn contains_empty(&self, f: ZddId) -> bool {
        if f.is_zero() {
            return false;
        }
        if f.is_one() {
            return true;
        }
        // The empty set lives at the end of the lo spine.
        self.contains_empty(self.node(f).lo)
    }

    /// Returns true if the family contains the given set.
    pub fn contains(&self, f: ZddId, set: &[Var]) -> bool {
        let mut sorted: Vec<Var> = set.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        self.contains_rec(f, &sorted, 0)
    }

    fn contains_rec(&self, f: ZddId, set: &[Var], idx: usize) -> bool {
        if idx == set.len() {
            return self.contains_empty(f);
        }
        if f.is_terminal() {
            return false;
        }

        let f_node = self.node(f);
        match f_node.var.cmp(&set[idx]) {
            Ordering::Less => self.contains_rec(f_node.lo, set, idx),
            Ordering::Equal => self.contains_rec(f_node.hi, set, idx + 1),
            Ordering::Greater => false,
        }
    }

    // ========================================================================
    // Counting
    // ========================================================================

    /// Counts the number of sets in the family.
    pub fn count(&self, f: ZddId) -> u64 {
        if f.is_zero() {
            return 0;
        }
        if f.is_one() {
            return 1;
        }

        if let Some(cached) = self.count_cache.borrow().get(f) {
            return cached;
        }

        let f_node = self.node(f);
        let count = self.count(f_node.lo) + self.count(f_node.hi);

        self.count_cache.borrow_mut().insert(f, count);
        count
    }

    /// Returns the number of nodes reachable from `f`.
    pub fn node_count(&self, f: ZddId) -> usize {
        let mut visited = HashSet::new();
        self.node_count_rec(f, &mut visited)
    }

    fn node_count_rec(&self, f: ZddId, visited: &mut HashSet<ZddId>) -> usize {
        if f.is_terminal() || visited.contains(&f) {
            return 0;
        }
        visited.insert(f);
        let f_node = self.node(f);
        1 + self.node_count_rec(f_node.lo, visited) + self.node_count_rec(f_node.hi, visited)
    }

    /// Total number of nodes in the manager, terminals included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.borrow().len()
    }

    // ========================================================================
    // Cache Management
    // ========================================================================

    /// Clears the operation caches. The unique table is untouched, so
    /// existing handles stay valid.
    pub fn clear_caches(&self) {
        self.cross_cache.borrow_mut().clear();
        self.union_cache.borrow_mut().clear();
        self.count_cache.borrow_mut().clear();
    }
}
