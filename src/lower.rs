//! Lowering tree-set expressions into ZDDs.
//!
//! Every `Prefix` edge along a spine is named by the rolling path hash of
//! the symbols above it (see [`crate::hash`]). A tree then becomes the set
//! of the variables of its edges, and a set of trees a family of such
//! sets, which is exactly what a ZDD stores.
//!
//! Two lowerings are provided:
//!
//! - [`ZddManager::trees`] — the set of trees the expression denotes
//! - [`ZddManager::subtrees`] — every prefix-closed selection of edges of
//!   every tree in the expression, the empty selection included
//!
//! Lowering is total: every expression yields a ZDD.
//!
//! ```
//! use zdd_forest::expr::TreeExpr;
//! use zdd_forest::zdd::ZddManager;
//!
//! let mgr = ZddManager::new();
//! let t = TreeExpr::product([TreeExpr::branch(["a"]), TreeExpr::branch(["b"])]);
//!
//! // One tree with two root edges, hence one set with two variables.
//! let z = mgr.trees(&t);
//! assert_eq!(mgr.count(z), 1);
//!
//! // Subtrees: ∅, a, b, ab.
//! assert_eq!(mgr.count(mgr.subtrees(&t)), 4);
//! ```

use log::debug;

use crate::expr::TreeExpr;
use crate::hash::{djb2, PATH_SEED};
use crate::reference::ZddId;
use crate::types::Var;
use crate::zdd::ZddManager;

impl ZddManager {
    /// Materializes the set of trees denoted by `t`.
    pub fn trees(&self, t: &TreeExpr) -> ZddId {
        debug!("trees({:?})", t);
        self.trees_under(t, PATH_SEED)
    }

    /// Materializes the set of all subtrees of all trees denoted by `t`.
    ///
    /// A subtree is any prefix-closed selection of edges starting at the
    /// root, the empty selection included.
    pub fn subtrees(&self, t: &TreeExpr) -> ZddId {
        debug!("subtrees({:?})", t);
        self.subtrees_under(t, PATH_SEED)
    }

    fn trees_under(&self, t: &TreeExpr, h: u64) -> ZddId {
        match t {
            TreeExpr::Bot => ZddId::ZERO,
            TreeExpr::Top => ZddId::ONE,
            TreeExpr::Prefix(symbol, child) => {
                let h1 = djb2(h, symbol.as_bytes());
                let below = self.trees_under(child, h1);
                self.cross_union(self.singleton(Var::new(h1)), below)
            }
            TreeExpr::Product(children) => {
                let zdds: Vec<ZddId> = children.iter().map(|c| self.trees_under(c, h)).collect();
                self.cross_union_all(zdds)
            }
            TreeExpr::Sum(children) => {
                let zdds: Vec<ZddId> = children.iter().map(|c| self.trees_under(c, h)).collect();
                self.union_all(zdds)
            }
        }
    }

    fn subtrees_under(&self, t: &TreeExpr, h: u64) -> ZddId {
        match t {
            TreeExpr::Bot => ZddId::ZERO,
            TreeExpr::Top => ZddId::ONE,
            TreeExpr::Prefix(symbol, child) => {
                let h1 = djb2(h, symbol.as_bytes());
                let below = self.subtrees_under(child, h1);
                let spine = self.cross_union(self.singleton(Var::new(h1)), below);
                // Selecting nothing at this position is always a subtree.
                self.union(ZddId::ONE, spine)
            }
            TreeExpr::Product(children) => {
                let zdds: Vec<ZddId> = children.iter().map(|c| self.subtrees_under(c, h)).collect();
                self.cross_union_all(zdds)
            }
            TreeExpr::Sum(children) => {
                let zdds: Vec<ZddId> = children.iter().map(|c| self.subtrees_under(c, h)).collect();
                self.union_all(zdds)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_top_is_one() {
        let mgr = ZddManager::new();
        assert_eq!(mgr.trees(&TreeExpr::Top), ZddId::ONE);
        assert_eq!(mgr.subtrees(&TreeExpr::Top), ZddId::ONE);
    }

    #[test]
    fn test_bot_is_zero() {
        let mgr = ZddManager::new();
        assert_eq!(mgr.trees(&TreeExpr::Bot), ZddId::ZERO);
        assert_eq!(mgr.subtrees(&TreeExpr::Bot), ZddId::ZERO);
    }

    #[test]
    fn test_branch_chain() {
        let mgr = ZddManager::new();
        let t = TreeExpr::branch(["a", "b"]);
        let z = mgr.trees(&t);

        let h1 = djb2(PATH_SEED, b"a");
        let h2 = djb2(h1, b"b");

        // One tree: the single set {h1, h2}.
        assert_eq!(mgr.count(z), 1);
        assert!(mgr.contains(z, &[Var::new(h1), Var::new(h2)]));
        assert!(!mgr.contains(z, &[Var::new(h1)]));
        assert_eq!(mgr.node_count(z), 2);
    }

    #[test]
    fn test_sum_of_branches() {
        let mgr = ZddManager::new();
        let t = TreeExpr::sum([TreeExpr::branch(["a"]), TreeExpr::branch(["b"])]);
        let z = mgr.trees(&t);

        let ha = djb2(PATH_SEED, b"a");
        let hb = djb2(PATH_SEED, b"b");
        assert_ne!(ha, hb);

        // {{ha}, {hb}}
        assert_eq!(mgr.count(z), 2);
        assert!(mgr.contains(z, &[Var::new(ha)]));
        assert!(mgr.contains(z, &[Var::new(hb)]));

        // A single node over the smaller variable, with the larger below.
        let root = mgr.node(z);
        assert_eq!(root.var, Var::new(ha.min(hb)));
        assert_eq!(root.hi, ZddId::ONE);
        assert_eq!(root.lo, mgr.singleton(Var::new(ha.max(hb))));
    }

    #[test]
    fn test_product_of_branches() {
        let mgr = ZddManager::new();
        let t = TreeExpr::product([TreeExpr::branch(["a"]), TreeExpr::branch(["b"])]);
        let z = mgr.trees(&t);

        // Both edges sit at the root, so "b" hashes from the seed, not
        // from under "a".
        let ha = djb2(PATH_SEED, b"a");
        let hb = djb2(PATH_SEED, b"b");

        assert_eq!(mgr.count(z), 1);
        assert!(mgr.contains(z, &[Var::new(ha), Var::new(hb)]));
    }

    #[test]
    fn test_subtrees_of_branch_chain() {
        let mgr = ZddManager::new();
        let t = TreeExpr::branch(["a", "b"]);
        let z = mgr.subtrees(&t);

        let h1 = djb2(PATH_SEED, b"a");
        let h2 = djb2(h1, b"b");

        // {∅, {h1}, {h1, h2}}
        assert_eq!(mgr.count(z), 3);
        assert!(mgr.contains_empty(z));
        assert!(mgr.contains(z, &[Var::new(h1)]));
        assert!(mgr.contains(z, &[Var::new(h1), Var::new(h2)]));
        // The dangling selection {h2} is not prefix-closed.
        assert!(!mgr.contains(z, &[Var::new(h2)]));
    }

    #[test]
    fn test_prefix_of_bot_is_empty() {
        let mgr = ZddManager::new();
        let t = TreeExpr::prefix("a", TreeExpr::Bot);
        assert_eq!(mgr.trees(&t), ZddId::ZERO);
        // No trees, but the empty selection over no trees still stands.
        assert_eq!(mgr.subtrees(&t), ZddId::ONE);
    }

    #[test]
    fn test_empty_product_and_sum() {
        let mgr = ZddManager::new();
        assert_eq!(mgr.trees(&TreeExpr::product([])), ZddId::ONE);
        assert_eq!(mgr.trees(&TreeExpr::sum([])), ZddId::ZERO);
    }

    #[test]
    fn test_shared_paths_collide() {
        let mgr = ZddManager::new();
        // a(b) summed with a(c): both roots hash to the same variable.
        let t = TreeExpr::sum([TreeExpr::branch(["a", "b"]), TreeExpr::branch(["a", "c"])]);
        let z = mgr.trees(&t);

        let ha = djb2(PATH_SEED, b"a");
        let hab = djb2(ha, b"b");
        let hac = djb2(ha, b"c");

        assert_eq!(mgr.count(z), 2);
        assert!(mgr.contains(z, &[Var::new(ha), Var::new(hab)]));
        assert!(mgr.contains(z, &[Var::new(ha), Var::new(hac)]));
    }

    #[test]
    fn test_lowering_deterministic_across_managers() {
        let t = TreeExpr::sum([
            TreeExpr::branch(["a", "b"]),
            TreeExpr::product([TreeExpr::branch(["c"]), TreeExpr::branch(["d", "e"])]),
        ]);

        let m1 = ZddManager::new();
        let m2 = ZddManager::new();
        let z1 = m1.trees(&t);
        let z2 = m2.trees(&t);

        assert_eq!(z1.raw(), z2.raw());
        assert_eq!(m1.num_nodes(), m2.num_nodes());
        assert_eq!(m1.count(z1), m2.count(z2));
    }

    #[test]
    fn test_shared_cache_across_calls() {
        let mgr = ZddManager::new();
        let t = TreeExpr::branch(["a", "b"]);
        // Same expression, same manager: node-identical result.
        assert_eq!(mgr.trees(&t), mgr.trees(&t));
    }

    #[test]
    fn test_subtrees_contain_trees() {
        let mgr = ZddManager::new();
        let t = TreeExpr::product([
            TreeExpr::branch(["a", "b"]),
            TreeExpr::sum([TreeExpr::branch(["c"]), TreeExpr::Top]),
        ]);
        let full = mgr.trees(&t);
        let sub = mgr.subtrees(&t);

        for set in mgr.collect_sets(full) {
            assert!(mgr.contains(sub, &set), "tree {:?} missing from subtrees", set);
        }
        assert!(mgr.contains_empty(sub));
    }
}
