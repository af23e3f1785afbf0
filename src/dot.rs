//! Graphviz DOT export for ZDD visualization.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

use crate::reference::ZddId;
use crate::types::Var;
use crate::zdd::ZddManager;

impl ZddManager {
    /// Generates a DOT representation of the diagram rooted at `root`.
    ///
    /// # Example
    ///
    /// ```
    /// use zdd_forest::expr::TreeExpr;
    /// use zdd_forest::zdd::ZddManager;
    ///
    /// let mgr = ZddManager::new();
    /// let z = mgr.trees(&TreeExpr::branch(["a", "b"]));
    ///
    /// let dot = mgr.to_dot(z);
    /// assert!(dot.contains("digraph ZDD"));
    /// ```
    pub fn to_dot(&self, root: ZddId) -> String {
        self.to_dot_multi(&[(root, "root")])
    }

    /// Generates DOT for multiple roots with labels.
    pub fn to_dot_multi(&self, roots: &[(ZddId, &str)]) -> String {
        let mut dot = String::new();
        writeln!(dot, "digraph ZDD {{").unwrap();
        writeln!(dot, "  rankdir=TB;").unwrap();
        writeln!(dot, "  node [shape=circle];").unwrap();
        writeln!(dot).unwrap();

        writeln!(dot, "  // Root labels").unwrap();
        for (i, (_, label)) in roots.iter().enumerate() {
            writeln!(dot, "  root{} [label=\"{}\", shape=none];", i, label).unwrap();
        }
        writeln!(dot).unwrap();

        writeln!(dot, "  // Terminals").unwrap();
        writeln!(dot, "  zero [label=\"⊥\", shape=square];").unwrap();
        writeln!(dot, "  one [label=\"⊤\", shape=square];").unwrap();
        writeln!(dot).unwrap();

        // Group nodes by variable so equal path hashes share a rank.
        let mut visited = HashSet::new();
        let mut by_var: BTreeMap<Var, Vec<ZddId>> = BTreeMap::new();
        for (id, _) in roots {
            self.collect_nodes(*id, &mut visited, &mut by_var);
        }

        for (var, nodes) in &by_var {
            writeln!(dot, "  // {}", var).unwrap();
            writeln!(dot, "  {{ rank=same;").unwrap();
            for &id in nodes {
                writeln!(dot, "    n{} [label=\"{}\"];", id.raw(), var).unwrap();
            }
            writeln!(dot, "  }}").unwrap();
        }
        writeln!(dot).unwrap();

        writeln!(dot, "  // Root edges").unwrap();
        for (i, (id, _)) in roots.iter().enumerate() {
            writeln!(dot, "  root{} -> {} [style=bold];", i, Self::dot_target(*id)).unwrap();
        }
        writeln!(dot).unwrap();

        writeln!(dot, "  // Edges").unwrap();
        for id in visited.iter() {
            let node = self.node(*id);
            // Lo edge dashed, hi edge solid.
            writeln!(dot, "  n{} -> {} [style=dashed];", id.raw(), Self::dot_target(node.lo)).unwrap();
            writeln!(dot, "  n{} -> {};", id.raw(), Self::dot_target(node.hi)).unwrap();
        }

        writeln!(dot, "}}").unwrap();
        dot
    }

    fn dot_target(id: ZddId) -> String {
        if id.is_zero() {
            "zero".to_string()
        } else if id.is_one() {
            "one".to_string()
        } else {
            format!("n{}", id.raw())
        }
    }

    fn collect_nodes(&self, id: ZddId, visited: &mut HashSet<ZddId>, by_var: &mut BTreeMap<Var, Vec<ZddId>>) {
        if id.is_terminal() || visited.contains(&id) {
            return;
        }
        visited.insert(id);

        let node = self.node(id);
        by_var.entry(node.var).or_default().push(id);

        self.collect_nodes(node.lo, visited, by_var);
        self.collect_nodes(node.hi, visited, by_var);
    }
}
