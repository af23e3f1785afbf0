//! Iterator for enumerating the member sets of a ZDD.

use crate::reference::ZddId;
use crate::types::Var;
use crate::zdd::ZddManager;

/// Iterator that yields every set in a ZDD family.
pub struct SetIterator<'a> {
    mgr: &'a ZddManager,
    /// Stack of (node, partial set, hi branch already taken).
    stack: Vec<(ZddId, Vec<Var>, bool)>,
}

impl<'a> SetIterator<'a> {
    /// Creates a new iterator over the sets of `root`.
    pub fn new(mgr: &'a ZddManager, root: ZddId) -> Self {
        let mut iter = Self { mgr, stack: Vec::new() };
        if !root.is_zero() {
            iter.stack.push((root, Vec::new(), false));
        }
        iter
    }
}

impl<'a> Iterator for SetIterator<'a> {
    type Item = Vec<Var>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, current_set, visited_hi)) = self.stack.pop() {
            if id.is_zero() {
                continue;
            }

            if id.is_one() {
                return Some(current_set);
            }

            let node = self.mgr.node(id);

            if !visited_hi {
                // Explore lo first, come back for hi.
                self.stack.push((id, current_set.clone(), true));
                self.stack.push((node.lo, current_set, false));
            } else {
                let mut hi_set = current_set;
                hi_set.push(node.var);
                self.stack.push((node.hi, hi_set, false));
            }
        }
        None
    }
}

impl ZddManager {
    /// Returns an iterator over all sets in the family.
    ///
    /// # Example
    ///
    /// ```
    /// use zdd_forest::types::Var;
    /// use zdd_forest::zdd::ZddManager;
    ///
    /// let mgr = ZddManager::new();
    /// let f = mgr.union(mgr.singleton(Var::new(1)), mgr.singleton(Var::new(2)));
    ///
    /// let sets: Vec<_> = mgr.iter_sets(f).collect();
    /// assert_eq!(sets.len(), 2);
    /// ```
    pub fn iter_sets(&self, f: ZddId) -> SetIterator<'_> {
        SetIterator::new(self, f)
    }

    /// Collects all sets into a vector of vectors.
    pub fn collect_sets(&self, f: ZddId) -> Vec<Vec<Var>> {
        self.iter_sets(f).collect()
    }
}
