//! Union-Find (disjoint sets) keyed by vertex value.
//!
//! Backs Kruskal's greedy cycle avoidance. `parent` maps each element to its
//! representative chain and `rank` carries the tree-height heuristic.
//! [`DisjointSets::find`] flattens the walked path onto the root (full path
//! compression, done iteratively in a second pass), so repeated lookups
//! approach constant time.
//!
//! Tie-breaking on equal rank attaches the second argument's root under the
//! first argument's root, which makes the representative deterministic for a
//! fixed call sequence without requiring an ordering on the element type.
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// A disjoint-set structure over elements of type `V`.
///
/// Invariant: `find` always returns a root element whose parent entry points
/// at itself.
#[derive(Debug, Clone, Default)]
pub struct DisjointSets<V> {
    parent: HashMap<V, V>,
    rank: HashMap<V, u8>,
}

impl<V: Eq + Hash + Clone> DisjointSets<V> {
    /// Creates an empty collection of sets.
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
        }
    }

    /// Adds `element` as a singleton set. Idempotent: an element that is
    /// already tracked keeps its current set.
    pub fn insert(&mut self, element: V) {
        if !self.parent.contains_key(&element) {
            self.rank.insert(element.clone(), 0);
            self.parent.insert(element.clone(), element);
        }
    }

    /// Returns `true` if `element` has been inserted.
    pub fn contains(&self, element: &V) -> bool {
        self.parent.contains_key(element)
    }

    /// Returns the representative of the set containing `element`, or `None`
    /// for an element that was never inserted.
    ///
    /// Compresses the walked path: every element on it is re-pointed
    /// directly at the root.
    pub fn find(&mut self, element: &V) -> Option<V> {
        if !self.parent.contains_key(element) {
            return None;
        }

        // First pass: walk to the root.
        let mut root = element.clone();
        while let Some(parent) = self.parent.get(&root) {
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        // Second pass: point the whole path at the root.
        let mut current = element.clone();
        while current != root {
            let next = self
                .parent
                .insert(current, root.clone())
                .unwrap_or_else(|| root.clone());
            current = next;
        }

        Some(root)
    }

    /// Merges the sets containing `a` and `b`, inserting either element
    /// first if needed.
    ///
    /// Returns `true` if two distinct sets were merged and `false` if the
    /// elements were already in the same set — the signal Kruskal uses to
    /// reject cycle-forming edges.
    pub fn union(&mut self, a: &V, b: &V) -> bool {
        self.insert(a.clone());
        self.insert(b.clone());

        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank.get(&root_a).copied().unwrap_or(0);
        let rank_b = self.rank.get(&root_b).copied().unwrap_or(0);
        match rank_a.cmp(&rank_b) {
            Ordering::Less => {
                self.parent.insert(root_a, root_b);
            }
            Ordering::Greater => {
                self.parent.insert(root_b, root_a);
            }
            Ordering::Equal => {
                self.parent.insert(root_b, root_a.clone());
                self.rank.insert(root_a, rank_a + 1);
            }
        }
        true
    }

    /// Returns `true` if both elements are tracked and share a
    /// representative.
    pub fn same_set(&mut self, a: &V, b: &V) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            (None, _) | (_, None) => false,
        }
    }

    /// Returns the number of tracked elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no elements are tracked.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn insert_creates_singletons() {
        let mut sets = DisjointSets::new();
        for v in ["a", "b", "c"] {
            sets.insert(v);
        }
        for v in ["a", "b", "c"] {
            assert_eq!(sets.find(&v), Some(v), "{v} should be its own root");
        }
        assert_eq!(sets.len(), 3);
    }

    #[test]
    fn find_unknown_element_is_none() {
        let mut sets: DisjointSets<&str> = DisjointSets::new();
        assert_eq!(sets.find(&"ghost"), None);
        assert!(!sets.contains(&"ghost"));
    }

    #[test]
    fn union_merges_and_reports_success() {
        let mut sets = DisjointSets::new();
        assert!(sets.union(&1, &2), "first union merges");
        assert!(!sets.union(&1, &2), "second union is a no-op");
        assert!(sets.same_set(&1, &2));
    }

    #[test]
    fn union_auto_inserts_unknown_elements() {
        let mut sets = DisjointSets::new();
        assert!(sets.union(&"x", &"y"));
        assert!(sets.contains(&"x"));
        assert!(sets.contains(&"y"));
    }

    #[test]
    fn union_is_transitive() {
        let mut sets = DisjointSets::new();
        sets.union(&1, &2);
        sets.union(&2, &3);
        assert!(sets.same_set(&1, &3));
        assert!(!sets.same_set(&1, &4) && !sets.contains(&4));
    }

    #[test]
    fn union_does_not_affect_other_sets() {
        let mut sets = DisjointSets::new();
        sets.union(&1, &2);
        sets.union(&3, &4);
        assert!(!sets.same_set(&1, &3));
        assert!(!sets.same_set(&2, &4));
    }

    #[test]
    fn equal_rank_tie_attaches_second_under_first() {
        let mut sets = DisjointSets::new();
        sets.union(&"b", &"a");
        assert_eq!(sets.find(&"a"), Some("b"));
        assert_eq!(sets.find(&"b"), Some("b"));
    }

    #[test]
    fn higher_rank_root_absorbs_smaller_tree() {
        let mut sets = DisjointSets::new();
        sets.union(&1, &2); // root 1, rank 1
        sets.union(&1, &3); // singleton 3 goes under 1
        assert_eq!(sets.find(&3), Some(1));
        assert_eq!(sets.find(&2), Some(1));
    }

    #[test]
    fn path_compression_flattens_chains() {
        let mut sets = DisjointSets::new();
        for i in 1..64u32 {
            sets.union(&0, &i);
        }
        let root = sets.find(&0).expect("0 is tracked");
        for i in 0..64u32 {
            assert_eq!(sets.find(&i), Some(root));
        }
    }

    #[test]
    fn empty_reports_empty() {
        let sets: DisjointSets<u32> = DisjointSets::default();
        assert!(sets.is_empty());
        assert_eq!(sets.len(), 0);
    }
}
