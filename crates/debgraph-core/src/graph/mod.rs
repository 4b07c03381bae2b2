//! Dependency graph data model and reporting.
//!
//! [`DependencyGraph`] is an insertion-ordered mapping from package
//! name to its direct dependency record, populated by
//! [`build::DependencyGraphBuilder`] in DFS pre-order of first
//! expansion. Keys are inserted at most once; values may name packages
//! that never became keys (pruned, filtered, or fetch-failed nodes).
//!
//! Submodules: [`build`] (traversal), [`stats`] (derived counts),
//! [`tree`] (ASCII rendering), [`export`] (petgraph + Graphviz DOT).

pub mod build;
pub mod export;
pub mod stats;
pub mod tree;

use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Packages reached while still active on the DFS path of the last
/// build. Ordered for deterministic reporting.
pub type CycleSet = BTreeSet<String>;

// ---------------------------------------------------------------------------
// DependencyGraph
// ---------------------------------------------------------------------------

/// Mapping from package name to its direct dependency record,
/// preserving traversal insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Key insertion sequence (DFS pre-order of first expansion).
    order: Vec<String>,
    /// Dependency record per expanded package.
    records: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// An empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the dependency list of a newly expanded package.
    ///
    /// First insertion wins; re-inserting an existing key is a no-op,
    /// upholding the at-most-once key invariant.
    pub(crate) fn insert(&mut self, name: String, deps: Vec<String>) {
        if !self.records.contains_key(&name) {
            self.order.push(name.clone());
            self.records.insert(name, deps);
        }
    }

    /// Number of expanded packages (graph keys).
    #[must_use]
    pub fn package_count(&self) -> usize {
        self.order.len()
    }

    /// `true` when no package was expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `true` if `name` was expanded (is a key).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Direct dependencies recorded for `name`; empty when `name` was
    /// never expanded.
    #[must_use]
    pub fn root_dependencies(&self, name: &str) -> &[String] {
        self.records.get(name).map_or(&[], Vec::as_slice)
    }

    /// Iterate `(package, dependencies)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.root_dependencies(name)))
    }

    /// Sorted, deduplicated union of all dependency-list values:
    /// every package referenced by at least one expanded node.
    #[must_use]
    pub fn flattened_dependencies(&self) -> Vec<String> {
        let set: BTreeSet<&String> = self.records.values().flatten().collect();
        set.into_iter().cloned().collect()
    }

    /// Size of [`Self::flattened_dependencies`].
    #[must_use]
    pub fn dependency_count(&self) -> usize {
        self.records
            .values()
            .flatten()
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Total dependency edges across all records (duplicates across
    /// records counted).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Non-fatal fetch failure recorded during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchWarning {
    /// The package whose fetch failed.
    pub package: String,
    /// The classified error, rendered.
    pub message: String,
}

impl fmt::Display for FetchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.package, self.message)
    }
}

/// Immutable snapshot produced by one `build` call: the graph, the
/// cycle set, and any non-fatal fetch warnings, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The traversal-ordered dependency graph.
    pub graph: DependencyGraph,
    /// Packages detected as an ancestor of themselves.
    pub cycles: CycleSet,
    /// Fetch failures on non-root nodes, swallowed into empty records.
    pub warnings: Vec<FetchWarning>,
}

impl Resolution {
    /// `true` if any cycle edge was detected during the build.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Number of distinct packages on detected cycles.
    #[must_use]
    pub fn cyclic_package_count(&self) -> usize {
        self.cycles.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(entries: &[(&str, &[&str])]) -> DependencyGraph {
        let mut g = DependencyGraph::new();
        for (name, deps) in entries {
            g.insert(
                (*name).to_string(),
                deps.iter().map(|d| (*d).to_string()).collect(),
            );
        }
        g
    }

    #[test]
    fn insertion_order_is_preserved() {
        let g = graph(&[("b", &["c"]), ("a", &[]), ("c", &[])]);
        let keys: Vec<&str> = g.iter().map(|(name, _)| name).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn reinsert_is_a_no_op() {
        let mut g = graph(&[("a", &["b"])]);
        g.insert("a".to_string(), vec!["x".to_string()]);
        assert_eq!(g.package_count(), 1);
        assert_eq!(g.root_dependencies("a"), ["b"]);
    }

    #[test]
    fn flattened_dependencies_sorted_and_deduplicated() {
        let g = graph(&[("A", &["B", "C"]), ("B", &["C"])]);
        assert_eq!(g.flattened_dependencies(), vec!["B", "C"]);
        assert_eq!(g.dependency_count(), 2);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn root_dependencies_of_absent_key_is_empty() {
        let g = graph(&[("a", &["b"])]);
        assert!(g.root_dependencies("b").is_empty());
        assert!(!g.contains("b"));
    }

    #[test]
    fn resolution_cycle_queries() {
        let res = Resolution {
            graph: graph(&[("a", &["b"]), ("b", &["a"])]),
            cycles: CycleSet::from(["a".to_string()]),
            warnings: vec![],
        };
        assert!(res.has_cycles());
        assert_eq!(res.cyclic_package_count(), 1);
    }
}
