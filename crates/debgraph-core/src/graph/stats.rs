//! Derived statistics for a built dependency graph.
//!
//! # Statistics Provided
//!
//! - **package_count**: expanded packages (graph keys).
//! - **dependency_count**: size of the flattened dependency set —
//!   distinct packages referenced by at least one expanded node.
//! - **edge_count**: total dependency edges across all records.
//! - **has_cycles** / **cyclic_package_count**: from the cycle set of
//!   the last build.
//! - **density**: `edge_count / (n * (n - 1))` over the distinct names
//!   appearing anywhere in the graph (keys or values). Zero for graphs
//!   with fewer than two names.

use std::collections::BTreeSet;

use super::Resolution;

/// Summary statistics derived from a [`Resolution`]. Pure functions of
/// the completed graph; no additional traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    /// Number of expanded packages.
    pub package_count: usize,
    /// Distinct packages referenced as a dependency.
    pub dependency_count: usize,
    /// Total dependency edges.
    pub edge_count: usize,
    /// Whether any cycle edge was detected.
    pub has_cycles: bool,
    /// Distinct packages on detected cycles.
    pub cyclic_package_count: usize,
    /// Edge density over all names mentioned in the graph.
    pub density: f64,
}

impl GraphStats {
    /// Compute statistics from a build result.
    #[must_use]
    pub fn from_resolution(resolution: &Resolution) -> Self {
        let graph = &resolution.graph;
        let edge_count = graph.edge_count();

        // Every name the graph mentions: keys plus referenced values.
        let mut names: BTreeSet<&str> = graph.iter().map(|(name, _)| name).collect();
        for (_, deps) in graph.iter() {
            names.extend(deps.iter().map(String::as_str));
        }

        Self {
            package_count: graph.package_count(),
            dependency_count: graph.dependency_count(),
            edge_count,
            has_cycles: resolution.has_cycles(),
            cyclic_package_count: resolution.cyclic_package_count(),
            density: compute_density(names.len(), edge_count),
        }
    }
}

/// Directed-graph density: `edges / (n * (n - 1))`, 0.0 when fewer
/// than two nodes exist.
#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    edge_count as f64 / (node_count * (node_count - 1)) as f64
}
