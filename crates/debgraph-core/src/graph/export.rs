//! Graphviz DOT export.
//!
//! Converts a [`DependencyGraph`] into a [`petgraph`] directed graph
//! and renders it as DOT text. Rasterizing the DOT into an image is
//! the job of an external renderer; this module only produces its
//! input artifact. Nodes cover every name the graph mentions, so
//! pruned or fetch-failed packages still appear as leaves.

use std::collections::HashMap;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

use super::DependencyGraph;

/// Build a petgraph view of the dependency graph, deduplicating edges.
#[must_use]
pub fn to_petgraph(graph: &DependencyGraph) -> DiGraph<String, ()> {
    let mut dg = DiGraph::new();
    let mut nodes: HashMap<String, NodeIndex> = HashMap::new();

    for (name, deps) in graph.iter() {
        let from = intern(&mut dg, &mut nodes, name);
        for dep in deps {
            let to = intern(&mut dg, &mut nodes, dep);
            if !dg.contains_edge(from, to) {
                dg.add_edge(from, to, ());
            }
        }
    }

    dg
}

/// Render the graph as Graphviz DOT text.
#[must_use]
pub fn render_dot(graph: &DependencyGraph) -> String {
    let dg = to_petgraph(graph);
    let labelled = dg.map(|_, name| name.as_str(), |_, ()| "");
    format!("{}", Dot::with_config(&labelled, &[Config::EdgeNoLabel]))
}

fn intern(
    dg: &mut DiGraph<String, ()>,
    nodes: &mut HashMap<String, NodeIndex>,
    name: &str,
) -> NodeIndex {
    if let Some(&idx) = nodes.get(name) {
        return idx;
    }
    let idx = dg.add_node(name.to_string());
    nodes.insert(name.to_string(), idx);
    idx
}

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
    fn petgraph_view_covers_unexpanded_values() {
        let g = graph(&[("a", &["b", "c"]), ("b", &["c"])]);
        let dg = to_petgraph(&g);
        // a, b plus the never-expanded c.
        assert_eq!(dg.node_count(), 3);
        assert_eq!(dg.edge_count(), 3);
    }

    #[test]
    fn duplicate_edges_are_collapsed() {
        let g = graph(&[("a", &["b", "b"])]);
        let dg = to_petgraph(&g);
        assert_eq!(dg.edge_count(), 1);
    }

    #[test]
    fn dot_output_names_nodes_and_edges() {
        let g = graph(&[("a", &["b"])]);
        let dot = render_dot(&g);
        assert!(dot.starts_with("digraph"), "dot: {dot}");
        assert!(dot.contains("\"a\""), "dot: {dot}");
        assert!(dot.contains("\"b\""), "dot: {dot}");
        assert!(dot.contains("->"), "dot: {dot}");
    }

    #[test]
    fn cyclic_graph_exports_without_blowup() {
        let g = graph(&[("a", &["b"]), ("b", &["a"])]);
        let dg = to_petgraph(&g);
        assert_eq!(dg.node_count(), 2);
        assert_eq!(dg.edge_count(), 2);
    }
}
