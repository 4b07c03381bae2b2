//! ASCII tree rendering of a dependency graph.
//!
//! The printer walks the graph from a root, drawing `├── ` for earlier
//! siblings and `└── ` for the last child at each level (pure
//! formatting, no semantic effect). The visited set is **per branch**:
//! it is cloned at each recursive descent, so a package may appear on
//! independent sibling branches, while a revisit of a name already on
//! the current rendered path is marked as a cycle and not expanded.

use std::collections::HashSet;
use std::fmt::Write as _;

use super::DependencyGraph;

/// Marker appended to a node that closes a cycle on the current path.
const CYCLE_MARKER: &str = " [⟳ cycle]";

/// Render the dependency tree rooted at `root`.
///
/// A root with no recorded dependencies renders as a single line.
#[must_use]
pub fn render_tree(graph: &DependencyGraph, root: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{root}");

    let mut on_path = HashSet::new();
    on_path.insert(root.to_string());
    render_children(graph, graph.root_dependencies(root), &on_path, "", &mut out);

    out
}

fn render_children(
    graph: &DependencyGraph,
    deps: &[String],
    on_path: &HashSet<String>,
    prefix: &str,
    out: &mut String,
) {
    let count = deps.len();
    for (i, dep) in deps.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };

        if on_path.contains(dep) {
            let _ = writeln!(out, "{prefix}{connector}{dep}{CYCLE_MARKER}");
            continue;
        }

        let _ = writeln!(out, "{prefix}{connector}{dep}");

        let children = graph.root_dependencies(dep);
        if !children.is_empty() {
            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            // Branch-local copy: siblings each get a fresh path set.
            let mut branch = on_path.clone();
            branch.insert(dep.clone());
            render_children(graph, children, &branch, &child_prefix, out);
        }
    }
}
