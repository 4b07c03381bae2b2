//! Dependency graph construction.
//!
//! # Overview
//!
//! [`DependencyGraphBuilder`] drives a depth-first traversal over
//! package names, fetching each newly visited node's direct
//! dependencies from a [`MetadataSource`] on demand. Cycle detection
//! uses classic gray-marking: a name reached while still on the active
//! path is recorded in the cycle set and not re-expanded. Two pruning
//! policies stop expansion without removing the pruned name from its
//! parent's record: a depth bound and a substring filter.
//!
//! # Traversal shape
//!
//! The walk is iterative — an explicit stack of frames
//! `(name, deps, next-child index, depth)` — so pathological chains
//! cannot overflow the call stack. A node's gray mark is released
//! exactly when its frame is popped (or immediately on the
//! fetch-warning path, where no frame is pushed), so the mark never
//! survives returning up the stack.
//!
//! # Failure policy
//!
//! Fetch failures on the root abort the build with the error. On any
//! other node they are warnings: the node gets an empty record, the
//! error is logged and collected, and traversal of its siblings
//! continues.
//!
//! Termination: the recursion stack bounds revisits along any path and
//! the visited set bounds global re-expansion to once per distinct
//! name; both are finite over a finite name set.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::source::{MetadataSource, SourceError};

use super::{CycleSet, DependencyGraph, FetchWarning, Resolution};

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds dependency graphs from a metadata source.
///
/// One builder may serve many roots: each [`build`](Self::build) call
/// creates its traversal state fresh, so repeated calls are
/// independent and reproducible.
#[derive(Debug)]
pub struct DependencyGraphBuilder<S> {
    source: S,
    max_depth: Option<usize>,
    filter_substring: Option<String>,
}

/// Per-build mutable traversal state, never held across calls.
struct TraversalContext {
    /// Names fully expanded at least once (memoization).
    visited: HashSet<String>,
    /// Names on the currently active path (gray marks).
    recursion_stack: HashSet<String>,
}

/// One explicit DFS frame: an expanded node whose children are being
/// walked in record order.
struct Frame {
    name: String,
    deps: Vec<String>,
    next: usize,
    depth: usize,
}

impl<S: MetadataSource> DependencyGraphBuilder<S> {
    /// Builder over `source` with no depth bound and no filter.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            max_depth: None,
            filter_substring: None,
        }
    }

    /// Stop expanding nodes at `depth` (root is depth 0, so a bound of
    /// 1 expands only the root). Must be positive to be useful; a
    /// bound of 0 yields an empty graph.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Skip expanding any package whose name contains `substring`.
    /// Skipped names still appear in their parents' records.
    #[must_use]
    pub fn filter_substring(mut self, substring: impl Into<String>) -> Self {
        self.filter_substring = Some(substring.into());
        self
    }

    /// Resolve the dependency graph rooted at `root`.
    ///
    /// Returns the traversal-ordered graph, the cycle set, and any
    /// non-fatal fetch warnings.
    ///
    /// # Errors
    ///
    /// Propagates the source error when fetching the root itself
    /// fails; all other fetch failures are downgraded to warnings.
    pub fn build(&self, root: &str) -> Result<Resolution, SourceError> {
        let mut ctx = TraversalContext {
            visited: HashSet::new(),
            recursion_stack: HashSet::new(),
        };
        let mut graph = DependencyGraph::new();
        let mut cycles = CycleSet::new();
        let mut warnings = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();

        if let Some(frame) = self.enter(root, 0, true, &mut ctx, &mut graph, &mut cycles, &mut warnings)? {
            stack.push(frame);
        }

        while let Some(top) = stack.last_mut() {
            if let Some(child) = top.deps.get(top.next).cloned() {
                top.next += 1;
                let depth = top.depth + 1;
                if let Some(frame) =
                    self.enter(&child, depth, false, &mut ctx, &mut graph, &mut cycles, &mut warnings)?
                {
                    stack.push(frame);
                }
            } else {
                // Frame exhausted: release the gray mark.
                ctx.recursion_stack.remove(&top.name);
                stack.pop();
            }
        }

        Ok(Resolution {
            graph,
            cycles,
            warnings,
        })
    }

    /// Decide whether `(name, depth)` gets expanded, and expand it.
    ///
    /// Returns a frame when the node was fetched and has children to
    /// walk; `None` when it was pruned, memoized, a cycle edge, or
    /// downgraded to a warning. Only a root fetch failure is an error.
    #[allow(clippy::too_many_arguments)]
    fn enter(
        &self,
        name: &str,
        depth: usize,
        is_root: bool,
        ctx: &mut TraversalContext,
        graph: &mut DependencyGraph,
        cycles: &mut CycleSet,
        warnings: &mut Vec<FetchWarning>,
    ) -> Result<Option<Frame>, SourceError> {
        if self.max_depth.is_some_and(|limit| depth >= limit) {
            debug!(package = name, depth, "depth bound reached; not expanding");
            return Ok(None);
        }

        if let Some(filter) = self.filter_substring.as_deref() {
            if name.contains(filter) {
                debug!(package = name, filter, "filter matched; not expanding");
                return Ok(None);
            }
        }

        if ctx.recursion_stack.contains(name) {
            // Back edge to an active ancestor — record, don't follow.
            cycles.insert(name.to_string());
            return Ok(None);
        }

        if ctx.visited.contains(name) {
            // Fully expanded elsewhere; record is already stored.
            return Ok(None);
        }

        ctx.visited.insert(name.to_string());
        ctx.recursion_stack.insert(name.to_string());

        match self.source.fetch(name) {
            Ok(deps) => {
                graph.insert(name.to_string(), deps.clone());
                Ok(Some(Frame {
                    name: name.to_string(),
                    deps,
                    next: 0,
                    depth,
                }))
            }
            Err(err) if is_root => Err(err),
            Err(err) => {
                warn!(package = name, error = %err, "dependency fetch failed; recording empty record");
                graph.insert(name.to_string(), Vec::new());
                warnings.push(FetchWarning {
                    package: name.to_string(),
                    message: err.to_string(),
                });
                // No frame pushed, so release the gray mark here.
                ctx.recursion_stack.remove(name);
                Ok(None)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
