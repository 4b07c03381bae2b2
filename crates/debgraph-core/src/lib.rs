#![forbid(unsafe_code)]
//! debgraph-core library.
//!
//! Resolves the transitive dependency graph of a package described by
//! Debian-style repository metadata (`Packages` files of blank-line
//! separated stanzas). The pieces, leaves first:
//!
//! - [`stanza`] — splits repository text into stanzas and extracts a
//!   package's direct-dependency names from its `Depends:` field.
//! - [`source`] — the [`MetadataSource`] capability (direct deps by
//!   package name) with local-file and remote-archive implementations.
//! - [`graph`] — the DFS builder, the traversal-ordered
//!   [`DependencyGraph`], statistics, ASCII tree, and DOT export.
//!
//! # Conventions
//!
//! - **Errors**: typed [`SourceError`] at the metadata boundary;
//!   binaries wrap with `anyhow` context.
//! - **Logging**: `tracing` macros (`warn!` for non-fatal fetch
//!   failures during traversal, `debug!` for pruning decisions).

pub mod graph;
pub mod source;
pub mod stanza;

pub use graph::build::DependencyGraphBuilder;
pub use graph::{CycleSet, DependencyGraph, FetchWarning, Resolution};
pub use source::{FileSource, MetadataSource, RemoteSource, SourceError};
