//! Command runner: source selection, graph build, and the report.

use std::fmt::Write as _;
use std::fs;

use anyhow::Context;
use tracing::info;

use debgraph_core::graph::export::render_dot;
use debgraph_core::graph::stats::GraphStats;
use debgraph_core::graph::tree::render_tree;
use debgraph_core::{
    DependencyGraphBuilder, FileSource, MetadataSource, RemoteSource, Resolution, SourceError,
};

use crate::output;
use crate::validate::Config;

/// Validate the configuration, resolve the graph, and print the
/// report. Warnings go to stderr, the report to stdout, and the DOT
/// artifact to `config.output`.
pub fn run(config: &Config) -> anyhow::Result<()> {
    config.validate()?;

    if config.verbose {
        let mut out = String::new();
        output::section(&mut out, "Configuration");
        let _ = writeln!(out, "{config}");
        println!("{out}");
    }

    let resolution = if config.test_repo_mode {
        let source = FileSource::open(&config.repository)?;
        build_with(source, config)?
    } else {
        let source = RemoteSource::fetch_index(&config.repository)?;
        info!(url = source.url(), "resolved package index");
        build_with(source, config)?
    };

    for warning in &resolution.warnings {
        eprintln!("warning: {warning}");
    }

    print!("{}", render_report(config, &resolution));

    if config.ascii_tree {
        println!();
        print!("{}", render_tree(&resolution.graph, &config.package));
    }

    let dot = render_dot(&resolution.graph);
    fs::write(&config.output, dot)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    println!();
    println!("graph written to {}", config.output.display());

    Ok(())
}

fn build_with<S: MetadataSource>(source: S, config: &Config) -> Result<Resolution, SourceError> {
    let mut builder = DependencyGraphBuilder::new(source);
    if let Some(depth) = config.max_depth {
        builder = builder.max_depth(depth);
    }
    if let Some(filter) = &config.filter {
        builder = builder.filter_substring(filter.clone());
    }
    builder.build(&config.package)
}

fn render_report(config: &Config, resolution: &Resolution) -> String {
    let stats = GraphStats::from_resolution(resolution);

    let mut out = String::new();
    output::section(&mut out, &format!("Dependency graph for '{}'", config.package));
    output::kv(&mut out, "packages", stats.package_count.to_string());
    output::kv(&mut out, "dependencies", stats.dependency_count.to_string());
    output::kv(&mut out, "edges", stats.edge_count.to_string());
    output::kv(
        &mut out,
        "cycles",
        if stats.has_cycles {
            format!("yes ({} packages)", stats.cyclic_package_count)
        } else {
            "none".to_string()
        },
    );
    output::kv(&mut out, "density", format!("{:.3}", stats.density));

    out
}
