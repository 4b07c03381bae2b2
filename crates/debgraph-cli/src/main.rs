#![forbid(unsafe_code)]

mod output;
mod report;
mod validate;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use validate::Config;

#[derive(Parser, Debug)]
#[command(
    name = "debgraph",
    version,
    about = "Resolve and render package dependency graphs from Debian-style metadata",
    after_help = "EXAMPLES:\n    # Resolve against a remote archive\n    debgraph curl http://archive.ubuntu.com/ubuntu/\n\n    # Local repository file with an ASCII tree\n    debgraph app ./Packages --test-repo-mode --ascii-tree\n\n    # Bound traversal depth and skip debug packages\n    debgraph libc6 http://archive.ubuntu.com/ubuntu/ -d 2 -f dbg"
)]
struct Cli {
    /// Package whose dependency graph should be resolved.
    package: String,

    /// Repository location: archive URL, or a local file with --test-repo-mode.
    repository: String,

    /// Treat REPOSITORY as a local Packages file.
    #[arg(long)]
    test_repo_mode: bool,

    /// Path of the Graphviz DOT artifact to write.
    #[arg(short, long, default_value = "dependency-graph.dot")]
    output: PathBuf,

    /// Print the dependency tree as ASCII art.
    #[arg(long)]
    ascii_tree: bool,

    /// Maximum traversal depth (positive).
    #[arg(short = 'd', long)]
    max_depth: Option<usize>,

    /// Skip expanding packages whose name contains this substring.
    #[arg(short, long)]
    filter: Option<String>,

    /// Print the resolved configuration before the report.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            package: self.package,
            repository: self.repository,
            test_repo_mode: self.test_repo_mode,
            output: self.output,
            ascii_tree: self.ascii_tree,
            max_depth: self.max_depth,
            filter: self.filter,
            verbose: self.verbose,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DEBGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "debgraph=debug,info"
        } else {
            "debgraph=info,warn"
        })
    });

    let format = env::var("DEBGRAPH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact().with_writer(std::io::stderr)).init();
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    // Every failure exits 1 with one message on stderr, including
    // argument-parse failures (clap would otherwise exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                // --help / --version land here.
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    let config = cli.into_config();
    match report::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
