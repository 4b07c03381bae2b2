//! Configuration validation.
//!
//! Collects every problem with the resolved configuration before
//! failing, so the user sees all of them in one message.

use std::fmt;
use std::path::PathBuf;

/// Fully resolved run configuration, built from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub package: String,
    pub repository: String,
    pub test_repo_mode: bool,
    pub output: PathBuf,
    pub ascii_tree: bool,
    pub max_depth: Option<usize>,
    pub filter: Option<String>,
    pub verbose: bool,
}

impl Config {
    /// Check the configuration, reporting every violation at once.
    ///
    /// # Errors
    ///
    /// A single message joining all violations with `"; "`.
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut problems: Vec<String> = Vec::new();

        if self.package.trim().is_empty() {
            problems.push("package name must not be empty".to_string());
        }

        if self.repository.trim().is_empty() {
            problems.push("repository location must not be empty".to_string());
        } else if !self.test_repo_mode && !is_valid_url(&self.repository) {
            problems.push(format!(
                "invalid repository URL '{}' (expected http:// or https://; use --test-repo-mode for local files)",
                self.repository
            ));
        }

        if self.max_depth == Some(0) {
            problems.push("max depth must be positive".to_string());
        }

        if let Some(filter) = &self.filter {
            if filter.is_empty() {
                problems.push("filter substring must not be empty".to_string());
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            anyhow::bail!("{}", problems.join("; "))
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "package:        {}", self.package)?;
        writeln!(f, "repository:     {}", self.repository)?;
        writeln!(f, "test repo mode: {}", self.test_repo_mode)?;
        writeln!(f, "output:         {}", self.output.display())?;
        writeln!(f, "ascii tree:     {}", self.ascii_tree)?;
        writeln!(
            f,
            "max depth:      {}",
            self.max_depth.map_or_else(|| "unlimited".to_string(), |d| d.to_string())
        )?;
        write!(
            f,
            "filter:         {}",
            self.filter.as_deref().unwrap_or("(none)")
        )
    }
}

/// Minimal URL shape check: an http(s) scheme followed by a non-empty
/// host part.
fn is_valid_url(url: &str) -> bool {
    url.strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/'))
}
