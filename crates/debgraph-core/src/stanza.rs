//! Debian-style `Packages` stanza parsing.
//!
//! # Format
//!
//! A repository index is a sequence of stanzas separated by blank
//! lines. Each stanza describes one package as `Field: value` lines:
//!
//! ```text
//! Package: curl
//! Version: 7.68.0-1ubuntu2
//! Depends: libc6 (>= 2.17), libcurl4 (= 7.68.0-1ubuntu2), zlib1g
//! ```
//!
//! Only `Package:` (exact-match key) and `Depends:` are recognized;
//! every other field is ignored. A stanza lacking `Package:` is
//! skipped, not an error.
//!
//! # Dependency expressions
//!
//! The `Depends:` value is comma-separated. Each entry may carry a
//! version constraint in parentheses and `|`-separated alternatives;
//! only the bare name of the first alternative (text before the first
//! `(` or `|`, trimmed) is kept. Entries are deduplicated preserving
//! first-occurrence order after name extraction — no semantic version
//! reconciliation is attempted.

use crate::source::SourceError;

/// Stanza field holding the package name.
const PACKAGE_FIELD: &str = "Package:";

/// Stanza field holding the direct dependency expressions.
const DEPENDS_FIELD: &str = "Depends:";

// ---------------------------------------------------------------------------
// Stanza splitting
// ---------------------------------------------------------------------------

/// Split repository text into stanzas at blank-line boundaries.
///
/// Empty blocks (runs of consecutive blank lines) are dropped.
pub fn split_stanzas(text: &str) -> impl Iterator<Item = &str> {
    text.trim().split("\n\n").filter(|block| !block.trim().is_empty())
}

/// Find the trimmed value of `field` within one stanza, if present.
///
/// Matches the first line that starts with `field` after leading
/// whitespace is trimmed, mirroring how the index format is written
/// in practice (fields begin in column zero; trailing `\r` tolerated).
fn field_value<'a>(stanza: &'a str, field: &str) -> Option<&'a str> {
    stanza
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(field))
        .map(str::trim)
}

// ---------------------------------------------------------------------------
// Dependency extraction
// ---------------------------------------------------------------------------

/// Extract `target_package`'s direct dependency names from repository
/// text.
///
/// Returns the names in `Depends:` first-occurrence order. A matched
/// stanza without a `Depends:` field yields an empty list.
///
/// # Errors
///
/// [`SourceError::PackageNotFound`] if no stanza has a `Package:`
/// value equal to `target_package`.
pub fn parse_dependencies(
    repository_text: &str,
    target_package: &str,
) -> Result<Vec<String>, SourceError> {
    for block in split_stanzas(repository_text) {
        if field_value(block, PACKAGE_FIELD) == Some(target_package) {
            return Ok(field_value(block, DEPENDS_FIELD)
                .map(parse_depends_line)
                .unwrap_or_default());
        }
    }

    Err(SourceError::PackageNotFound(target_package.to_string()))
}

/// Reduce one `Depends:` value to a deduplicated list of bare names.
///
/// `libc6 (>= 2.17), libssl1.1 | libssl3` → `["libc6", "libssl1.1"]`.
#[must_use]
pub fn parse_depends_line(depends: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for entry in depends.split(',') {
        let name = entry.split(['(', '|']).next().unwrap_or("").trim();
        if !name.is_empty() && !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }

    names
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
