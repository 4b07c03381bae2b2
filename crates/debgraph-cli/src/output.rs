//! Small helpers for human-facing report formatting.

use std::fmt::Write as _;

/// Shared width for report separators.
pub const RULE_WIDTH: usize = 72;

/// Append a horizontal separator line.
pub fn rule(out: &mut String) {
    let _ = writeln!(out, "{:-<width$}", "", width = RULE_WIDTH);
}

/// Append a section heading followed by a separator.
pub fn section(out: &mut String, heading: &str) {
    let _ = writeln!(out, "{heading}");
    rule(out);
}

/// Append a left-aligned key/value line.
pub fn kv(out: &mut String, key: &str, value: impl AsRef<str>) {
    let _ = writeln!(out, "{:<22} {}", format!("{key}:"), value.as_ref());
}
