//! Parsed requirement entries.

use crate::version::Constraint;
use std::collections::BTreeSet;

/// One parsed line of a requirements manifest.
///
/// Entries are immutable once parsed; checking produces separate result
/// values and never mutates the entry set.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementEntry {
    /// Package name as written in the manifest.
    pub name: String,
    /// Requested optional-feature tags (`name[extra1,extra2]`). Order in
    /// the manifest is irrelevant.
    pub extras: BTreeSet<String>,
    /// Version constraint; `None` means any version is acceptable.
    pub constraint: Option<Constraint>,
    /// Environment marker text after `;`. Carried for display, never
    /// evaluated: an entry inapplicable to this environment is still
    /// checked as if universally required.
    pub marker: Option<String>,
    /// 1-based line number in the manifest, for diagnostics.
    pub line_no: usize,
    /// Original line text.
    pub raw: String,
}

impl RequirementEntry {
    /// The requirement as pip would spell it: `name[extras]constraint`.
    ///
    /// This is both the report display string and the argument passed to
    /// `pip install` during remediation (markers excluded).
    pub fn display(&self) -> String {
        let mut out = self.name.clone();
        if !self.extras.is_empty() {
            let extras: Vec<&str> = self.extras.iter().map(String::as_str).collect();
            out.push('[');
            out.push_str(&extras.join(","));
            out.push(']');
        }
        if let Some(constraint) = &self.constraint {
            out.push_str(&constraint.to_string());
        }
        out
    }

    /// Name folded to the registry's canonical form, for lookups.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Normalize a package name: lowercase, runs of `-`/`_`/`.` fold to a
/// single `-` (PyPI convention, so `Foo_Bar.baz` and `foo-bar-baz` are the
/// same package).
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            pending_sep = true;
            continue;
        }
        if pending_sep && !out.is_empty() {
            out.push('-');
        }
        pending_sep = false;
        out.push(c.to_ascii_lowercase());
    }
    out
}
