//! Manifest parsing with strict/permissive fallback.
//!
//! Each line is first given to the strict parser (full grammar: extras,
//! multi-clause constraints, markers). Lines the strict parser rejects go
//! to a permissive pattern supporting the common subset (single constraint
//! clause). Lines both reject become [`ParseWarning`]s and are excluded
//! from the entry set; a bad line never aborts the run.

use crate::error::{ReqcheckError, Result};
use crate::manifest::entry::RequirementEntry;
use crate::version::{Comparator, Constraint};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?")
        .expect("NAME_RE must compile")
});

static EXTRA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?$")
        .expect("EXTRA_RE must compile")
});

// Common-subset fallback, one constraint clause at most.
static PERMISSIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Za-z0-9_.\-]+)(\[[A-Za-z0-9_.,\-\s]+\])?\s*([!=<>~]{1,2}[^;#\s]+)?(?:\s*;\s*([^#]+))?$",
    )
    .expect("PERMISSIVE_RE must compile")
});

/// A manifest line neither parse strategy could handle.
///
/// Recorded and reported; the line is excluded from the entry set and the
/// run continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    /// 1-based line number in the manifest.
    pub line_no: usize,
    /// The offending line, as written.
    pub raw: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: unparsable requirement: {}",
            self.line_no, self.raw
        )
    }
}

/// Parse output: entries in manifest order plus collected warnings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedManifest {
    pub entries: Vec<RequirementEntry>,
    pub warnings: Vec<ParseWarning>,
}

/// Parse manifest text.
///
/// Blank lines and `#` comment lines are skipped without being attempted.
/// Parsing the same text twice yields structurally equal results.
pub fn parse_str(text: &str) -> ParsedManifest {
    let mut manifest = ParsedManifest::default();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        if let Some(entry) = parse_strict(stripped, line_no, line) {
            manifest.entries.push(entry);
            continue;
        }
        tracing::debug!(line_no, "strict parse failed, trying permissive");
        if let Some(entry) = parse_permissive(stripped, line_no, line) {
            manifest.entries.push(entry);
            continue;
        }

        manifest.warnings.push(ParseWarning {
            line_no,
            raw: line.to_string(),
        });
    }

    manifest
}

/// Parse a manifest file.
///
/// A missing or unreadable file is fatal: no partial results are produced.
pub fn parse_file(path: &Path) -> Result<ParsedManifest> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReqcheckError::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReqcheckError::ManifestRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })?;
    Ok(parse_str(&text))
}

/// Full grammar: `name[extras] op version[,op version...] ; marker`.
fn parse_strict(stripped: &str, line_no: usize, raw: &str) -> Option<RequirementEntry> {
    let (head, marker) = match stripped.split_once(';') {
        Some((head, marker)) => {
            let marker = marker.trim();
            if marker.is_empty() {
                return None;
            }
            (head.trim_end(), Some(marker.to_string()))
        }
        None => (stripped, None),
    };

    let name_match = NAME_RE.find(head)?;
    let name = name_match.as_str().to_string();
    let mut rest = head[name_match.end()..].trim_start();

    let mut extras = BTreeSet::new();
    if let Some(after_bracket) = rest.strip_prefix('[') {
        let (inner, after) = after_bracket.split_once(']')?;
        for extra in inner.split(',') {
            let extra = extra.trim();
            if !EXTRA_RE.is_match(extra) {
                return None;
            }
            extras.insert(extra.to_string());
        }
        rest = after.trim_start();
    }

    let constraint = if rest.is_empty() {
        None
    } else {
        Some(Constraint::parse(rest).ok()?)
    };

    Some(RequirementEntry {
        name,
        extras,
        constraint,
        marker,
        line_no,
        raw: raw.to_string(),
    })
}

/// Common subset: single constraint clause, version text kept as written.
fn parse_permissive(stripped: &str, line_no: usize, raw: &str) -> Option<RequirementEntry> {
    let caps = PERMISSIVE_RE.captures(stripped)?;

    let name = caps.get(1)?.as_str().to_string();
    let extras: BTreeSet<String> = match caps.get(2) {
        Some(m) => m
            .as_str()
            .trim_matches(['[', ']'])
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect(),
        None => BTreeSet::new(),
    };
    let constraint = match caps.get(3) {
        Some(m) => Some(Constraint::single(Comparator::parse_lenient(m.as_str())?)),
        None => None,
    };
    let marker = caps.get(4).map(|m| m.as_str().trim().to_string());

    Some(RequirementEntry {
        name,
        extras,
        constraint,
        marker,
        line_no,
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(line: &str) -> RequirementEntry {
        let parsed = parse_str(line);
        assert!(
            parsed.warnings.is_empty(),
            "unexpected warnings: {:?}",
            parsed.warnings
        );
        assert_eq!(parsed.entries.len(), 1);
        parsed.entries.into_iter().next().unwrap()
    }

    #[test]
    fn bare_name() {
        let entry = single("requests");
        assert_eq!(entry.name, "requests");
        assert!(entry.extras.is_empty());
        assert!(entry.constraint.is_none());
        assert!(entry.marker.is_none());
    }

    #[test]
    fn name_with_single_constraint() {
        let entry = single("requests>=2.28.0");
        assert_eq!(entry.name, "requests");
        let constraint = entry.constraint.unwrap();
        assert!(constraint.satisfied_by("2.31.0"));
        assert!(!constraint.satisfied_by("2.27.0"));
    }

    #[test]
    fn name_with_clause_conjunction() {
        let entry = single("numpy >=1.24, <2.0");
        let constraint = entry.constraint.unwrap();
        assert_eq!(constraint.clauses().len(), 2);
        assert!(constraint.satisfied_by("1.26.4"));
        assert!(!constraint.satisfied_by("2.0.1"));
    }

    #[test]
    fn extras_and_constraint() {
        let entry = single("uvicorn[standard]==0.23.2");
        assert_eq!(entry.name, "uvicorn");
        assert!(entry.extras.contains("standard"));
        assert_eq!(entry.display(), "uvicorn[standard]==0.23.2");
    }

    #[test]
    fn multiple_extras_normalize_to_set() {
        let entry = single("fastapi[all, standard]");
        assert_eq!(entry.extras.len(), 2);
        assert!(entry.extras.contains("all"));
        assert!(entry.extras.contains("standard"));
    }

    #[test]
    fn marker_is_carried_not_evaluated() {
        let entry = single(r#"pywin32>=306; sys_platform == "win32""#);
        assert_eq!(entry.name, "pywin32");
        assert_eq!(entry.marker.as_deref(), Some(r#"sys_platform == "win32""#));
        // still checked as universally required: the constraint survives
        assert!(entry.constraint.is_some());
    }

    #[test]
    fn comments_and_blanks_are_skipped_entirely() {
        let parsed = parse_str("# header\n\n   \nrequests\n# trailing\n");
        assert_eq!(parsed.entries.len(), 1);
        assert!(parsed.warnings.is_empty());
        assert_eq!(parsed.entries[0].line_no, 4);
    }

    #[test]
    fn line_numbers_are_one_based_manifest_positions() {
        let parsed = parse_str("foo\nbar\n\nbaz\n");
        let lines: Vec<usize> = parsed.entries.iter().map(|e| e.line_no).collect();
        assert_eq!(lines, vec![1, 2, 4]);
    }

    #[test]
    fn unparsable_line_warns_and_is_excluded() {
        let parsed = parse_str("requests\n???not a pkg???\nflask");
        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].line_no, 2);
        assert!(parsed.warnings[0].raw.contains("???not a pkg???"));
        assert!(parsed.warnings[0].to_string().contains("line 2"));
    }

    #[test]
    fn recursive_include_lines_warn() {
        // -r includes are not a feature; the line surfaces as a warning
        let parsed = parse_str("-r other-requirements.txt");
        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn permissive_fallback_accepts_nonsemantic_versions() {
        // Strict parse rejects the version; the permissive path keeps the
        // clause for reduced-mode evaluation
        let entry = single("weirdpkg==2023-05-01");
        let constraint = entry.constraint.unwrap();
        assert!(constraint.satisfied_by("2023-05-01"));
        assert!(!constraint.satisfied_by("2023-06-01"));
    }

    #[test]
    fn permissive_fallback_swallows_multi_clause_junk() {
        // Strict rejects the version; the permissive pattern keeps the
        // whole tail as one clause, so evaluation degrades to raw string
        // equality against it
        let parsed = parse_str("pkg==bad..version,>=1.0");
        assert_eq!(parsed.entries.len(), 1);
        assert!(parsed.warnings.is_empty());
        let constraint = parsed.entries[0].constraint.as_ref().unwrap();
        assert!(constraint.satisfied_by("bad..version,>=1.0"));
        assert!(!constraint.satisfied_by("1.2.0"));
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "foo==1.0\nbar[x]>=2.0,<3.0\n???bad???\nbaz; python_version < \"3.12\"\n";
        assert_eq!(parse_str(text), parse_str(text));
    }

    #[test]
    fn order_follows_the_manifest() {
        let parsed = parse_str("zlib-state\nattrs\nmarkupsafe");
        let names: Vec<&str> = parsed.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zlib-state", "attrs", "markupsafe"]);
    }

    #[test]
    fn parse_file_missing_is_fatal() {
        let err = parse_file(Path::new("/nonexistent/requirements.txt")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ReqcheckError::ManifestNotFound { .. }
        ));
    }

    #[test]
    fn parse_file_reads_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        std::fs::write(&path, "requests>=2.28\n# comment\nflask\n").unwrap();

        let parsed = parse_file(&path).unwrap();
        assert_eq!(parsed.entries.len(), 2);
        assert!(parsed.warnings.is_empty());
    }
}
