//! reqcheck - Check installed Python packages against a requirements manifest.
//!
//! reqcheck parses a pip-style `requirements.txt`, snapshots the
//! interpreter's installed packages, evaluates each version constraint,
//! and reports per-entry status (`ok`, `missing`, `version-mismatch`) —
//! optionally installing whatever is missing or mismatched.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`checker`] - Resolution and evaluation against the environment
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Requirements manifest parsing
//! - [`report`] - Human and JSON report rendering
//! - [`ui`] - Theme, status marks, and progress output
//! - [`version`] - Version parsing and constraint semantics
//!
//! # Example
//!
//! ```
//! use reqcheck::checker::{FixedIndex, ManifestChecker};
//! use reqcheck::manifest::parser::parse_str;
//!
//! let parsed = parse_str("requests>=2.28\nflask");
//! let index = FixedIndex::new().with("requests", "2.31.0");
//! let results = ManifestChecker::new(&index).check_all(&parsed.entries);
//!
//! assert!(results[0].status.is_ok());          // requests 2.31.0 satisfies >=2.28
//! assert_eq!(results[1].status.label(), "missing"); // flask not installed
//! ```

pub mod checker;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod report;
pub mod ui;
pub mod version;

pub use error::{ReqcheckError, Result};
