//! Requirement checking against an installed environment.
//!
//! The checker resolves each parsed entry against a [`PackageIndex`]
//! snapshot and evaluates its constraint, producing one [`CheckResult`]
//! per entry in manifest order.
//!
//! # Modules
//!
//! - [`status`] - per-entry statuses and the exit-signal policy
//! - [`resolver`] - the injected package-metadata capability
//! - [`checker`] - resolution and evaluation over a manifest
//! - [`installer`] - optional remediation of failed entries

pub mod checker;
pub mod installer;
pub mod resolver;
pub mod status;

pub use checker::ManifestChecker;
pub use installer::{remediate, PackageInstaller, PipInstaller, RemediationOutcome};
pub use resolver::{FixedIndex, PackageIndex, PipIndex};
pub use status::{CheckResult, CheckStatus, FailurePolicy};
