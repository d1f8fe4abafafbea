//! Error types for reqcheck operations.
//!
//! This module defines [`ReqcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-line manifest problems are *not* errors: they become parse
//!   warnings and the run continues
//! - A package that is missing or at the wrong version is a result status,
//!   never an error
//! - Only manifest-level I/O failure and environment-query failure are
//!   fatal to a run

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for reqcheck operations.
#[derive(Debug, Error)]
pub enum ReqcheckError {
    /// Requirements manifest not found at the expected location.
    #[error("Requirements file not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Requirements manifest exists but could not be read.
    #[error("Failed to read requirements file {path}: {message}")]
    ManifestRead { path: PathBuf, message: String },

    /// The interpreter's package metadata could not be queried.
    #[error("Failed to query installed packages via '{command}': {message}")]
    EnvironmentQuery { command: String, message: String },

    /// A package install invocation failed.
    #[error("Install failed for '{requirement}': {message}")]
    InstallFailed {
        requirement: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for reqcheck operations.
pub type Result<T> = std::result::Result<T, ReqcheckError>;
