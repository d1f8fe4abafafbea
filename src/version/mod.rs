//! Version parsing and constraint evaluation.
//!
//! Python package versions follow PEP 440; this module implements the
//! subset pip-installed packages use in practice (epoch, dotted release,
//! pre/post/dev segments, local labels) plus the specifier operators a
//! requirements manifest can carry.
//!
//! # Modules
//!
//! - [`semantic`] - [`Version`] parsing and total ordering
//! - [`constraint`] - [`Constraint`] expressions and satisfaction checks

pub mod constraint;
pub mod semantic;

pub use constraint::{CompareOp, Comparator, Constraint, InvalidConstraint};
pub use semantic::{InvalidVersion, Version};
