//! Terminal presentation: theme, status marks, and progress.
//!
//! # Modules
//!
//! - [`theme`] - console styles used across all output
//! - [`icons`] - status mark vocabulary with an ASCII fallback
//! - [`progress`] - spinner shown while the environment snapshot runs

pub mod icons;
pub mod progress;
pub mod theme;

pub use icons::StatusKind;
pub use progress::ProgressSpinner;
pub use theme::ReqTheme;
