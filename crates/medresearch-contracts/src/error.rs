//! Error types for the MedResearch dashboard.
//!
//! Every fallible operation returns `DashResult<T>`. Variants carry enough
//! context for the shell to explain why an intent was refused.

use thiserror::Error;

/// The unified error type for the dashboard crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashError {
    /// An alert draft was submitted with a blank required field.
    #[error("alert draft is missing required field '{field}'")]
    InvalidDraft { field: &'static str },

    /// A record with this id already exists in the store.
    #[error("a record with id '{id}' already exists")]
    DuplicateId { id: String },

    /// The credentials-verification service refused the login.
    #[error("authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    /// An intent that requires a signed-in user arrived with no session.
    #[error("no user is signed in")]
    NotSignedIn,

    /// Item selection was requested in a section that has no detail view.
    #[error("section '{section}' has no drill-down view")]
    NoDrillDown { section: String },

    /// A section, tab or frequency name did not match any known value.
    #[error("unknown {kind} '{name}'")]
    UnknownName { kind: &'static str, name: String },

    /// Evidence levels run from 1 (strongest) to 4.
    #[error("invalid evidence level {value}; expected 1-4")]
    InvalidEvidenceLevel { value: u8 },

    /// A configuration value is missing, malformed, or out of range.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the dashboard crates.
pub type DashResult<T> = Result<T, DashError>;
