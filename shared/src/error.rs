//! Error types for the portfolio engines.
//!
//! The taxonomy is deliberately small: one recoverable runtime failure (the
//! mail handoff) and the ways a page configuration can be rejected. A section
//! id with no rendered target is not an error at all; the navigator treats it
//! as a no-op.

use thiserror::Error;

/// The host could not dispatch a `mailto:` URI.
///
/// Raised synchronously while handing the URI to the platform. Nothing is
/// ever reported after a successful dispatch; the mail client owns the
/// message from then on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandoffError {
    /// The platform rejected the navigation request.
    #[error("failed to open mail client: {0}")]
    Dispatch(String),

    /// No window or navigation context to hand the URI to.
    #[error("no navigation context available for the mail handoff")]
    Unavailable,
}

/// A page configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("section list must not be empty")]
    EmptySections,

    #[error("invalid section identifier {0:?}")]
    InvalidSection(String),

    #[error("section {0:?} listed more than once")]
    DuplicateSection(String),

    #[error("unknown section preset {0:?} (expected \"full\" or \"compact\")")]
    UnknownPreset(String),

    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("invalid recipient address {0:?}")]
    InvalidRecipient(String),
}
