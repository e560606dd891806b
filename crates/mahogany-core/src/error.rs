//! Repository-level error types.

use thiserror::Error;

/// Errors a repository backend can surface.
///
/// The in-memory store never produces these; the variants exist so the ports
/// keep the same shape as a database-backed implementation.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage backend failed: {0}")]
    Backend(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
