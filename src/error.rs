//! Error type for drawing operations

use thiserror::Error;

/// Failures surfaced by the context and its collaborators.
///
/// Only contract violations are reported. Permissive cases (restoring at the
/// bottom of the stack, drawing a missing image) are defined no-ops.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphicsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GraphicsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GraphicsError>;
