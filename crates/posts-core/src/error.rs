//! Model-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Failures surfaced by a `PostModel` implementation.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Post not found: {id}")]
    NotFound { id: PostId },

    #[error("Persistence failed: {0}")]
    Persistence(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl ModelError {
    pub fn not_found(id: impl Into<PostId>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
