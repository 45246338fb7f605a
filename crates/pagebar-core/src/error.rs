//! Error types for pagination input validation.

use thiserror::Error;

/// Errors reported when validating pagination inputs.
///
/// The planner and range calculator never return these; they clamp. Hosts
/// that prefer to reject bad input call [`crate::PaginationState::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Page size must be at least one item.
    #[error("Items per page must be at least 1")]
    ZeroItemsPerPage,

    /// Current page lies outside `1..=total_pages`.
    #[error("Page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },

    /// There are no pages, so no page can be selected.
    #[error("No pages available")]
    NoPages,

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl PaginationError {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
