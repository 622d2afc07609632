// ABOUTME: Errors raised while deriving pane grids.
// ABOUTME: Both kinds are configuration mistakes the caller must fix; none are retryable.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Invalid grid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("No grid configuration has been provided in this scope")]
    MissingContext,
}

impl GridError {
    pub(crate) fn column_mismatch(detail: impl std::fmt::Display) -> Self {
        GridError::InvalidConfiguration {
            reason: format!("total column count mismatch ({detail})"),
        }
    }
}
