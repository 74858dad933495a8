use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("failed to fetch locations: {0}")]
    LocationFetchFailed(String),
    #[error("failed to check name availability: {0}")]
    NameCheckFailed(String),
    #[error("invalid directory url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl DirectoryError {
    /// Both lookup failures are recoverable; the form keeps working without the result.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DirectoryError::LocationFetchFailed(_) | DirectoryError::NameCheckFailed(_)
        )
    }
}
