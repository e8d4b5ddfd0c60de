//! Harness errors.

use waypoint_search::SearchError;

/// Failure of a harness operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HarnessError {
    /// The engine rejected the run before searching.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// A world or run configuration is malformed.
    #[error("invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    /// A run report could not be serialized.
    #[error("report serialization failed: {detail}")]
    Serialize { detail: String },
}

impl HarnessError {
    pub(crate) fn invalid_config(detail: impl Into<String>) -> Self {
        Self::InvalidConfig {
            detail: detail.into(),
        }
    }
}
