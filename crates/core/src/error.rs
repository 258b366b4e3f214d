//! Error types for the session store seam

/// Result type for session store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors a session store backend can report.
///
/// These never escape [`crate::SessionGate`]: the gate logs them and keeps its
/// in-memory state authoritative.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
pub enum StoreError {
    #[error("Session storage is unavailable: {message}")]
    Unavailable { message: String },

    #[error("Session storage backend error: {message}")]
    Backend { message: String },
}

impl StoreError {
    /// Create an unavailable-storage error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
