//! Error types for host queries

use thiserror::Error;

/// Error raised when the OS cannot answer a query
#[derive(Error, Debug)]
pub enum SystemError {
    /// The platform API reported a failure
    #[error("Platform error: {message}")]
    Platform {
        /// Error message
        message: String,
        /// OS error code if available
        code: Option<i32>,
    },

    /// Query has no backend on this platform
    #[error("Not supported on this platform: {0}")]
    NotSupported(String),
}

/// Result type for host queries
pub type SystemResult<T> = Result<T, SystemError>;

impl SystemError {
    /// Create a platform error from an OS error, keeping the raw code
    #[must_use]
    pub fn from_os_error(err: &std::io::Error) -> Self {
        Self::Platform {
            message: err.to_string(),
            code: err.raw_os_error(),
        }
    }

    /// Create a platform error without an OS code
    pub fn platform(message: impl Into<String>) -> Self {
        Self::Platform {
            message: message.into(),
            code: None,
        }
    }

    /// Create a not-supported error for the named query
    pub fn not_supported(query: impl Into<String>) -> Self {
        Self::NotSupported(query.into())
    }

    /// Raw OS error code, if the failure carried one
    #[must_use]
    pub fn os_code(&self) -> Option<i32> {
        match self {
            Self::Platform { code, .. } => *code,
            Self::NotSupported(_) => None,
        }
    }

    /// Whether this error means the query will never succeed on this host
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::NotSupported(_))
    }
}
