//! Result extension traits for host queries

use crate::core::error::{SystemError, SystemResult};

/// Extension trait for attaching platform context to errors
pub trait SystemResultExt<T> {
    /// Prefix the error with the platform call that produced it
    fn with_platform_context(self, operation: impl Into<String>) -> SystemResult<T>;
}

impl<T> SystemResultExt<T> for SystemResult<T> {
    fn with_platform_context(self, operation: impl Into<String>) -> SystemResult<T> {
        self.map_err(|e| match e {
            SystemError::Platform { message, code } => SystemError::Platform {
                message: format!("{} failed: {message}", operation.into()),
                code,
            },
            other @ SystemError::NotSupported(_) => other,
        })
    }
}

impl<T> SystemResultExt<T> for Result<T, std::io::Error> {
    fn with_platform_context(self, operation: impl Into<String>) -> SystemResult<T> {
        self.map_err(|err| SystemError::from_os_error(&err))
            .with_platform_context(operation)
    }
}
