//! OS backends
//!
//! Only Windows has a real implementation. Elsewhere the memory query reports
//! [`SystemError::NotSupported`](crate::SystemError::NotSupported) and every
//! display metric reads as 0, matching how the metrics API treats metrics it
//! does not know.

#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
mod unsupported;

/// The backend for the platform this crate was compiled for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeBackend;

impl NativeBackend {
    /// Whether this platform has a memory and display backend
    #[must_use]
    pub const fn is_supported() -> bool {
        cfg!(windows)
    }
}
