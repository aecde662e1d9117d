//! Core types shared by every query.
//!
//! ### [`error`] - Error handling
//! [`SystemError`] covers platform API failures (with the raw OS code) and
//! queries that have no backend on the current platform.
//!
//! ### [`result`] - Result types
//! [`SystemResultExt`] labels an error with the platform call that failed.

pub mod error;
pub mod result;

pub use error::{SystemError, SystemResult};
pub use result::SystemResultExt;
