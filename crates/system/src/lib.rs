#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![allow(unsafe_code)] // Direct calls into the Windows API
//! # Hostprobe System
//!
//! Host memory counters and display geometry, read straight from the OS.
//!
//! Two independent queries:
//! - [`get_mem_info`]: physical memory and swap, in kilobytes
//! - [`get_monitor_info`]: primary screen, work area and virtual screen
//!
//! Both return plain value snapshots. `get_mem_info` never fails: if the OS
//! call does, the record is all zeros. [`try_get_mem_info`] returns the
//! failure instead.
//!
//! ## Features
//!
//! - `sysinfo` (default): OS edition string in [`SystemInfo`]
//! - `serde`: Serialization support
//!
//! ## Example
//!
//! ```no_run
//! use hostprobe_system::{MemField, get_mem_info, get_monitor_info};
//!
//! let mem = get_mem_info();
//! println!("Memory: {} KB total, {} KB free", mem.total, mem.free);
//! if mem.get(MemField::Cached).is_none() {
//!     println!("Page cache size not reported on this platform");
//! }
//!
//! let display = get_monitor_info();
//! println!("Primary display: {}x{}", display.xscreen, display.yscreen);
//! ```
pub mod core;
pub mod info;
pub mod memory;
pub mod monitor;
pub mod platform;
pub mod prelude;
pub mod utils;

// Re-exports
pub use crate::core::{SystemError, SystemResult, SystemResultExt};
pub use crate::info::{SystemInfo, summary};
pub use crate::memory::{
    MemField, MemInfo, MemoryStatusSource, RawMemoryStatus, get_mem_info, query_mem_info,
    try_get_mem_info, try_query_mem_info,
};
pub use crate::monitor::{MetricsSource, MonitorInfo, SystemMetric, get_monitor_info, query_monitor_info};
pub use crate::platform::NativeBackend;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
