//! Prelude module for convenient imports
//!
//! ```rust
//! use hostprobe_system::prelude::*;
//!
//! let info = SystemInfo::new();
//! println!("{}", info.summary());
//! ```

pub use crate::core::{SystemError, SystemResult, SystemResultExt};
pub use crate::info::{SystemInfo, summary};
pub use crate::memory::{
    MemField, MemInfo, MemoryStatusSource, RawMemoryStatus, get_mem_info, try_get_mem_info,
};
pub use crate::monitor::{MetricsSource, MonitorInfo, SystemMetric, get_monitor_info};
pub use crate::platform::NativeBackend;
pub use crate::utils::format_kb;
