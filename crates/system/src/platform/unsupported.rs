//! Fallback for platforms without a backend

use super::NativeBackend;
use crate::core::{SystemError, SystemResult};
use crate::memory::{MemoryStatusSource, RawMemoryStatus};
use crate::monitor::{MetricsSource, SystemMetric};

impl MemoryStatusSource for NativeBackend {
    fn memory_status(&self) -> SystemResult<RawMemoryStatus> {
        Err(SystemError::not_supported(format!(
            "memory status on {}",
            std::env::consts::OS
        )))
    }
}

impl MetricsSource for NativeBackend {
    fn metric(&self, _metric: SystemMetric) -> i32 {
        0
    }
}
