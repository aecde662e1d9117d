//! Windows backend: `GlobalMemoryStatusEx` and `GetSystemMetrics`

use std::io;

use winapi::um::sysinfoapi::{GlobalMemoryStatusEx, MEMORYSTATUSEX};
use winapi::um::winuser::{
    GetSystemMetrics, SM_CXFULLSCREEN, SM_CXSCREEN, SM_CXVIRTUALSCREEN, SM_CYFULLSCREEN,
    SM_CYSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN, SM_YVIRTUALSCREEN,
};

use super::NativeBackend;
use crate::core::{SystemResult, SystemResultExt};
use crate::memory::{MemoryStatusSource, RawMemoryStatus};
use crate::monitor::{MetricsSource, SystemMetric};

impl MemoryStatusSource for NativeBackend {
    fn memory_status(&self) -> SystemResult<RawMemoryStatus> {
        // SAFETY: MEMORYSTATUSEX is plain data; all-zero is a valid value.
        let mut status: MEMORYSTATUSEX = unsafe { std::mem::zeroed() };
        status.dwLength = std::mem::size_of::<MEMORYSTATUSEX>() as u32;

        // SAFETY: `status` is a live, writable MEMORYSTATUSEX with dwLength set.
        if unsafe { GlobalMemoryStatusEx(&mut status) } == 0 {
            return Err::<RawMemoryStatus, _>(io::Error::last_os_error())
                .with_platform_context("GlobalMemoryStatusEx");
        }

        Ok(RawMemoryStatus {
            memory_load: status.dwMemoryLoad,
            total_phys: status.ullTotalPhys,
            avail_phys: status.ullAvailPhys,
            total_page_file: status.ullTotalPageFile,
            avail_page_file: status.ullAvailPageFile,
        })
    }
}

impl MetricsSource for NativeBackend {
    fn metric(&self, metric: SystemMetric) -> i32 {
        // SAFETY: GetSystemMetrics takes an integer index and has no
        // preconditions; unknown indices return 0.
        unsafe { GetSystemMetrics(metric_index(metric)) }
    }
}

const fn metric_index(metric: SystemMetric) -> i32 {
    match metric {
        SystemMetric::CxScreen => SM_CXSCREEN,
        SystemMetric::CyScreen => SM_CYSCREEN,
        SystemMetric::CxFullScreen => SM_CXFULLSCREEN,
        SystemMetric::CyFullScreen => SM_CYFULLSCREEN,
        SystemMetric::CxVirtualScreen => SM_CXVIRTUALSCREEN,
        SystemMetric::CyVirtualScreen => SM_CYVIRTUALSCREEN,
        SystemMetric::XVirtualScreen => SM_XVIRTUALSCREEN,
        SystemMetric::YVirtualScreen => SM_YVIRTUALSCREEN,
    }
}
