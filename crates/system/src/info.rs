//! Combined host snapshot

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::memory::{self, MemInfo};
use crate::monitor::{self, MonitorInfo};
use crate::utils::{format_kb, format_percentage, ratio};

/// Memory, display and OS edition captured together
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SystemInfo {
    /// Operating system edition, e.g. "Windows 11 Pro"
    pub(crate) edition: Option<String>,
    pub(crate) monitor: MonitorInfo,
    pub(crate) mem: MemInfo,
}

impl SystemInfo {
    /// Capture a fresh snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            detect_edition(),
            monitor::get_monitor_info(),
            memory::get_mem_info(),
        )
    }

    /// Assemble a snapshot from already-queried parts
    #[must_use]
    pub const fn from_parts(edition: Option<String>, monitor: MonitorInfo, mem: MemInfo) -> Self {
        Self {
            edition,
            monitor,
            mem,
        }
    }

    /// Display geometry
    #[must_use]
    pub const fn get_monitor(&self) -> MonitorInfo {
        self.monitor
    }

    /// Memory counters
    #[must_use]
    pub const fn get_mem(&self) -> MemInfo {
        self.mem
    }

    /// OS edition, when it could be determined
    #[must_use]
    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    /// Human-readable multi-line rendering
    #[must_use]
    pub fn summary(&self) -> String {
        let mem = &self.mem;
        let display = &self.monitor;

        let display_line = if display.has_display() {
            let (vx, vy) = display.virtual_origin();
            let (vw, vh) = display.virtual_extent();
            format!(
                "{}x{} (work area {}x{}, virtual {vw}x{vh} at {vx},{vy})",
                display.xscreen, display.yscreen, display.cx_fullscreen, display.cy_fullscreen,
            )
        } else {
            "unavailable".to_string()
        };

        let memory_line = if mem.is_empty() {
            "unavailable".to_string()
        } else {
            format!(
                "{} total, {} free ({} used)",
                format_kb(mem.total),
                format_kb(mem.free),
                format_percentage(ratio(mem.used(), mem.total)),
            )
        };

        format!(
            "System: {}\n\
             Memory: {memory_line}\n\
             Swap: {} total, {} free\n\
             Display: {display_line}",
            self.edition().unwrap_or("Unknown"),
            format_kb(mem.swap_total),
            format_kb(mem.swap_free),
        )
    }
}

#[cfg(feature = "sysinfo")]
fn detect_edition() -> Option<String> {
    sysinfo::System::long_os_version()
}

#[cfg(not(feature = "sysinfo"))]
fn detect_edition() -> Option<String> {
    None
}

/// Capture a snapshot and render it
#[must_use]
pub fn summary() -> String {
    SystemInfo::new().summary()
}
