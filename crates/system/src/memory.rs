//! Physical memory and page-file counters
//!
//! The OS reports byte counts; [`MemInfo`] carries kilobytes. Windows folds
//! physical memory into its page-file counters (the commit limit), so swap is
//! derived by subtracting the physical figures back out.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::SystemResult;
use crate::platform::NativeBackend;

const KIB: u64 = 1024;

/// Counters exactly as the memory-status call returns them, in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawMemoryStatus {
    /// Approximate percentage of physical memory in use (0-100)
    pub memory_load: u32,
    /// Total physical memory
    pub total_phys: u64,
    /// Physical memory currently available
    pub avail_phys: u64,
    /// Commit limit: physical memory plus page file
    pub total_page_file: u64,
    /// Commit still available: physical plus page file
    pub avail_page_file: u64,
}

/// Anything that can produce a [`RawMemoryStatus`]
///
/// [`NativeBackend`] is the OS implementation. Closures implement it too,
/// which is how failures are simulated.
pub trait MemoryStatusSource {
    /// Read the current counters
    fn memory_status(&self) -> SystemResult<RawMemoryStatus>;
}

impl<F> MemoryStatusSource for F
where
    F: Fn() -> SystemResult<RawMemoryStatus>,
{
    fn memory_status(&self) -> SystemResult<RawMemoryStatus> {
        self()
    }
}

/// Individual [`MemInfo`] fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MemField {
    /// Total physical memory
    Total,
    /// Free physical memory
    Free,
    /// Memory available for new allocations without swapping
    Avail,
    /// Kernel buffers
    Buffers,
    /// Page cache
    Cached,
    /// Total swap
    SwapTotal,
    /// Free swap
    SwapFree,
}

impl MemField {
    /// Every field, in record order
    pub const ALL: [MemField; 7] = [
        MemField::Total,
        MemField::Free,
        MemField::Avail,
        MemField::Buffers,
        MemField::Cached,
        MemField::SwapTotal,
        MemField::SwapFree,
    ];

    /// Field name as it appears on [`MemInfo`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MemField::Total => "total",
            MemField::Free => "free",
            MemField::Avail => "avail",
            MemField::Buffers => "buffers",
            MemField::Cached => "cached",
            MemField::SwapTotal => "swap_total",
            MemField::SwapFree => "swap_free",
        }
    }

    /// Whether the memory-status call can fill this field
    #[must_use]
    pub const fn is_reported(self) -> bool {
        matches!(
            self,
            MemField::Total | MemField::Free | MemField::SwapTotal | MemField::SwapFree
        )
    }
}

impl std::fmt::Display for MemField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Memory snapshot, all values in kilobytes
///
/// Fields the platform cannot report stay zero; use [`MemInfo::get`] to tell
/// "zero" apart from "not available".
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemInfo {
    /// Total physical memory
    pub total: u64,
    /// Free physical memory
    pub free: u64,
    /// Available memory (not reported on Windows)
    pub avail: u64,
    /// Kernel buffers (not reported on Windows)
    pub buffers: u64,
    /// Page cache (not reported on Windows)
    pub cached: u64,
    /// Total swap
    pub swap_total: u64,
    /// Free swap, never above `swap_total`
    pub swap_free: u64,
}

impl MemInfo {
    /// Convert raw byte counters into a kilobyte snapshot
    #[must_use]
    pub fn from_raw(raw: &RawMemoryStatus) -> Self {
        let swap_total = raw.total_page_file.saturating_sub(raw.total_phys) / KIB;
        // Commit headroom below free physical memory wraps and clamps to
        // `swap_total`: the page file is reported as untouched.
        let swap_free =
            (raw.avail_page_file.wrapping_sub(raw.avail_phys) / KIB).min(swap_total);

        Self {
            total: raw.total_phys / KIB,
            free: raw.avail_phys / KIB,
            avail: 0,
            buffers: 0,
            cached: 0,
            swap_total,
            swap_free,
        }
    }

    /// Value of a field regardless of whether it is reported
    #[must_use]
    pub const fn value(&self, field: MemField) -> u64 {
        match field {
            MemField::Total => self.total,
            MemField::Free => self.free,
            MemField::Avail => self.avail,
            MemField::Buffers => self.buffers,
            MemField::Cached => self.cached,
            MemField::SwapTotal => self.swap_total,
            MemField::SwapFree => self.swap_free,
        }
    }

    /// Value of a field, or `None` when the platform cannot report it
    #[must_use]
    pub const fn get(&self, field: MemField) -> Option<u64> {
        if field.is_reported() {
            Some(self.value(field))
        } else {
            None
        }
    }

    /// Fields filled by the memory-status call
    pub fn reported_fields() -> impl Iterator<Item = MemField> {
        MemField::ALL.into_iter().filter(|f| f.is_reported())
    }

    /// Physical memory in use
    #[must_use]
    pub const fn used(&self) -> u64 {
        self.total.saturating_sub(self.free)
    }

    /// Swap in use
    #[must_use]
    pub const fn swap_used(&self) -> u64 {
        self.swap_total.saturating_sub(self.swap_free)
    }

    /// True for the zero record substituted on failure
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Query memory counters from `source`, surfacing failure
pub fn try_query_mem_info<S>(source: &S) -> SystemResult<MemInfo>
where
    S: MemoryStatusSource + ?Sized,
{
    let raw = source.memory_status()?;
    let info = MemInfo::from_raw(&raw);

    tracing::debug!(
        total_kb = info.total,
        free_kb = info.free,
        swap_total_kb = info.swap_total,
        swap_free_kb = info.swap_free,
        memory_load = raw.memory_load,
        "Queried memory status"
    );

    Ok(info)
}

/// Query memory counters from `source`, substituting zeros on failure
pub fn query_mem_info<S>(source: &S) -> MemInfo
where
    S: MemoryStatusSource + ?Sized,
{
    try_query_mem_info(source).unwrap_or_else(|error| {
        if error.is_unsupported() {
            tracing::debug!(%error, "Memory status unavailable, reporting zeroed counters");
        } else {
            tracing::warn!(
                %error,
                os_code = error.os_code(),
                "Memory status query failed, reporting zeroed counters"
            );
        }
        MemInfo::default()
    })
}

/// Current memory counters, or the error the OS reported
pub fn try_get_mem_info() -> SystemResult<MemInfo> {
    try_query_mem_info(&NativeBackend)
}

/// Current memory counters; all zero if the OS call fails
#[must_use]
pub fn get_mem_info() -> MemInfo {
    query_mem_info(&NativeBackend)
}
