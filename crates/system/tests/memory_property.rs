//! Property tests for the byte-to-kilobyte conversion.

use hostprobe_system::{MemInfo, RawMemoryStatus, SystemError, SystemResult, query_mem_info};
use proptest::prelude::*;

fn raw_status() -> impl Strategy<Value = RawMemoryStatus> {
    (0u32..=100, any::<u64>(), any::<u64>(), any::<u64>(), any::<u64>()).prop_map(
        |(memory_load, total_phys, avail_phys, total_page_file, avail_page_file)| {
            RawMemoryStatus {
                memory_load,
                total_phys,
                avail_phys,
                total_page_file,
                avail_page_file,
            }
        },
    )
}

proptest! {
    #[test]
    fn swap_free_never_exceeds_swap_total(raw in raw_status()) {
        let info = MemInfo::from_raw(&raw);
        prop_assert!(info.swap_free <= info.swap_total);
    }

    #[test]
    fn physical_counters_are_truncated_kilobytes(raw in raw_status()) {
        let info = MemInfo::from_raw(&raw);
        prop_assert_eq!(info.total, raw.total_phys / 1024);
        prop_assert_eq!(info.free, raw.avail_phys / 1024);
    }

    #[test]
    fn swap_total_excludes_physical(phys in 0u64..(1 << 40), swap in 0u64..(1 << 40)) {
        let raw = RawMemoryStatus {
            total_phys: phys,
            total_page_file: phys + swap,
            ..RawMemoryStatus::default()
        };
        prop_assert_eq!(MemInfo::from_raw(&raw).swap_total, swap / 1024);
    }

    #[test]
    fn commit_below_free_phys_reports_swap_untouched(
        phys in 1u64..(1 << 40),
        swap in 0u64..(1 << 40),
        headroom_gap in 1u64..(1 << 40),
    ) {
        let avail_phys = phys / 2 + headroom_gap;
        let raw = RawMemoryStatus {
            memory_load: 0,
            total_phys: phys,
            avail_phys,
            total_page_file: phys + swap,
            avail_page_file: avail_phys - headroom_gap,
        };
        let info = MemInfo::from_raw(&raw);
        prop_assert_eq!(info.swap_free, info.swap_total);
    }

    #[test]
    fn unreported_fields_stay_zero(raw in raw_status()) {
        let info = MemInfo::from_raw(&raw);
        prop_assert_eq!((info.avail, info.buffers, info.cached), (0, 0, 0));
    }

    #[test]
    fn any_failure_yields_zero_record(code in any::<Option<i32>>()) {
        let failing = move || -> SystemResult<RawMemoryStatus> {
            Err(SystemError::Platform { message: "simulated".into(), code })
        };
        prop_assert_eq!(query_mem_info(&failing), MemInfo::default());
    }
}

#[test]
fn documented_examples() {
    let two_mib = RawMemoryStatus {
        total_phys: 2_097_152,
        ..RawMemoryStatus::default()
    };
    assert_eq!(MemInfo::from_raw(&two_mib).total, 2048);

    let swap = RawMemoryStatus {
        total_phys: 2_147_483_648,
        total_page_file: 4_294_967_296,
        ..RawMemoryStatus::default()
    };
    assert_eq!(MemInfo::from_raw(&swap).swap_total, 2_097_152);
}
