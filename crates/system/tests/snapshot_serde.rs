//! Serialized shape of the public snapshots.

use hostprobe_system::{MemInfo, MonitorInfo, RawMemoryStatus, SystemInfo};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn mem_info_fields_in_record_order() {
    let mem = MemInfo::from_raw(&RawMemoryStatus {
        memory_load: 50,
        total_phys: 8 << 30,
        avail_phys: 4 << 30,
        total_page_file: 10 << 30,
        avail_page_file: 5 << 30,
    });

    assert_eq!(
        serde_json::to_value(mem).unwrap(),
        json!({
            "total": 8_388_608,
            "free": 4_194_304,
            "avail": 0,
            "buffers": 0,
            "cached": 0,
            "swap_total": 2_097_152,
            "swap_free": 1_048_576,
        })
    );
}

#[test]
fn system_info_round_trips() {
    let monitor = MonitorInfo {
        xscreen: 1920,
        yscreen: 1080,
        cy_fullscreen: 1017,
        cx_fullscreen: 1920,
        cxvirtual_screen: 1920,
        cyvirtual_screen: 1080,
        xvirtual_screen: 0,
        yvirtual_screen: 0,
    };
    let info = SystemInfo::from_parts(Some("Windows 10 Home".into()), monitor, MemInfo::default());

    let text = serde_json::to_string(&info).unwrap();
    let back: SystemInfo = serde_json::from_str(&text).unwrap();
    assert_eq!(back, info);
    assert_eq!(back.get_monitor().yscreen, 1080);
}
