//! Formatting helpers for memory figures

/// Render a kilobyte count, as carried by [`MemInfo`](crate::MemInfo),
/// in the largest unit that keeps the figure at or above 1
///
/// ```
/// use hostprobe_system::utils::format_kb;
///
/// assert_eq!(format_kb(1), "1.00 KB");
/// assert_eq!(format_kb(1536), "1.50 MB");
/// assert_eq!(format_kb(2048), "2.00 MB");
/// ```
#[must_use]
pub fn format_kb(kb: u64) -> String {
    const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

    if kb == 0 {
        return "0 B".to_string();
    }

    let mut value = kb as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// Format a ratio in `0.0..=1.0` as a percentage
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// `part / whole`, or 0 when `whole` is 0
#[must_use]
pub fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
