//! Display geometry
//!
//! Eight fixed metrics: the primary screen, the full-screen work area and
//! the virtual screen that spans every attached display. The metrics API has
//! no failure path; anything it cannot answer reads as 0.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::platform::NativeBackend;

/// Display metrics read by [`get_monitor_info`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SystemMetric {
    /// Width of the primary screen
    CxScreen,
    /// Height of the primary screen
    CyScreen,
    /// Width of the full-screen work area on the primary display
    CxFullScreen,
    /// Height of the full-screen work area on the primary display
    CyFullScreen,
    /// Width of the virtual screen
    CxVirtualScreen,
    /// Height of the virtual screen
    CyVirtualScreen,
    /// Left edge of the virtual screen
    XVirtualScreen,
    /// Top edge of the virtual screen
    YVirtualScreen,
}

impl SystemMetric {
    /// Every metric, in the order they are queried
    pub const ALL: [SystemMetric; 8] = [
        SystemMetric::CxScreen,
        SystemMetric::CyScreen,
        SystemMetric::CxFullScreen,
        SystemMetric::CyFullScreen,
        SystemMetric::CxVirtualScreen,
        SystemMetric::CyVirtualScreen,
        SystemMetric::XVirtualScreen,
        SystemMetric::YVirtualScreen,
    ];
}

/// Anything that can answer a [`SystemMetric`]
pub trait MetricsSource {
    /// Current value of `metric`, 0 when unsupported
    fn metric(&self, metric: SystemMetric) -> i32;
}

impl<F> MetricsSource for F
where
    F: Fn(SystemMetric) -> i32,
{
    fn metric(&self, metric: SystemMetric) -> i32 {
        self(metric)
    }
}

/// Display geometry snapshot, in pixels
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonitorInfo {
    /// Primary screen width
    pub xscreen: i32,
    /// Primary screen height
    pub yscreen: i32,
    /// Full-screen work area height
    pub cy_fullscreen: i32,
    /// Full-screen work area width
    pub cx_fullscreen: i32,
    /// Virtual screen width
    pub cxvirtual_screen: i32,
    /// Virtual screen height
    pub cyvirtual_screen: i32,
    /// Virtual screen left edge (negative when a display sits left of the primary)
    pub xvirtual_screen: i32,
    /// Virtual screen top edge
    pub yvirtual_screen: i32,
}

impl MonitorInfo {
    /// Whether a primary display was reported
    #[must_use]
    pub const fn has_display(&self) -> bool {
        self.xscreen > 0 && self.yscreen > 0
    }

    /// Top-left corner of the virtual screen
    #[must_use]
    pub const fn virtual_origin(&self) -> (i32, i32) {
        (self.xvirtual_screen, self.yvirtual_screen)
    }

    /// Width and height of the virtual screen
    #[must_use]
    pub const fn virtual_extent(&self) -> (i32, i32) {
        (self.cxvirtual_screen, self.cyvirtual_screen)
    }

    /// Whether the virtual screen is larger than the primary display
    #[must_use]
    pub const fn spans_multiple_displays(&self) -> bool {
        self.cxvirtual_screen > self.xscreen || self.cyvirtual_screen > self.yscreen
    }
}

/// Read every display metric from `source`
pub fn query_monitor_info<S>(source: &S) -> MonitorInfo
where
    S: MetricsSource + ?Sized,
{
    let info = MonitorInfo {
        xscreen: source.metric(SystemMetric::CxScreen),
        yscreen: source.metric(SystemMetric::CyScreen),
        cx_fullscreen: source.metric(SystemMetric::CxFullScreen),
        cy_fullscreen: source.metric(SystemMetric::CyFullScreen),
        cxvirtual_screen: source.metric(SystemMetric::CxVirtualScreen),
        cyvirtual_screen: source.metric(SystemMetric::CyVirtualScreen),
        xvirtual_screen: source.metric(SystemMetric::XVirtualScreen),
        yvirtual_screen: source.metric(SystemMetric::YVirtualScreen),
    };

    tracing::debug!(
        width = info.xscreen,
        height = info.yscreen,
        virtual_width = info.cxvirtual_screen,
        virtual_height = info.cyvirtual_screen,
        "Queried display metrics"
    );

    info
}

/// Current display geometry
#[must_use]
pub fn get_monitor_info() -> MonitorInfo {
    query_monitor_info(&NativeBackend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Two 1920x1080 displays, the second to the left of the primary.
    fn dual_display(metric: SystemMetric) -> i32 {
        match metric {
            SystemMetric::CxScreen => 1920,
            SystemMetric::CyScreen => 1080,
            SystemMetric::CxFullScreen => 1920,
            SystemMetric::CyFullScreen => 1017,
            SystemMetric::CxVirtualScreen => 3840,
            SystemMetric::CyVirtualScreen => 1080,
            SystemMetric::XVirtualScreen => -1920,
            SystemMetric::YVirtualScreen => 0,
        }
    }

    #[test]
    fn test_each_field_maps_to_its_metric() {
        let info = query_monitor_info(&dual_display);
        assert_eq!(
            info,
            MonitorInfo {
                xscreen: 1920,
                yscreen: 1080,
                cy_fullscreen: 1017,
                cx_fullscreen: 1920,
                cxvirtual_screen: 3840,
                cyvirtual_screen: 1080,
                xvirtual_screen: -1920,
                yvirtual_screen: 0,
            }
        );
        assert_eq!(info.virtual_origin(), (-1920, 0));
        assert_eq!(info.virtual_extent(), (3840, 1080));
        assert!(info.spans_multiple_displays());
        assert!(info.has_display());
    }

    #[test]
    fn test_unsupported_metrics_read_zero() {
        let info = query_monitor_info(&|_: SystemMetric| 0);
        assert_eq!(info, MonitorInfo::default());
        assert!(!info.has_display());
        assert!(!info.spans_multiple_displays());
    }

    #[test]
    fn test_queries_every_metric_once() {
        let seen = std::cell::RefCell::new(Vec::new());
        let recorder = |metric: SystemMetric| {
            seen.borrow_mut().push(metric);
            1
        };
        query_monitor_info(&recorder);

        let mut seen = seen.into_inner();
        seen.sort();
        assert_eq!(seen, SystemMetric::ALL.to_vec());
    }
}
