//! Unit helpers for bus frequencies and frame timing.

use counter_core::frame::frame_period_ms;
use embassy_time::Duration;

pub trait FrequencyExt {
    fn khz(self) -> u32;
}

impl FrequencyExt for u32 {
    fn khz(self) -> u32 {
        self * 1_000
    }
}

pub trait TimeExt {
    fn s(self) -> Duration;
}

impl TimeExt for u64 {
    fn s(self) -> Duration {
        Duration::from_secs(self)
    }
}

/// Tick period of a loop running at `rate_hz`.
pub const fn frame_period(rate_hz: u64) -> Duration {
    Duration::from_millis(frame_period_ms(rate_hz))
}
