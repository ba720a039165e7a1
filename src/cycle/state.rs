//! Per-tick snapshot of the cycle.

use serde::Serialize;

use super::sun::{Phase, SunAngle};
use super::time::ClockReading;

/// Everything derived on the latest tick by [`super::DayNightCycle`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CycleState {
    /// Fractional hours since midnight, in `[0, 24)`.
    pub time_of_day: f64,
    /// Truncated hour:minute for textual display.
    pub clock: ClockReading,
    pub phase: Phase,
    pub sun_angle: SunAngle,
    /// Net midnight crossings since the cycle started.
    pub days_elapsed: i64,
}
