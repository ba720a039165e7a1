//! Presentation sinks fed after every tick.
//!
//! The cycle never renders anything itself. A host attaches whichever sinks it
//! has; a cycle with none attached runs headless.

use super::sun::SunAngle;
use super::time::ClockReading;

/// Receives the truncated hour:minute reading after each tick.
pub trait ClockDisplay {
    fn show_time(&mut self, reading: ClockReading);
}

/// Receives the sun angle after each tick, to rotate a light about +X.
pub trait SunOrientation {
    fn apply_sun_angle(&mut self, angle: SunAngle);
}

impl<F: FnMut(ClockReading)> ClockDisplay for F {
    fn show_time(&mut self, reading: ClockReading) {
        self(reading)
    }
}

impl<F: FnMut(SunAngle)> SunOrientation for F {
    fn apply_sun_angle(&mut self, angle: SunAngle) {
        self(angle)
    }
}

/// Display sink that writes the clock text to the log, once per minute change.
#[derive(Debug, Default)]
pub struct LogDisplay {
    last: Option<ClockReading>,
}

impl ClockDisplay for LogDisplay {
    fn show_time(&mut self, reading: ClockReading) {
        if self.last != Some(reading) {
            log::info!("{reading}");
            self.last = Some(reading);
        }
    }
}

/// Orientation sink that logs the light rotation at debug level.
#[derive(Debug, Default)]
pub struct LogOrientation;

impl SunOrientation for LogOrientation {
    fn apply_sun_angle(&mut self, angle: SunAngle) {
        let dir = angle.light_direction();
        log::debug!(
            "sun angle {angle} (light dir {:.3}, {:.3}, {:.3})",
            dir.x,
            dir.y,
            dir.z
        );
    }
}
