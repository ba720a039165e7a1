//! Sun angle interpolation between sunrise and sunset.
//!
//! The sun sweeps linearly from 0° at sunrise to 180° at sunset, then from
//! 180° back around to 360° (== 0°) at the next sunrise. Each half is
//! stretched to however long the configured day or night lasts, and the night
//! half may span midnight.

use std::fmt;

use serde::Serialize;

use super::time::{TimeOfDay, wrapped_diff};
use crate::core::{Error, Result};

/// Which half of the cycle a time of day falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Day,
    Night,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Day => f.write_str("day"),
            Phase::Night => f.write_str("night"),
        }
    }
}

/// Sun rotation about the horizontal axis, in degrees within `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SunAngle(f64);

impl SunAngle {
    /// Wrap `degrees` into `[0, 360)`.
    pub fn from_degrees(degrees: f64) -> Self {
        let wrapped = degrees.rem_euclid(360.0);
        Self(if wrapped >= 360.0 { 0.0 } else { wrapped })
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Rotation about +X to apply to a directional light.
    pub fn rotation(self) -> glam::Quat {
        glam::Quat::from_axis_angle(glam::Vec3::X, self.radians() as f32)
    }

    /// Direction the light shines after applying [`rotation`](Self::rotation)
    /// to a light facing +Z. Points straight down (-Y) at 90°.
    pub fn light_direction(self) -> glam::Vec3 {
        self.rotation() * glam::Vec3::Z
    }
}

impl fmt::Display for SunAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.0)
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Validated sunrise and sunset times.
///
/// Construction fails when the two coincide, since one half of the cycle
/// would have zero length and no finite angle exists for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DayNightBoundaries {
    sunrise: TimeOfDay,
    sunset: TimeOfDay,
    /// Seconds from sunrise forward to sunset.
    day_span: f64,
    /// Seconds from sunset forward to sunrise.
    night_span: f64,
}

impl DayNightBoundaries {
    /// Build from hours in `[0, 24)`.
    pub fn new(sunrise_hour: f64, sunset_hour: f64) -> Result<Self> {
        for (name, hour) in [("sunrise", sunrise_hour), ("sunset", sunset_hour)] {
            if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
                return Err(Error::InvalidConfiguration(format!(
                    "{name} hour {hour} is outside [0, 24)"
                )));
            }
        }
        Self::from_times(
            TimeOfDay::from_hours(sunrise_hour),
            TimeOfDay::from_hours(sunset_hour),
        )
    }

    /// Build from already-wrapped times.
    pub fn from_times(sunrise: TimeOfDay, sunset: TimeOfDay) -> Result<Self> {
        let day_span = wrapped_diff(sunrise, sunset);
        let night_span = wrapped_diff(sunset, sunrise);
        if day_span <= 0.0 || night_span <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "sunrise ({sunrise}) and sunset ({sunset}) coincide"
            )));
        }
        Ok(Self {
            sunrise,
            sunset,
            day_span,
            night_span,
        })
    }

    #[inline]
    pub fn sunrise(&self) -> TimeOfDay {
        self.sunrise
    }

    #[inline]
    pub fn sunset(&self) -> TimeOfDay {
        self.sunset
    }

    /// Length of the day half, in seconds.
    #[inline]
    pub fn day_length(&self) -> f64 {
        self.day_span
    }

    /// Length of the night half, in seconds.
    #[inline]
    pub fn night_length(&self) -> f64 {
        self.night_span
    }

    /// Day strictly between sunrise and sunset on the clock face; the
    /// boundaries themselves are night.
    ///
    /// When sunrise is later than sunset no time satisfies the test, so the
    /// whole cycle is night and the angle saturates at 360° (reported as 0°)
    /// between sunrise and the next sunset.
    pub fn phase(&self, time: TimeOfDay) -> Phase {
        let t = time.seconds();
        if self.sunrise.seconds() < t && t < self.sunset.seconds() {
            Phase::Day
        } else {
            Phase::Night
        }
    }

    /// Sun angle at `time`.
    pub fn sun_angle(&self, time: TimeOfDay) -> SunAngle {
        let degrees = match self.phase(time) {
            Phase::Day => {
                let fraction = wrapped_diff(self.sunrise, time) / self.day_span;
                lerp(0.0, 180.0, fraction)
            }
            Phase::Night => {
                let fraction = wrapped_diff(self.sunset, time) / self.night_span;
                lerp(180.0, 360.0, fraction)
            }
        };
        SunAngle::from_degrees(degrees)
    }
}

/// One-shot angle computation for callers that do not keep boundaries around.
///
/// Fails with [`Error::InvalidConfiguration`] when sunrise equals sunset.
pub fn compute_sun_angle(time: TimeOfDay, sunrise: TimeOfDay, sunset: TimeOfDay) -> Result<SunAngle> {
    Ok(DayNightBoundaries::from_times(sunrise, sunset)?.sun_angle(time))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
