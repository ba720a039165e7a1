//! Time-of-day arithmetic on a wrapping 24-hour cycle.
//!
//! A [`TimeOfDay`] is a duration since local midnight, always kept in
//! `[0h, 24h)`. All wrapping goes through [`normalize_seconds`], so forward and
//! backward time flow share the same modulo rule.

use std::fmt;

use serde::Serialize;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Seconds in one full day.
pub const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;

/// Reduce any duration (in seconds) into `[0, SECONDS_PER_DAY)`.
///
/// Uses a non-negative modulo: a negative raw remainder has a full day added.
/// Tiny negative inputs can round up to exactly one day, which is folded back
/// to zero so the upper bound stays exclusive.
#[inline]
pub fn normalize_seconds(seconds: f64) -> f64 {
    let wrapped = seconds.rem_euclid(SECONDS_PER_DAY);
    if wrapped >= SECONDS_PER_DAY { 0.0 } else { wrapped }
}

/// Duration since local midnight, in `[0h, 24h)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct TimeOfDay {
    seconds: f64,
}

impl TimeOfDay {
    /// Midnight (00:00).
    pub const MIDNIGHT: Self = Self { seconds: 0.0 };

    /// Noon (12:00).
    pub const NOON: Self = Self {
        seconds: 12.0 * SECONDS_PER_HOUR,
    };

    /// Build from any number of seconds, wrapping into a single day.
    #[inline]
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds: normalize_seconds(seconds),
        }
    }

    /// Build from any number of hours, wrapping into a single day.
    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::from_seconds(hours * SECONDS_PER_HOUR)
    }

    /// Build from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Self {
        Self::from_seconds(f64::from(hour) * SECONDS_PER_HOUR + f64::from(minute) * 60.0)
    }

    /// Seconds since midnight.
    #[inline]
    pub fn seconds(self) -> f64 {
        self.seconds
    }

    /// Fractional hours since midnight.
    #[inline]
    pub fn hours(self) -> f64 {
        self.seconds / SECONDS_PER_HOUR
    }

    /// This time shifted by `seconds`, wrapping across midnight either way.
    #[inline]
    pub fn offset(self, seconds: f64) -> Self {
        Self::from_seconds(self.seconds + seconds)
    }

    /// Forward distance in seconds from `self` to `to`.
    ///
    /// Always non-negative: when `to` is earlier on the clock face the
    /// distance wraps through midnight.
    #[inline]
    pub fn until(self, to: Self) -> f64 {
        wrapped_diff(self, to)
    }

    /// Truncated hour:minute reading of this time.
    pub fn reading(self) -> ClockReading {
        // seconds is in [0, 86400), so the floor fits comfortably in u32.
        let whole = self.seconds.floor() as u32;
        ClockReading {
            hour: (whole / 3_600).min(23) as u8,
            minute: ((whole % 3_600) / 60) as u8,
        }
    }
}

/// Forward duration in seconds from `from` to `to`, in `[0, SECONDS_PER_DAY)`.
#[inline]
pub fn wrapped_diff(from: TimeOfDay, to: TimeOfDay) -> f64 {
    normalize_seconds(to.seconds - from.seconds)
}

/// Hour and minute of a [`TimeOfDay`], truncated (never rounded).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ClockReading {
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} : {:02}", self.hour, self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reading(), f)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
