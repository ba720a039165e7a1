//! Simulated clock driven by real elapsed time.

use super::time::{SECONDS_PER_DAY, TimeOfDay};

/// Wrapping time-of-day advanced by real seconds scaled by a rate multiplier.
///
/// The rate is simulated seconds per real second: `1.0` runs at wall-clock
/// speed, `0.0` freezes time and negative values run it backward.
#[derive(Clone, Debug)]
pub struct SimulatedClock {
    time: TimeOfDay,
    rate_multiplier: f64,
    /// Net number of midnight crossings (negative when running backward).
    days_elapsed: i64,
}

impl SimulatedClock {
    /// Create a clock starting at `start_hour`, wrapped into `[0, 24)`.
    pub fn new(start_hour: f64, rate_multiplier: f64) -> Self {
        Self {
            time: TimeOfDay::from_hours(start_hour),
            rate_multiplier,
            days_elapsed: 0,
        }
    }

    /// Advance by `elapsed_real_seconds` scaled by the current rate.
    pub fn tick(&mut self, elapsed_real_seconds: f64) -> TimeOfDay {
        self.advance(elapsed_real_seconds, self.rate_multiplier)
    }

    /// Advance by `elapsed_real_seconds * rate_multiplier` simulated seconds
    /// and return the new time of day.
    ///
    /// Non-finite input leaves the clock untouched.
    pub fn advance(&mut self, elapsed_real_seconds: f64, rate_multiplier: f64) -> TimeOfDay {
        let delta = elapsed_real_seconds * rate_multiplier;
        if !delta.is_finite() {
            log::warn!(
                "ignoring non-finite clock advance (elapsed={elapsed_real_seconds}, rate={rate_multiplier})"
            );
            return self.time;
        }
        if delta == 0.0 {
            return self.time;
        }

        let raw = self.time.seconds() + delta;
        let mut crossings = raw.div_euclid(SECONDS_PER_DAY);
        let mut seconds = raw.rem_euclid(SECONDS_PER_DAY);
        // A remainder that rounds up to a full day lands on the next midnight.
        if seconds >= SECONDS_PER_DAY {
            seconds = 0.0;
            crossings += 1.0;
        }
        if crossings != 0.0 {
            self.days_elapsed = self.days_elapsed.saturating_add(crossings as i64);
            log::debug!("clock crossed midnight ({crossings:+}), day {}", self.days_elapsed);
        }
        self.time = TimeOfDay::from_seconds(seconds);
        self.time
    }

    /// Jump directly to `hour`, wrapped into `[0, 24)`. The day counter is kept.
    pub fn set(&mut self, hour: f64) {
        self.time = TimeOfDay::from_hours(hour);
    }

    /// Current time of day.
    #[inline]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.time
    }

    /// Simulated seconds per real second.
    #[inline]
    pub fn rate_multiplier(&self) -> f64 {
        self.rate_multiplier
    }

    /// Change the rate used by [`tick`](Self::tick).
    #[inline]
    pub fn set_rate_multiplier(&mut self, rate_multiplier: f64) {
        self.rate_multiplier = rate_multiplier;
    }

    /// Net midnight crossings since creation.
    #[inline]
    pub fn days_elapsed(&self) -> i64 {
        self.days_elapsed
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
