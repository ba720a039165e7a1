//! Simulated day/night cycle.
//!
//! Advances a wrapping clock by real elapsed time and derives the sun's
//! rotation from configured sunrise and sunset hours. The main entry point is
//! [`DayNightCycle`], which is updated once per tick and produces a
//! [`CycleState`]. Presentation is left to optional [`ClockDisplay`] and
//! [`SunOrientation`] sinks.

pub mod clock;
pub mod config;
pub mod sink;
pub mod state;
pub mod sun;
pub mod time;

// Re-exports
pub use clock::SimulatedClock;
pub use config::CycleConfig;
pub use sink::{ClockDisplay, LogDisplay, LogOrientation, SunOrientation};
pub use state::CycleState;
pub use sun::{DayNightBoundaries, Phase, SunAngle, compute_sun_angle};
pub use time::{ClockReading, TimeOfDay};

use crate::core::Result;

// ---------------------------------------------------------------------------
// DayNightCycle
// ---------------------------------------------------------------------------

/// Owns the clock, the validated boundaries and any attached sinks. Call
/// [`update`](Self::update) once per tick, then read [`state`](Self::state).
pub struct DayNightCycle {
    config: CycleConfig,
    clock: SimulatedClock,
    boundaries: DayNightBoundaries,
    state: CycleState,
    display: Option<Box<dyn ClockDisplay>>,
    orientation: Option<Box<dyn SunOrientation>>,
}

impl DayNightCycle {
    /// Validate `config` and start the clock at its start hour.
    ///
    /// Fails with [`Error::InvalidConfiguration`](crate::core::Error::InvalidConfiguration)
    /// before any tick runs if sunrise equals sunset or a value is unusable.
    pub fn new(config: CycleConfig) -> Result<Self> {
        let boundaries = config.validate()?;
        let clock = SimulatedClock::new(config.start_hour, config.rate_multiplier);
        let state = Self::derive_state(&clock, &boundaries);

        log::info!(
            "Day/night cycle starting at {} (sunrise {}, sunset {}, rate {}x)",
            state.clock,
            boundaries.sunrise(),
            boundaries.sunset(),
            config.rate_multiplier
        );

        Ok(Self {
            config,
            clock,
            boundaries,
            state,
            display: None,
            orientation: None,
        })
    }

    /// Advance by `dt` real seconds, recompute the sun angle and push the
    /// result to the attached sinks.
    pub fn update(&mut self, dt: f64) -> &CycleState {
        if !self.config.time_paused {
            self.clock.tick(dt);
        }
        self.refresh();
        &self.state
    }

    /// Jump to `hour` (wrapped into `[0, 24)`) and immediately recompute.
    pub fn set_time(&mut self, hour: f64) {
        self.clock.set(hour);
        self.refresh();
    }

    /// Change how many simulated seconds pass per real second.
    ///
    /// Non-finite rates are ignored.
    pub fn set_rate_multiplier(&mut self, rate_multiplier: f64) {
        if !rate_multiplier.is_finite() {
            log::warn!("ignoring non-finite rate multiplier {rate_multiplier}");
            return;
        }
        self.config.rate_multiplier = rate_multiplier;
        self.clock.set_rate_multiplier(rate_multiplier);
    }

    /// Pause or resume time advancement. Sinks keep receiving updates.
    pub fn set_paused(&mut self, paused: bool) {
        self.config.time_paused = paused;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.config.time_paused
    }

    /// Attach a clock display, replacing any previous one.
    pub fn attach_display(&mut self, display: impl ClockDisplay + 'static) {
        self.display = Some(Box::new(display));
    }

    /// Attach a light orientation sink, replacing any previous one.
    pub fn attach_orientation(&mut self, orientation: impl SunOrientation + 'static) {
        self.orientation = Some(Box::new(orientation));
    }

    pub fn detach_display(&mut self) {
        self.display = None;
    }

    pub fn detach_orientation(&mut self) {
        self.orientation = None;
    }

    /// State computed on the latest tick.
    #[inline]
    pub fn state(&self) -> &CycleState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    #[inline]
    pub fn boundaries(&self) -> &DayNightBoundaries {
        &self.boundaries
    }

    #[inline]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.clock.time_of_day()
    }

    #[inline]
    pub fn sun_angle(&self) -> SunAngle {
        self.state.sun_angle
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    pub fn is_day(&self) -> bool {
        self.state.phase == Phase::Day
    }

    #[inline]
    pub fn is_night(&self) -> bool {
        self.state.phase == Phase::Night
    }

    /// Rotation about +X for the directional light.
    pub fn sun_rotation(&self) -> glam::Quat {
        self.state.sun_angle.rotation()
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn refresh(&mut self) {
        let previous_phase = self.state.phase;
        self.state = Self::derive_state(&self.clock, &self.boundaries);

        if self.state.phase != previous_phase {
            log::info!("{} begins at {}", self.state.phase, self.state.clock);
        }
        log::debug!(
            "tick: {} ({:.4}h) {} angle {}",
            self.state.clock,
            self.state.time_of_day,
            self.state.phase,
            self.state.sun_angle
        );

        if let Some(display) = self.display.as_mut() {
            display.show_time(self.state.clock);
        }
        if let Some(orientation) = self.orientation.as_mut() {
            orientation.apply_sun_angle(self.state.sun_angle);
        }
    }

    fn derive_state(clock: &SimulatedClock, boundaries: &DayNightBoundaries) -> CycleState {
        let time = clock.time_of_day();
        CycleState {
            time_of_day: time.hours(),
            clock: time.reading(),
            phase: boundaries.phase(time),
            sun_angle: boundaries.sun_angle(time),
            days_elapsed: clock.days_elapsed(),
        }
    }
}

impl std::fmt::Debug for DayNightCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DayNightCycle")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("has_display", &self.display.is_some())
            .field("has_orientation", &self.orientation.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::Error;

    fn config(start_hour: f64, rate: f64) -> CycleConfig {
        CycleConfig {
            rate_multiplier: rate,
            start_hour,
            sunrise_hour: 6.0,
            sunset_hour: 18.0,
            time_paused: false,
        }
    }

    #[test]
    fn test_new_computes_initial_state() {
        let cycle = DayNightCycle::new(config(12.0, 1.0)).unwrap();
        assert_eq!(cycle.sun_angle().degrees(), 90.0);
        assert!(cycle.is_day());
        assert_eq!(cycle.state().clock, ClockReading { hour: 12, minute: 0 });
    }

    #[test]
    fn test_new_rejects_degenerate_boundaries() {
        let mut cfg = config(12.0, 1.0);
        cfg.sunrise_hour = 9.0;
        cfg.sunset_hour = 9.0;
        assert!(matches!(DayNightCycle::new(cfg), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_update_advances_then_recomputes() {
        let mut cycle = DayNightCycle::new(config(17.0, 60.0)).unwrap();
        // 120 real seconds at 60x = 2 simulated hours -> 19:00, night
        let state = *cycle.update(120.0);
        assert_eq!(state.clock, ClockReading { hour: 19, minute: 0 });
        assert_eq!(state.phase, Phase::Night);
        assert!((state.sun_angle.degrees() - 195.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_wraps_midnight() {
        let mut cycle = DayNightCycle::new(config(23.0, 1.0)).unwrap();
        let state = *cycle.update(3_600.0);
        assert_eq!(state.time_of_day, 0.0);
        assert_eq!(state.days_elapsed, 1);
        assert_eq!(state.sun_angle.degrees(), 270.0);
    }

    #[test]
    fn test_paused_keeps_time() {
        let mut cycle = DayNightCycle::new(config(8.0, 100.0)).unwrap();
        cycle.set_paused(true);
        cycle.update(50.0);
        assert!((cycle.time_of_day().hours() - 8.0).abs() < 1e-12);
        cycle.set_paused(false);
        cycle.update(36.0); // 3600 simulated seconds
        assert!((cycle.time_of_day().hours() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_time_recomputes() {
        let mut cycle = DayNightCycle::new(config(12.0, 1.0)).unwrap();
        cycle.set_time(0.0);
        assert_eq!(cycle.sun_angle().degrees(), 270.0);
        assert!(cycle.is_night());
    }

    #[test]
    fn test_set_rate_multiplier() {
        let mut cycle = DayNightCycle::new(config(12.0, 1.0)).unwrap();
        cycle.set_rate_multiplier(-3_600.0);
        cycle.update(1.0);
        assert!((cycle.time_of_day().hours() - 11.0).abs() < 1e-9);

        cycle.set_rate_multiplier(f64::NAN);
        assert_eq!(cycle.config().rate_multiplier, -3_600.0);
    }

    #[test]
    fn test_sinks_receive_each_tick() {
        let readings = Rc::new(RefCell::new(Vec::new()));
        let angles = Rc::new(RefCell::new(Vec::new()));

        let mut cycle = DayNightCycle::new(config(6.0, 3_600.0)).unwrap();
        {
            let readings = Rc::clone(&readings);
            cycle.attach_display(move |r: ClockReading| readings.borrow_mut().push(r));
        }
        {
            let angles = Rc::clone(&angles);
            cycle.attach_orientation(move |a: SunAngle| angles.borrow_mut().push(a.degrees()));
        }

        for _ in 0..3 {
            cycle.update(3.0); // 3 simulated hours each
        }

        let readings = readings.borrow();
        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0], ClockReading { hour: 9, minute: 0 });
        assert_eq!(readings[2], ClockReading { hour: 15, minute: 0 });
        let angles = angles.borrow();
        assert_eq!(angles.as_slice(), &[45.0, 90.0, 135.0]);
    }

    #[test]
    fn test_headless_and_detach() {
        let count = Rc::new(RefCell::new(0));
        let mut cycle = DayNightCycle::new(config(6.0, 1.0)).unwrap();
        {
            let count = Rc::clone(&count);
            cycle.attach_display(move |_: ClockReading| *count.borrow_mut() += 1);
        }
        cycle.update(1.0);
        cycle.detach_display();
        cycle.detach_orientation();
        cycle.update(1.0);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_sun_rotation_matches_angle() {
        let cycle = DayNightCycle::new(config(12.0, 1.0)).unwrap();
        let expected = glam::Quat::from_axis_angle(glam::Vec3::X, std::f32::consts::FRAC_PI_2);
        assert!(cycle.sun_rotation().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_full_day_sweep_wraps_once_at_sunrise() {
        // One simulated minute per tick, starting exactly at sunrise.
        let mut cycle = DayNightCycle::new(config(6.0, 60.0)).unwrap();
        let mut prev = cycle.update(1.0).sun_angle.degrees();
        assert!(prev < 1.0);

        let mut wrapped = false;
        for _ in 1..(24 * 60) {
            let angle = cycle.update(1.0).sun_angle.degrees();
            assert!((0.0..360.0).contains(&angle));
            if angle < prev {
                // The only decrease is the 360 -> 0 wrap at sunrise.
                assert!(!wrapped, "angle decreased twice");
                assert!(prev > 359.0 && angle < 1.0, "jump {prev} -> {angle}");
                wrapped = true;
            }
            prev = angle;
        }
        assert!(wrapped);
        assert_eq!(cycle.state().days_elapsed, 1);
    }

    #[test]
    fn test_backward_time_reverses_sweep() {
        let mut cycle = DayNightCycle::new(config(12.0, -3_600.0)).unwrap();
        assert_eq!(cycle.update(3.0).sun_angle.degrees(), 45.0); // 09:00
        assert_eq!(cycle.update(6.0).sun_angle.degrees(), 315.0); // 03:00
    }

    #[test]
    fn test_midnight_spanning_night() {
        let mut cfg = config(22.0, 3_600.0);
        cfg.sunrise_hour = 7.0;
        cfg.sunset_hour = 19.0;
        let mut cycle = DayNightCycle::new(cfg).unwrap();
        let state = *cycle.update(1.0);
        assert_eq!(state.clock, ClockReading { hour: 23, minute: 0 });
        assert_eq!(state.phase, Phase::Night);
        assert!((state.sun_angle.degrees() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_sinks_see_time_before_angle() {
        let events = Rc::new(RefCell::new(Vec::<String>::new()));
        let mut cycle = DayNightCycle::new(config(5.0, 60.0)).unwrap();
        {
            let events = Rc::clone(&events);
            cycle.attach_display(move |r: ClockReading| events.borrow_mut().push(format!("time {r}")));
        }
        {
            let events = Rc::clone(&events);
            cycle.attach_orientation(move |a: SunAngle| {
                events.borrow_mut().push(format!("angle {:.0}", a.degrees()))
            });
        }

        cycle.update(60.0); // 06:00 exactly, sunrise -> angle 0
        cycle.update(20.0); // 06:20

        let events = events.borrow();
        assert_eq!(
            events.as_slice(),
            &[
                "time 06 : 00".to_string(),
                "angle 0".to_string(),
                "time 06 : 20".to_string(),
                "angle 5".to_string(),
            ]
        );
    }

    #[test]
    fn test_sunrise_after_sunset_stays_night() {
        let mut cfg = config(22.0, 3_600.0);
        cfg.sunrise_hour = 20.0;
        cfg.sunset_hour = 4.0;
        let mut cycle = DayNightCycle::new(cfg).unwrap();
        for _ in 0..24 {
            cycle.update(1.0);
            assert!(cycle.is_night(), "day at {}", cycle.state().clock);
        }
        cycle.set_time(0.0);
        assert_eq!(cycle.sun_angle().degrees(), 0.0);
    }

    #[test]
    fn test_offset_matches_clock_advance() {
        let start = TimeOfDay::from_hm(20, 15);
        let mut clock = SimulatedClock::new(start.hours(), 2.0);
        let advanced = clock.tick(5.0 * 3_600.0);
        assert!((advanced.seconds() - start.offset(10.0 * 3_600.0).seconds()).abs() < 1e-6);
        assert_eq!(advanced.reading(), ClockReading { hour: 6, minute: 15 });
    }
}
