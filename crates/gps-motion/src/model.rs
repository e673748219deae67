//! The seed/step motion model.

use gps_core::{Clock, GeoPoint, PositionSample, RandomSource, SimConfig, UpdateInterval};

use crate::MotionState;
use crate::state::{clamp_speed, wrap_heading};

/// Initial speed is drawn from `[8, 20)` m/s (~29–72 km/h).
pub const INITIAL_SPEED_MPS: (f64, f64) = (8.0, 20.0);

/// Per-step heading perturbation amplitude, degrees.
pub const HEADING_JITTER_DEG: f64 = 5.0;

/// Per-step speed perturbation amplitude, metres per second.
pub const SPEED_JITTER_MPS: f64 = 2.0;

/// Per-step altitude walk amplitude, metres.
pub const ALTITUDE_STEP_M: f64 = 1.0;

/// Maximum distance of the altitude walk from its baseline, metres.
pub const ALTITUDE_BAND_M: f64 = 5.0;

/// Reported accuracy is drawn from `[3, 7)` metres.
pub const ACCURACY_M: (f64, f64) = (3.0, 7.0);

/// Pure motion model.
///
/// Holds only parameters, never state: `seed` creates a [`MotionState`] and
/// `step` maps one state to the next.  Both take the random source and clock
/// as arguments so tests can pin every input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionModel {
    /// Centre of the altitude random walk, metres.
    pub altitude_baseline_m: f64,
}

impl MotionModel {
    pub fn new(altitude_baseline_m: f64) -> Self {
        Self { altitude_baseline_m }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.altitude_baseline_m)
    }

    /// Fresh state at `origin` with a random heading in `[0, 360)` and a random
    /// speed in `[8, 20)` m/s.  Altitude starts on the baseline.
    pub fn seed<G: RandomSource + ?Sized>(&self, origin: GeoPoint, rng: &mut G) -> MotionState {
        let heading = rng.uniform(0.0, 360.0);
        let speed = rng.uniform(INITIAL_SPEED_MPS.0, INITIAL_SPEED_MPS.1);
        MotionState {
            latitude:  origin.lat,
            longitude: origin.lon,
            heading,
            speed,
            altitude:  self.altitude_baseline_m,
        }
    }

    /// The sample describing `state` itself, before any step has been taken.
    ///
    /// Accuracy is reported as the midpoint of the accuracy band.
    pub fn initial_sample<C: Clock + ?Sized>(&self, state: &MotionState, clock: &C) -> PositionSample {
        PositionSample {
            latitude:  state.latitude,
            longitude: state.longitude,
            altitude:  Some(state.altitude),
            accuracy:  Some((ACCURACY_M.0 + ACCURACY_M.1) / 2.0),
            speed:     Some(state.speed),
            heading:   Some(wrap_heading(state.heading)),
            timestamp: clock.now_millis(),
        }
    }

    /// Advance `state` by one `interval`.
    ///
    /// Draw order is fixed: heading jitter, speed jitter, altitude step,
    /// accuracy.  The longitude correction uses the latitude *before* the
    /// move; see [`GeoPoint::displaced`] for its behaviour near the poles.
    pub fn step<G, C>(
        &self,
        state:    MotionState,
        interval: UpdateInterval,
        rng:      &mut G,
        clock:    &C,
    ) -> (MotionState, PositionSample)
    where
        G: RandomSource + ?Sized,
        C: Clock + ?Sized,
    {
        let heading = state.heading + rng.jitter(HEADING_JITTER_DEG);
        let speed = clamp_speed(state.speed + rng.jitter(SPEED_JITTER_MPS));

        let distance_m = speed * interval.as_secs_f64();
        let moved = state.position().displaced(distance_m, heading);

        let low = self.altitude_baseline_m - ALTITUDE_BAND_M;
        let high = self.altitude_baseline_m + ALTITUDE_BAND_M;
        let altitude = (state.altitude + rng.jitter(ALTITUDE_STEP_M)).clamp(low, high);
        let accuracy = rng.uniform(ACCURACY_M.0, ACCURACY_M.1);

        let next = MotionState {
            latitude:  moved.lat,
            longitude: moved.lon,
            heading:   wrap_heading(heading),
            speed,
            altitude,
        };
        let sample = PositionSample {
            latitude:  next.latitude,
            longitude: next.longitude,
            altitude:  Some(altitude),
            accuracy:  Some(accuracy),
            speed:     Some(speed),
            heading:   Some(next.heading),
            timestamp: clock.now_millis(),
        };
        (next, sample)
    }
}

impl Default for MotionModel {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}
