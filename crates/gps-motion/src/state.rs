//! Simulator-internal kinematic state.

use gps_core::GeoPoint;

/// Lower bound of the speed band, metres per second.
pub const SPEED_MIN_MPS: f64 = 5.0;

/// Upper bound of the speed band, metres per second.
pub const SPEED_MAX_MPS: f64 = 25.0;

/// The kinematic state of the simulated vehicle.
///
/// Only [`MotionModel::step`][crate::MotionModel::step] produces new states;
/// the simulator holds exactly one and replaces it on every tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionState {
    pub latitude:  f64,
    pub longitude: f64,
    /// Compass degrees, `[0, 360)` after every step.
    pub heading:   f64,
    /// Metres per second, `[5, 25]` after every step.
    pub speed:     f64,
    /// Metres; stays within the model's baseline ± 5 m.
    pub altitude:  f64,
}

impl MotionState {
    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Clamp a speed into the allowed band.  Idempotent once in range.
#[inline]
pub fn clamp_speed(speed: f64) -> f64 {
    speed.clamp(SPEED_MIN_MPS, SPEED_MAX_MPS)
}

/// Wrap a heading into `[0, 360)`, including negative inputs.
#[inline]
pub fn wrap_heading(heading: f64) -> f64 {
    let wrapped = heading.rem_euclid(360.0);
    // rem_euclid can round a tiny negative input up to exactly 360.0.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
