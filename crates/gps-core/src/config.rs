//! Simulator configuration.

use crate::{GeoPoint, GpsError, GpsResult, UpdateInterval};

/// Default origin: central Tunis.
pub const DEFAULT_ORIGIN: GeoPoint = GeoPoint { lat: 36.8065, lon: 10.1815 };

/// Default altitude baseline in metres.
pub const DEFAULT_ALTITUDE_BASELINE_M: f64 = 35.0;

/// Top-level simulator configuration.
///
/// Typically loaded from a JSON file by the application crate (see the
/// `tunis-drive` demo) and handed to `SimulatorBuilder`.  Both the origin and
/// the interval are caller-controlled and trusted; `validate` only rejects
/// values the motion model cannot step with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Where the simulated vehicle starts (and returns to on re-initialize).
    pub origin: GeoPoint,

    /// Period between ticks.  Observed usage is 1000–3000 ms.
    pub update_interval: UpdateInterval,

    /// Centre of the altitude random walk, metres.
    pub altitude_baseline_m: f64,

    /// Master RNG seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            origin:              DEFAULT_ORIGIN,
            update_interval:     UpdateInterval::DEFAULT,
            altitude_baseline_m: DEFAULT_ALTITUDE_BASELINE_M,
            seed:                None,
        }
    }
}

impl SimConfig {
    /// Check that the configuration can drive the motion model.
    pub fn validate(&self) -> GpsResult<()> {
        if self.update_interval.as_millis() == 0 {
            return Err(GpsError::Config("update interval must be non-zero".into()));
        }
        if !self.origin.is_valid() {
            return Err(GpsError::Config(format!("origin {} is out of range", self.origin)));
        }
        if !self.altitude_baseline_m.is_finite() {
            return Err(GpsError::Config("altitude baseline must be finite".into()));
        }
        Ok(())
    }
}
