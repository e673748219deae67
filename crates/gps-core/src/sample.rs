//! The position record shared by every producer and consumer.

use crate::GeoPoint;

/// One emitted snapshot of simulated or real location data.
///
/// Immutable once produced: each update tick replaces the previous sample
/// with a new one rather than editing it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSample {
    /// Degrees, WGS-84.
    pub latitude: f64,
    /// Degrees, WGS-84.
    pub longitude: f64,
    /// Metres above sea level.
    pub altitude: Option<f64>,
    /// Horizontal accuracy radius in metres.
    pub accuracy: Option<f64>,
    /// Ground speed in metres per second.
    pub speed: Option<f64>,
    /// Compass heading in degrees, `[0, 360)`.
    pub heading: Option<f64>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl PositionSample {
    /// A bare coordinate with every optional field absent.
    pub fn at(point: GeoPoint, timestamp: i64) -> Self {
        Self {
            latitude: point.lat,
            longitude: point.lon,
            altitude: None,
            accuracy: None,
            speed: None,
            heading: None,
            timestamp,
        }
    }

    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

// ── LocationFix ───────────────────────────────────────────────────────────────

/// Consumer-facing position whose fields may all be absent.
///
/// While permission is denied or the device cannot produce a fix, the display
/// still needs a value to render; `LocationFix::default()` is that value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationFix {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub accuracy: Option<f64>,
    pub speed: Option<f64>,
}

impl LocationFix {
    /// `true` once a coordinate has been received.
    #[inline]
    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn point(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(self.latitude?, self.longitude?))
    }
}

impl From<PositionSample> for LocationFix {
    fn from(s: PositionSample) -> Self {
        Self {
            latitude: Some(s.latitude),
            longitude: Some(s.longitude),
            altitude: s.altitude,
            accuracy: s.accuracy,
            speed: s.speed,
        }
    }
}

impl From<Option<PositionSample>> for LocationFix {
    fn from(s: Option<PositionSample>) -> Self {
        s.map(LocationFix::from).unwrap_or_default()
    }
}
