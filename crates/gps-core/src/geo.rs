//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Simulated displacements per tick
//! are a few tens of metres, i.e. ~1e-4 degrees, so single precision would
//! lose most of each step to rounding.

/// Metres per degree of latitude used by the flat-earth displacement model.
///
/// The same constant scales longitude after the `cos(latitude)` correction.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Move `distance_m` metres along compass `heading_deg` using a local
    /// flat-earth approximation.
    ///
    /// The longitude step is divided by `cos(self.lat)`, which grows without
    /// bound towards the poles and is undefined at exactly ±90°.  The
    /// simulator targets vehicle tracking at moderate latitudes; callers near
    /// the poles get meaningless longitudes.
    pub fn displaced(self, distance_m: f64, heading_deg: f64) -> GeoPoint {
        let heading = heading_deg.to_radians();
        let d_lat = distance_m * heading.cos() / METERS_PER_DEGREE;
        let d_lon = distance_m * heading.sin() / (METERS_PER_DEGREE * self.lat.to_radians().cos());
        GeoPoint {
            lat: self.lat + d_lat,
            lon: self.lon + d_lon,
        }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// `true` when both components are finite and inside the WGS-84 ranges.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
