//! Field formatters for the info panel.
//!
//! Every formatter takes an `Option` and renders an absent value as
//! [`NOT_AVAILABLE`].  A present zero (e.g. a stopped vehicle) is shown as a
//! number, not as missing.

pub const NOT_AVAILABLE: &str = "N/A";

/// `36.806500°`
pub fn coordinate(degrees: Option<f64>) -> String {
    degrees.map_or_else(|| NOT_AVAILABLE.to_owned(), |d| format!("{d:.6}°"))
}

/// `36.806500°, 10.181500°`, or `None` until both halves are known.
pub fn coordinate_pair(latitude: Option<f64>, longitude: Option<f64>) -> Option<String> {
    Some(format!("{:.6}°, {:.6}°", latitude?, longitude?))
}

/// `35.0 m`
pub fn altitude(metres: Option<f64>) -> String {
    metres.map_or_else(|| NOT_AVAILABLE.to_owned(), |m| format!("{m:.1} m"))
}

/// `±4.2 m`
pub fn accuracy(metres: Option<f64>) -> String {
    metres.map_or_else(|| NOT_AVAILABLE.to_owned(), |m| format!("±{m:.1} m"))
}

/// Speed given in m/s, shown in km/h: `36.0 km/h`
pub fn speed(metres_per_sec: Option<f64>) -> String {
    metres_per_sec.map_or_else(|| NOT_AVAILABLE.to_owned(), |v| format!("{:.1} km/h", v * 3.6))
}
