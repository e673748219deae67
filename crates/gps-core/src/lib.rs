//! `gps-core` — foundational types for the `gps_twin` position simulator.
//!
//! This crate is a dependency of every other `gps-*` crate.  It has no
//! `gps-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, flat-earth displacement, haversine distance    |
//! | [`sample`]   | `PositionSample`, `LocationFix`                            |
//! | [`time`]     | `Tick`, `UpdateInterval`, `Clock`, `SystemClock`, `ManualClock` |
//! | [`rng`]      | `RandomSource` trait, `SimRng`, `ConstantRng`, `SequenceRng` |
//! | [`config`]   | `SimConfig` and its defaults                               |
//! | [`error`]    | `GpsError`, `GpsResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod sample;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{GpsError, GpsResult};
pub use geo::{GeoPoint, METERS_PER_DEGREE};
pub use rng::{ConstantRng, RandomSource, SequenceRng, SimRng};
pub use sample::{LocationFix, PositionSample};
pub use time::{Clock, ManualClock, SystemClock, Tick, UpdateInterval};
