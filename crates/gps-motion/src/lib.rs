//! `gps-motion` — kinematic state and the synthetic GPS motion model.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`state`]  | `MotionState` — position, heading, speed, altitude        |
//! | [`model`]  | `MotionModel` — `seed` and `step` as pure functions       |
//!
//! # Movement model
//!
//! Each step perturbs heading by ±5° and speed by ±2 m/s (clamped to
//! 5–25 m/s), then moves `speed * interval` metres along the new heading
//! with a flat-earth approximation.  Altitude takes a bounded random walk
//! around a baseline and accuracy is drawn uniformly from 3–7 m.
//!
//! `step` takes the state by value and returns the next one together with the
//! emitted [`PositionSample`][gps_core::PositionSample].  Nothing here owns a
//! timer; `gps-sim` drives the model once per tick.

pub mod model;
pub mod state;


pub use model::MotionModel;
pub use state::{MotionState, SPEED_MAX_MPS, SPEED_MIN_MPS};
