//! `gps-source` — the contract every position producer implements.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`producer`]   | `LocationProducer` trait, `Subscription`, `WatchOptions`     |
//! | [`permission`] | `PermissionStatus`                                           |
//! | [`replay`]     | `ReplayDevice` — scripted in-memory producer                 |
//! | [`tracker`]    | `LocationTracker`, `LocationView` — consumer-side state      |
//! | [`error`]      | `SourceError`, `SourceResult<T>`                             |
//!
//! # Design notes
//!
//! A display consumes positions through [`LocationTracker`] and never learns
//! which producer is behind it.  The device producer and the simulated one in
//! `gps-sim` are interchangeable implementations of [`LocationProducer`].
//!
//! Producers deliver updates from their own thread.  Unsubscribing stops
//! further callbacks, but a delivery already in flight may still land; the
//! tracker discards anything that arrives after it was stopped.

pub mod error;
pub mod permission;
pub mod producer;
pub mod replay;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use error::{SourceError, SourceResult};
pub use permission::PermissionStatus;
pub use producer::{LocationProducer, Subscription, UpdateCallback, WatchOptions};
pub use replay::ReplayDevice;
pub use tracker::{LocationTracker, LocationView};
