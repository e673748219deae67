//! `gps-display` — turns position state into what a screen shows.
//!
//! Nothing here draws pixels.  Each module produces plain view values that a
//! UI toolkit (or the demo's terminal printer) renders as it likes.
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`format`]  | Field formatters (`"36.806500°"`, `"±4.2 m"`, `"N/A"`, …)   |
//! | [`panel`]   | `InfoPanel` — collapsible position panel                    |
//! | [`map`]     | `MapView`, `Viewport` — marker and camera, static fallback  |
//! | [`status`]  | `StatusView` — permission and position badges               |
//! | [`screen`]  | `Screen`, `Frame`, `SourceKind` — everything combined       |
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut screen = Screen::new(SourceKind::Simulated, config.origin);
//! for sample in rx.iter() {
//!     let frame = screen.show_sample(sample);
//!     println!("{}", frame.panel.subtitle.unwrap_or_default());
//! }
//! ```

pub mod format;
pub mod map;
pub mod panel;
pub mod screen;
pub mod status;


pub use map::{DEFAULT_ZOOM, MapView, Viewport};
pub use panel::{InfoPanel, PanelRow, PanelView};
pub use screen::{Frame, Screen, SourceKind};
pub use status::{PermissionBadge, PositionBadge, StatusView};
