//! Map camera and marker state.

use gps_core::{GeoPoint, LocationFix};

/// Street-level zoom used by the position screen.
pub const DEFAULT_ZOOM: u8 = 15;

/// What the map surface is asked to show.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom:   u8,
}

/// Marker and camera state fed by position fixes.
///
/// Before the first fix, and whenever the fix is absent, the map shows a
/// static region centred on `fallback` with no marker.  The first fix always
/// centres the camera; after that the camera only follows the marker when
/// `follow_position` is set.
#[derive(Clone, Debug)]
pub struct MapView {
    fallback:        GeoPoint,
    viewport:        Viewport,
    marker:          Option<GeoPoint>,
    follow_position: bool,
    show_marker:     bool,
    ready:           bool,
    centred:         bool,
}

impl MapView {
    pub fn new(fallback: GeoPoint) -> Self {
        Self {
            fallback,
            viewport:        Viewport { center: fallback, zoom: DEFAULT_ZOOM },
            marker:          None,
            follow_position: false,
            show_marker:     true,
            ready:           false,
            centred:         false,
        }
    }

    pub fn follow_position(mut self, follow: bool) -> Self {
        self.follow_position = follow;
        self
    }

    pub fn show_marker(mut self, show: bool) -> Self {
        self.show_marker = show;
        self
    }

    pub fn zoom(mut self, zoom: u8) -> Self {
        self.viewport.zoom = zoom;
        self
    }

    /// Apply a fix (or its absence).
    pub fn update(&mut self, fix: &LocationFix) {
        match fix.point() {
            Some(p) => {
                self.marker = self.show_marker.then_some(p);
                if self.follow_position || !self.centred {
                    self.viewport.center = p;
                    self.centred = true;
                }
            }
            None => {
                self.marker = None;
                self.viewport.center = self.fallback;
                self.centred = false;
            }
        }
    }

    /// The map surface finished loading.  Has no effect on the data path.
    pub fn on_map_ready(&mut self) {
        if !self.ready {
            tracing::debug!(center = %self.viewport.center, "map surface ready");
        }
        self.ready = true;
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn marker(&self) -> Option<GeoPoint> {
        self.marker
    }
}
