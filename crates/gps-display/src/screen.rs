//! The position screen: panel, map, and status in one frame.

use gps_core::{GeoPoint, LocationFix, PositionSample};
use gps_source::LocationView;

use crate::{InfoPanel, MapView, PanelView, StatusView, Viewport};

/// Banner shown while positions are synthetic.
pub const SIMULATED_BANNER: &str = "Development mode: simulated GPS data";

/// Which producer feeds the screen.  Only affects the banner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Device,
    Simulated,
}

/// Everything the screen shows for one update.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub panel:    PanelView,
    pub viewport: Viewport,
    pub marker:   Option<GeoPoint>,
    pub status:   StatusView,
    pub banner:   Option<&'static str>,
}

/// Combines [`InfoPanel`], [`MapView`] and [`StatusView`] into frames.
pub struct Screen {
    source: SourceKind,
    panel:  InfoPanel,
    map:    MapView,
}

impl Screen {
    /// A screen whose map falls back to `fallback` until a fix arrives.
    pub fn new(source: SourceKind, fallback: GeoPoint) -> Self {
        Self {
            source,
            panel: InfoPanel::new(),
            map:   MapView::new(fallback),
        }
    }

    /// Replace the default map settings.
    pub fn with_map(mut self, map: MapView) -> Self {
        self.map = map;
        self
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn panel_mut(&mut self) -> &mut InfoPanel {
        &mut self.panel
    }

    pub fn map_mut(&mut self) -> &mut MapView {
        &mut self.map
    }

    /// Render from a tracker snapshot.
    pub fn render(&mut self, view: &LocationView) -> Frame {
        self.map.update(&view.fix);
        Frame {
            panel:    self.panel.render(&view.fix),
            viewport: self.map.viewport(),
            marker:   self.map.marker(),
            status:   StatusView::from(view),
            banner:   match self.source {
                SourceKind::Simulated => Some(SIMULATED_BANNER),
                SourceKind::Device    => None,
            },
        }
    }

    /// Render a sample pushed straight from a producer (no permission step).
    pub fn show_sample(&mut self, sample: PositionSample) -> Frame {
        let view = LocationView {
            fix:                LocationFix::from(sample),
            error:              None,
            permission_granted: true,
        };
        self.render(&view)
    }
}
