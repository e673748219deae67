//! The collapsible position panel.

use gps_core::LocationFix;

use crate::format;

pub const PANEL_TITLE: &str = "GPS Position";

/// One labelled line of the expanded panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelRow {
    pub label: &'static str,
    pub value: String,
}

/// Rendered panel contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub title:    &'static str,
    /// `"lat°, lon°"` once a coordinate is known.
    pub subtitle: Option<String>,
    /// Empty while collapsed.
    pub rows:     Vec<PanelRow>,
    pub expanded: bool,
}

/// Collapsible info panel.  Starts collapsed, showing the header only.
#[derive(Clone, Debug, Default)]
pub struct InfoPanel {
    expanded: bool,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between collapsed and expanded.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn render(&self, fix: &LocationFix) -> PanelView {
        let rows = if self.expanded {
            vec![
                row("Latitude", format::coordinate(fix.latitude)),
                row("Longitude", format::coordinate(fix.longitude)),
                row("Altitude", format::altitude(fix.altitude)),
                row("Accuracy", format::accuracy(fix.accuracy)),
                row("Speed", format::speed(fix.speed)),
            ]
        } else {
            Vec::new()
        };
        PanelView {
            title:    PANEL_TITLE,
            subtitle: format::coordinate_pair(fix.latitude, fix.longitude),
            rows,
            expanded: self.expanded,
        }
    }
}

fn row(label: &'static str, value: String) -> PanelRow {
    PanelRow { label, value }
}
