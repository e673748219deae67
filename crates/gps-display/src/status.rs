//! Permission and position status badges.

use std::fmt;

use gps_source::LocationView;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PermissionBadge {
    Granted,
    Denied,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PositionBadge {
    Detected,
    Waiting,
}

impl fmt::Display for PermissionBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PermissionBadge::Granted => "Granted",
            PermissionBadge::Denied  => "Denied",
        })
    }
}

impl fmt::Display for PositionBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PositionBadge::Detected => "Detected",
            PositionBadge::Waiting  => "Waiting",
        })
    }
}

/// Status card contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusView {
    pub permission: PermissionBadge,
    pub position:   PositionBadge,
    /// User-facing error text, if the source reported one.
    pub error:      Option<String>,
}

impl From<&LocationView> for StatusView {
    fn from(view: &LocationView) -> Self {
        Self {
            permission: if view.permission_granted {
                PermissionBadge::Granted
            } else {
                PermissionBadge::Denied
            },
            position: if view.fix.has_position() {
                PositionBadge::Detected
            } else {
                PositionBadge::Waiting
            },
            error: view.error.as_ref().map(ToString::to_string),
        }
    }
}
