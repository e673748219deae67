//! Foreground location permission.

use std::fmt;

/// Answer to a permission request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    #[inline]
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PermissionStatus::Granted => "granted",
            PermissionStatus::Denied  => "denied",
        };
        f.write_str(s)
    }
}
