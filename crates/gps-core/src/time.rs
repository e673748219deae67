//! Simulation time model.
//!
//! # Design
//!
//! Simulated motion advances in discrete `Tick`s, one per `UpdateInterval`.
//! Sample timestamps, however, are wall-clock milliseconds taken from a
//! [`Clock`] at the moment the sample is produced.  The two are kept apart so
//! a test can step the model without a running timer and still assert exact
//! timestamps through [`ManualClock`].

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of simulator steps taken since the last (re)initialization.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── UpdateInterval ───────────────────────────────────────────────────────────

/// Fixed period between simulator recomputation ticks, in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateInterval(pub u64);

impl UpdateInterval {
    /// One update per second.
    pub const DEFAULT: UpdateInterval = UpdateInterval(1_000);

    #[inline]
    pub fn from_millis(ms: u64) -> Self {
        UpdateInterval(ms)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Elapsed seconds per tick, as used by the displacement formula.
    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    #[inline]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for UpdateInterval {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for UpdateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of wall-clock timestamps for emitted samples.
pub trait Clock: Send + 'static {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// The system wall clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        // A clock set before 1970 reports 0 rather than failing the tick.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// A settable clock for tests.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// while the simulator owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock(Arc<AtomicI64>);

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        ManualClock(Arc::new(AtomicI64::new(start_millis)))
    }

    pub fn set(&self, millis: i64) {
        self.0.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        self.0.fetch_add(by.as_millis() as i64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}
