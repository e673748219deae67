//! The `LocationProducer` trait — the seam between position sources and the
//! display.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use gps_core::PositionSample;

use crate::{PermissionStatus, SourceResult};

/// Callback invoked with each new sample.  May run on a producer thread.
pub type UpdateCallback = Box<dyn FnMut(PositionSample) + Send + 'static>;

/// Thresholds a producer applies before delivering a new sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WatchOptions {
    /// Request the most accurate positioning mode available.
    pub high_accuracy:  bool,
    /// Minimum time between deliveries.
    pub min_interval:   Duration,
    /// Minimum movement between deliveries, metres.
    pub min_distance_m: f64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            high_accuracy:  true,
            min_interval:   Duration::from_millis(5_000),
            min_distance_m: 10.0,
        }
    }
}

/// A source of position samples.
///
/// # Call order
///
/// Consumers call [`request_permission`][Self::request_permission] first and
/// only proceed on [`PermissionStatus::Granted`].  [`current`][Self::current]
/// returns one fix; [`subscribe`][Self::subscribe] registers for updates until
/// the returned [`Subscription`] is cancelled or dropped.
pub trait LocationProducer {
    /// Ask the user (or platform) for foreground location access.
    fn request_permission(&mut self) -> PermissionStatus;

    /// The most recent fix the producer can give right now.
    fn current(&mut self) -> SourceResult<PositionSample>;

    /// Register `on_update` for future samples.
    fn subscribe(
        &mut self,
        options:   WatchOptions,
        on_update: UpdateCallback,
    ) -> SourceResult<Subscription>;
}

// ── Subscription ──────────────────────────────────────────────────────────────

/// Cancellation handle returned by [`LocationProducer::subscribe`].
///
/// Cancelling flips a shared flag that the producer checks before each
/// delivery, then runs an optional producer-specific teardown hook (e.g.
/// stopping a timer).  Dropping the handle cancels it.
pub struct Subscription {
    active:    Arc<AtomicBool>,
    on_cancel: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl Subscription {
    /// A subscription controlled only by `active`.
    pub fn new(active: Arc<AtomicBool>) -> Self {
        Self { active, on_cancel: None }
    }

    /// A subscription that also runs `on_cancel` exactly once when cancelled.
    pub fn with_cancel<F>(active: Arc<AtomicBool>, on_cancel: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self { active, on_cancel: Some(Box::new(on_cancel)) }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Stop further callbacks.
    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        self.active.store(false, Ordering::SeqCst);
        if let Some(hook) = self.on_cancel.take() {
            hook();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
