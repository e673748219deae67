//! Consumer-side position state fed by any [`LocationProducer`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gps_core::{LocationFix, PositionSample};

use crate::{LocationProducer, SourceError, Subscription, WatchOptions};

/// What a display reads: the latest fix plus permission and error status.
///
/// `fix` stays all-`None` until the first sample arrives, and also when
/// permission is denied or the producer cannot deliver.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationView {
    pub fix:                LocationFix,
    pub error:              Option<SourceError>,
    pub permission_granted: bool,
}

/// Drives a producer through permission → current fix → subscription and
/// keeps the resulting [`LocationView`] up to date.
///
/// The view is shared with the producer's callback, which may run on another
/// thread; hence the mutex.  After [`stop`][Self::stop] any delivery still in
/// flight is dropped instead of overwriting the view.
pub struct LocationTracker {
    view:         Arc<Mutex<LocationView>>,
    live:         Arc<AtomicBool>,
    subscription: Option<Subscription>,
}

impl LocationTracker {
    /// Start tracking `producer`.
    ///
    /// Never fails: permission refusal and unavailability are recorded in the
    /// view for the display to show.
    pub fn start<P>(producer: &mut P, options: WatchOptions) -> Self
    where
        P: LocationProducer + ?Sized,
    {
        let mut tracker = Self {
            view:         Arc::new(Mutex::new(LocationView::default())),
            live:         Arc::new(AtomicBool::new(true)),
            subscription: None,
        };

        if !producer.request_permission().is_granted() {
            tracing::warn!("location permission denied");
            let mut view = tracker.lock();
            view.permission_granted = false;
            view.error = Some(SourceError::PermissionDenied);
            drop(view);
            return tracker;
        }
        tracker.lock().permission_granted = true;

        match producer.current() {
            Ok(sample) => tracker.record(sample),
            Err(e) => {
                tracing::warn!(error = %e, "could not get current location");
                tracker.lock().error = Some(e);
                return tracker;
            }
        }

        let view = Arc::clone(&tracker.view);
        let live = Arc::clone(&tracker.live);
        let on_update = Box::new(move |sample: PositionSample| {
            if !live.load(Ordering::SeqCst) {
                tracing::debug!(timestamp = sample.timestamp, "discarding late location update");
                return;
            }
            let mut v = view.lock().unwrap_or_else(PoisonError::into_inner);
            v.fix = sample.into();
        });

        match producer.subscribe(options, on_update) {
            Ok(sub) => tracker.subscription = Some(sub),
            Err(e) => {
                tracing::warn!(error = %e, "could not watch location");
                // No updates will follow, so the one-shot fix must not pass
                // for a live position.
                let mut view = tracker.lock();
                view.fix = LocationFix::default();
                view.error = Some(e);
            }
        }
        tracker
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> LocationView {
        self.lock().clone()
    }

    /// `true` while a subscription is held.
    pub fn is_watching(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Unsubscribe and ignore any later deliveries.
    pub fn stop(&mut self) {
        self.live.store(false, Ordering::SeqCst);
        if let Some(sub) = self.subscription.take() {
            sub.unsubscribe();
        }
    }

    fn record(&self, sample: PositionSample) {
        self.lock().fix = sample.into();
    }

    fn lock(&self) -> MutexGuard<'_, LocationView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for LocationTracker {
    fn drop(&mut self) {
        self.stop();
    }
}
