//! Unit tests for gps-source.

use gps_core::{GeoPoint, PositionSample};

use crate::{
    LocationProducer, LocationTracker, PermissionStatus, ReplayDevice, SourceError,
    WatchOptions,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sample(lat: f64, lon: f64, ts: i64) -> PositionSample {
    let mut s = PositionSample::at(GeoPoint::new(lat, lon), ts);
    s.accuracy = Some(4.0);
    s.speed = Some(12.0);
    s
}

fn three_fixes() -> ReplayDevice {
    ReplayDevice::new([
        sample(36.80, 10.18, 1),
        sample(36.81, 10.19, 2),
        sample(36.82, 10.20, 3),
    ])
}

// ── Subscription ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod subscription {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use crate::Subscription;

    #[test]
    fn unsubscribe_clears_flag_and_runs_hook_once() {
        let active = Arc::new(AtomicBool::new(true));
        let hooks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hooks);
        let sub = Subscription::with_cancel(Arc::clone(&active), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(sub.is_active());
        sub.unsubscribe();
        assert!(!active.load(Ordering::SeqCst));
        assert_eq!(hooks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_cancels() {
        let active = Arc::new(AtomicBool::new(true));
        {
            let _sub = Subscription::new(Arc::clone(&active));
        }
        assert!(!active.load(Ordering::SeqCst));
    }
}

// ── ReplayDevice ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod replay {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn current_takes_first_fix_then_follows_emits() {
        let mut dev = three_fixes();
        assert_eq!(dev.current().unwrap().timestamp, 1);
        assert_eq!(dev.current().unwrap().timestamp, 1);
        dev.emit_next();
        assert_eq!(dev.current().unwrap().timestamp, 2);
    }

    #[test]
    fn empty_device_is_unavailable() {
        let mut dev = ReplayDevice::new(Vec::new());
        assert!(matches!(dev.current(), Err(SourceError::Unavailable(_))));
        assert_eq!(dev.emit_next(), None);
    }

    #[test]
    fn pushed_samples_queue_behind_script() {
        let mut dev = ReplayDevice::new(vec![sample(1.0, 1.0, 1)]);
        dev.push(sample(2.0, 2.0, 2));
        assert_eq!(dev.emit_next().map(|s| s.timestamp), Some(1));
        assert_eq!(dev.emit_next().map(|s| s.timestamp), Some(2));
        assert_eq!(dev.emit_next(), None);
    }

    #[test]
    fn denied_device_refuses_everything() {
        let mut dev = three_fixes().with_permission(PermissionStatus::Denied);
        assert_eq!(dev.request_permission(), PermissionStatus::Denied);
        assert_eq!(dev.current(), Err(SourceError::PermissionDenied));
        let sub = dev.subscribe(WatchOptions::default(), Box::new(|_: PositionSample| {}));
        assert!(matches!(sub, Err(SourceError::PermissionDenied)));
    }

    #[test]
    fn subscribers_receive_until_unsubscribed() {
        let mut dev = three_fixes();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let sub = dev
            .subscribe(WatchOptions::default(), Box::new(move |s: PositionSample| sink.lock().unwrap().push(s.timestamp)))
            .unwrap();
        dev.emit_next();
        assert_eq!(dev.active_subscribers(), 1);
        sub.unsubscribe();
        dev.emit_next();
        assert_eq!(*seen.lock().unwrap(), vec![1]);
        assert_eq!(dev.active_subscribers(), 0);
    }

    #[test]
    fn records_watch_options() {
        let mut dev = three_fixes();
        let _sub = dev.subscribe(WatchOptions::default(), Box::new(|_: PositionSample| {})).unwrap();
        let opts = dev.last_watch().unwrap();
        assert!(opts.high_accuracy);
        assert_eq!(opts.min_interval.as_millis(), 5_000);
        assert_eq!(opts.min_distance_m, 10.0);
    }
}

// ── LocationTracker ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tracker {
    use super::*;

    #[test]
    fn granted_flow_reports_current_then_updates() {
        let mut dev = three_fixes();
        let tracker = LocationTracker::start(&mut dev, WatchOptions::default());
        let view = tracker.view();
        assert!(view.permission_granted);
        assert_eq!(view.error, None);
        assert_eq!(view.fix.latitude, Some(36.80));
        assert!(tracker.is_watching());

        dev.emit_next();
        assert_eq!(tracker.view().fix.latitude, Some(36.81));
        assert_eq!(tracker.view().fix.speed, Some(12.0));
    }

    #[test]
    fn denied_permission_never_subscribes() {
        let mut dev = three_fixes().with_permission(PermissionStatus::Denied);
        let tracker = LocationTracker::start(&mut dev, WatchOptions::default());
        let view = tracker.view();
        assert!(!view.permission_granted);
        assert_eq!(view.error, Some(SourceError::PermissionDenied));
        assert!(!view.fix.has_position());
        assert!(!tracker.is_watching());
        assert_eq!(dev.active_subscribers(), 0);
    }

    #[test]
    fn unavailable_fix_is_reported_with_absent_position() {
        let mut dev = ReplayDevice::new(Vec::new());
        let tracker = LocationTracker::start(&mut dev, WatchOptions::default());
        let view = tracker.view();
        assert!(view.permission_granted);
        assert!(matches!(view.error, Some(SourceError::Unavailable(_))));
        assert!(!view.fix.has_position());
        assert!(!tracker.is_watching());
    }

    #[test]
    fn late_deliveries_after_stop_are_discarded() {
        let mut dev = three_fixes().late_delivery();
        let mut tracker = LocationTracker::start(&mut dev, WatchOptions::default());
        tracker.stop();
        assert!(!tracker.is_watching());

        // The device ignores the unsubscribe and still calls back.
        dev.emit_next();
        assert_eq!(tracker.view().fix.latitude, Some(36.80));
    }

    #[test]
    fn drop_unsubscribes() {
        let mut dev = three_fixes();
        {
            let _tracker = LocationTracker::start(&mut dev, WatchOptions::default());
            assert_eq!(dev.active_subscribers(), 1);
        }
        assert_eq!(dev.active_subscribers(), 0);
    }
}
