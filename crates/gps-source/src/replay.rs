//! `ReplayDevice` — an in-memory producer that replays scripted samples.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gps_core::PositionSample;

use crate::{
    LocationProducer, PermissionStatus, SourceError, SourceResult, Subscription,
    UpdateCallback, WatchOptions,
};

struct Subscriber {
    active:   Arc<AtomicBool>,
    callback: UpdateCallback,
}

/// A [`LocationProducer`] backed by a queue of samples.
///
/// Stands in for platform location services in tests and in the demo.  Each
/// [`emit_next`][Self::emit_next] call pops one sample, makes it the current
/// fix and delivers it to every subscriber.
///
/// With [`late_delivery`][Self::late_delivery] the device keeps delivering to
/// cancelled subscribers, which reproduces the in-flight callbacks a real
/// platform service can still fire after an unsubscribe.
pub struct ReplayDevice {
    permission:    PermissionStatus,
    pending:       VecDeque<PositionSample>,
    current:       Option<PositionSample>,
    subscribers:   Vec<Subscriber>,
    late_delivery: bool,
    last_watch:    Option<WatchOptions>,
}

impl ReplayDevice {
    /// A device that grants permission and will replay `samples` in order.
    pub fn new(samples: impl IntoIterator<Item = PositionSample>) -> Self {
        Self {
            permission:    PermissionStatus::Granted,
            pending:       samples.into_iter().collect(),
            current:       None,
            subscribers:   Vec::new(),
            late_delivery: false,
            last_watch:    None,
        }
    }

    /// Answer every permission request with `status`.
    pub fn with_permission(mut self, status: PermissionStatus) -> Self {
        self.permission = status;
        self
    }

    /// Keep delivering to subscribers after they unsubscribe.
    pub fn late_delivery(mut self) -> Self {
        self.late_delivery = true;
        self
    }

    /// Queue another sample behind the scripted ones.
    pub fn push(&mut self, sample: PositionSample) {
        self.pending.push_back(sample);
    }

    /// Pop the next sample and deliver it.  Returns `None` when exhausted.
    pub fn emit_next(&mut self) -> Option<PositionSample> {
        let sample = self.pending.pop_front()?;
        self.current = Some(sample);

        let late = self.late_delivery;
        for sub in &mut self.subscribers {
            if late || sub.active.load(Ordering::SeqCst) {
                (sub.callback)(sample);
            }
        }
        if !late {
            self.subscribers.retain(|s| s.active.load(Ordering::SeqCst));
        }
        Some(sample)
    }

    /// Number of subscribers that have not unsubscribed.
    pub fn active_subscribers(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|s| s.active.load(Ordering::SeqCst))
            .count()
    }

    /// Options passed to the most recent `subscribe` call.
    pub fn last_watch(&self) -> Option<WatchOptions> {
        self.last_watch
    }

    fn ensure_permitted(&self) -> SourceResult<()> {
        if self.permission.is_granted() {
            Ok(())
        } else {
            Err(SourceError::PermissionDenied)
        }
    }
}

impl LocationProducer for ReplayDevice {
    fn request_permission(&mut self) -> PermissionStatus {
        self.permission
    }

    fn current(&mut self) -> SourceResult<PositionSample> {
        self.ensure_permitted()?;
        if self.current.is_none() {
            self.current = self.pending.pop_front();
        }
        self.current
            .ok_or_else(|| SourceError::Unavailable("no fix acquired".into()))
    }

    fn subscribe(
        &mut self,
        options:   WatchOptions,
        on_update: UpdateCallback,
    ) -> SourceResult<Subscription> {
        self.ensure_permitted()?;
        let active = Arc::new(AtomicBool::new(true));
        self.subscribers.push(Subscriber {
            active:   Arc::clone(&active),
            callback: on_update,
        });
        self.last_watch = Some(options);
        Ok(Subscription::new(active))
    }
}
