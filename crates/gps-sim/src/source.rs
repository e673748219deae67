//! The simulator exposed through the `LocationProducer` contract.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use gps_core::{Clock, PositionSample, RandomSource, SimRng, SystemClock, Tick};
use gps_source::{
    LocationProducer, PermissionStatus, SourceResult, Subscription, UpdateCallback,
    WatchOptions,
};

use crate::{MotionSimulator, SampleObserver, Scheduler, SimError};

/// A [`LocationProducer`] backed by a [`MotionSimulator`].
///
/// Lets a display run against synthetic motion through exactly the same
/// contract as a real device:
///
/// - permission is always granted;
/// - [`current`][LocationProducer::current] returns the latest sample (the
///   seed position before the first tick);
/// - [`subscribe`][LocationProducer::subscribe] starts the timer, and the
///   returned [`Subscription`] stops it.
///
/// The simulator moves into the scheduler on the first subscription, so a
/// second `subscribe` fails with [`SimError::AlreadyStarted`], reported as
/// [`SourceError::Unavailable`][gps_source::SourceError::Unavailable] like any
/// other simulator failure.  Watch thresholds are ignored; the simulator
/// emits once per update interval.
pub struct SimulatedSource<S: Scheduler, G: RandomSource = SimRng, C: Clock = SystemClock> {
    scheduler: S,
    sim:       Option<MotionSimulator<G, C>>,
    latest:    Arc<Mutex<PositionSample>>,
}

impl<S: Scheduler, G: RandomSource, C: Clock> SimulatedSource<S, G, C> {
    pub fn new(sim: MotionSimulator<G, C>, scheduler: S) -> Self {
        let latest = Arc::new(Mutex::new(sim.last_sample()));
        Self { scheduler, sim: Some(sim), latest }
    }

    /// `true` once a subscription has taken the simulator.
    pub fn is_started(&self) -> bool {
        self.sim.is_none()
    }
}

impl<S: Scheduler, G: RandomSource, C: Clock> LocationProducer for SimulatedSource<S, G, C> {
    fn request_permission(&mut self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn current(&mut self) -> SourceResult<PositionSample> {
        Ok(*self.latest.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn subscribe(
        &mut self,
        _options:  WatchOptions,
        on_update: UpdateCallback,
    ) -> SourceResult<Subscription> {
        let sim = self.sim.take().ok_or(SimError::AlreadyStarted)?;

        let active = Arc::new(AtomicBool::new(true));
        let observer = Forwarder {
            latest:   Arc::clone(&self.latest),
            active:   Arc::clone(&active),
            callback: on_update,
        };
        let running = sim.start(&mut self.scheduler, observer)?;

        Ok(Subscription::with_cancel(active, move || running.stop()))
    }
}

/// Observer that keeps `latest` fresh and forwards to the subscriber.
struct Forwarder {
    latest:   Arc<Mutex<PositionSample>>,
    active:   Arc<AtomicBool>,
    callback: UpdateCallback,
}

impl SampleObserver for Forwarder {
    fn on_sample(&mut self, _tick: Tick, sample: &PositionSample) {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = *sample;
        if self.active.load(Ordering::SeqCst) {
            (self.callback)(*sample);
        }
    }
}
