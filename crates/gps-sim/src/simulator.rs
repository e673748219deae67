//! The `MotionSimulator` and its timer-driven run loop.

use gps_core::{
    Clock, GeoPoint, PositionSample, RandomSource, SimConfig, SimRng, SystemClock,
    Tick, UpdateInterval,
};
use gps_motion::{MotionModel, MotionState};

use crate::{SampleObserver, Scheduler, SimResult, TimerHandle};

// ── MotionSimulator ───────────────────────────────────────────────────────────

/// Owns one [`MotionState`] and advances it with a [`MotionModel`].
///
/// The simulator can be stepped by hand (tests, replays) or handed to a
/// [`Scheduler`] with [`start`][Self::start], which moves it into the timer
/// task.  Either way there is exactly one writer of the state.
///
/// Create via [`SimulatorBuilder`][crate::SimulatorBuilder] or
/// [`MotionSimulator::new`].
pub struct MotionSimulator<G: RandomSource = SimRng, C: Clock = SystemClock> {
    model:       MotionModel,
    origin:      GeoPoint,
    interval:    UpdateInterval,
    state:       MotionState,
    tick:        Tick,
    last_sample: PositionSample,
    rng:         G,
    clock:       C,
}

impl<G: RandomSource, C: Clock> MotionSimulator<G, C> {
    /// Validate `config` and seed a state at its origin.
    pub fn new(config: &SimConfig, mut rng: G, clock: C) -> SimResult<Self> {
        config.validate()?;
        let model = MotionModel::from_config(config);
        let state = model.seed(config.origin, &mut rng);
        let last_sample = model.initial_sample(&state, &clock);
        Ok(Self {
            model,
            origin: config.origin,
            interval: config.update_interval,
            state,
            tick: Tick::ZERO,
            last_sample,
            rng,
            clock,
        })
    }

    /// Reset to `origin` with a fresh random heading and speed.
    ///
    /// Discards all drift accumulated so far and restarts the tick count.
    pub fn initialize(&mut self, origin: GeoPoint, interval: UpdateInterval) -> SimResult<()> {
        SimConfig {
            origin,
            update_interval: interval,
            altitude_baseline_m: self.model.altitude_baseline_m,
            seed: None,
        }
        .validate()?;

        self.origin = origin;
        self.interval = interval;
        self.state = self.model.seed(origin, &mut self.rng);
        self.tick = Tick::ZERO;
        self.last_sample = self.model.initial_sample(&self.state, &self.clock);
        tracing::info!(%origin, %interval, heading = self.state.heading, speed = self.state.speed,
            "motion simulator initialized");
        Ok(())
    }

    /// Advance one interval and return the emitted sample.
    pub fn step(&mut self) -> PositionSample {
        let (next, sample) = self.model.step(self.state, self.interval, &mut self.rng, &self.clock);
        self.state = next;
        self.tick = self.tick.next();
        self.last_sample = sample;
        tracing::debug!(
            tick = %self.tick,
            lat = sample.latitude,
            lon = sample.longitude,
            speed = next.speed,
            heading = next.heading,
            "simulated position"
        );
        sample
    }

    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    #[inline]
    pub fn interval(&self) -> UpdateInterval {
        self.interval
    }

    /// The seed sample after (re)initialization, else the last emitted one.
    #[inline]
    pub fn last_sample(&self) -> PositionSample {
        self.last_sample
    }

    /// Hand the simulator to `scheduler`, firing one step per interval.
    ///
    /// `observer.on_start` runs immediately with the seed sample.  On timer
    /// failure the simulator is dropped and the caller should fall back to a
    /// static region.
    pub fn start<S, O>(self, scheduler: &mut S, mut observer: O) -> SimResult<RunningSimulator>
    where
        S: Scheduler + ?Sized,
        O: SampleObserver,
    {
        let interval = self.interval;
        observer.on_start(&self.last_sample);

        let mut run = TickLoop { sim: self, observer };
        let handle = scheduler
            .schedule_repeating(interval.as_duration(), Box::new(move || run.fire()))
            .inspect_err(|e| tracing::error!(error = %e, "cannot schedule simulator timer"))?;

        tracing::info!(%interval, "motion simulator started");
        Ok(RunningSimulator { handle: Some(handle), interval })
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

/// The state moved into the timer task.
struct TickLoop<G: RandomSource, C: Clock, O: SampleObserver> {
    sim:      MotionSimulator<G, C>,
    observer: O,
}

impl<G: RandomSource, C: Clock, O: SampleObserver> TickLoop<G, C, O> {
    fn fire(&mut self) {
        let sample = self.sim.step();
        self.observer.on_sample(self.sim.tick(), &sample);
    }
}

impl<G: RandomSource, C: Clock, O: SampleObserver> Drop for TickLoop<G, C, O> {
    fn drop(&mut self) {
        self.observer.on_stop(self.sim.tick());
    }
}

// ── RunningSimulator ──────────────────────────────────────────────────────────

/// Handle to a simulator owned by a scheduler.  Dropping it stops the timer,
/// the same as calling [`stop`][Self::stop].
#[derive(Debug)]
pub struct RunningSimulator {
    handle:   Option<TimerHandle>,
    interval: UpdateInterval,
}

impl RunningSimulator {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_cancelled())
    }

    #[inline]
    pub fn interval(&self) -> UpdateInterval {
        self.interval
    }

    /// Cancel the timer.  A step already in progress completes; no new one
    /// starts.
    pub fn stop(mut self) {
        self.halt();
    }

    fn halt(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
            tracing::info!("motion simulator stopped");
        }
    }
}

impl Drop for RunningSimulator {
    fn drop(&mut self) {
        self.halt();
    }
}

