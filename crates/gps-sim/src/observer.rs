//! Observer trait receiving the simulator's sample stream.

use std::sync::mpsc::Sender;

use gps_core::{PositionSample, Tick};

/// Callbacks invoked by a running simulator.
///
/// The observer is moved into the timer task, so it runs on whatever thread
/// the [`Scheduler`][crate::Scheduler] fires on and must be `Send`.
///
/// # Example — forward to a UI thread
///
/// ```rust,ignore
/// let (tx, rx) = std::sync::mpsc::channel();
/// let running = sim.start(&mut ThreadScheduler::default(), tx)?;
/// for sample in rx.iter().take(10) {
///     render(&sample);
/// }
/// running.stop();
/// ```
pub trait SampleObserver: Send + 'static {
    /// Called once by `start` with the seed position, before the first tick.
    fn on_start(&mut self, _initial: &PositionSample) {}

    /// Called once per tick with the freshly emitted sample.
    fn on_sample(&mut self, tick: Tick, sample: &PositionSample);

    /// Called when the timer task is torn down after `stop`.
    fn on_stop(&mut self, _final_tick: Tick) {}
}

/// A [`SampleObserver`] that does nothing.
pub struct NoopObserver;

impl SampleObserver for NoopObserver {
    fn on_sample(&mut self, _tick: Tick, _sample: &PositionSample) {}
}

/// Forwards every sample (including the seed position) over a channel.
///
/// A disconnected receiver is not an error: the screen consuming the samples
/// has gone away and the samples are simply dropped until `stop` is called.
impl SampleObserver for Sender<PositionSample> {
    fn on_start(&mut self, initial: &PositionSample) {
        let _ = self.send(*initial);
    }

    fn on_sample(&mut self, tick: Tick, sample: &PositionSample) {
        if self.send(*sample).is_err() {
            tracing::debug!(%tick, "sample receiver disconnected");
        }
    }
}
