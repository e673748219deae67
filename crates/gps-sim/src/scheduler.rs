//! Recurring timers: a `Scheduler` trait plus a threaded and a manual backend.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use crate::{SimError, SimResult};

/// Work run on every timer firing.
pub type TimerTask = Box<dyn FnMut() + Send + 'static>;

/// Registers periodic callbacks.
///
/// Implementations must never overlap two invocations of the same task, and
/// must not start a new invocation once the returned handle is cancelled.
/// An invocation already running when `cancel` is called finishes normally.
pub trait Scheduler {
    /// Fire `task` every `interval` until the handle is cancelled or dropped.
    fn schedule_repeating(&mut self, interval: Duration, task: TimerTask) -> SimResult<TimerHandle>;
}

// ── TimerHandle ───────────────────────────────────────────────────────────────

/// Cancellation handle for a scheduled task.  Dropping it cancels the timer.
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
    on_cancel: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl TimerHandle {
    pub fn new(cancelled: Arc<AtomicBool>) -> Self {
        Self { cancelled, on_cancel: None }
    }

    /// A handle that also runs `on_cancel` once, after raising the flag.
    pub fn with_cancel<F>(cancelled: Arc<AtomicBool>, on_cancel: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self { cancelled, on_cancel: Some(Box::new(on_cancel)) }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(hook) = self.on_cancel.take() {
            hook();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

// ── ThreadScheduler ───────────────────────────────────────────────────────────

/// Runs each timer on its own named background thread.
///
/// Firings are fixed-rate: the n-th firing is due at `start + n * interval`.
/// If a task overruns, the next firing happens immediately rather than
/// overlapping.  Cancelling wakes the thread through a channel and joins it,
/// so once `cancel` returns no task code is running (unless `cancel` was
/// called from the task itself).
#[derive(Clone, Debug)]
pub struct ThreadScheduler {
    thread_name: String,
}

impl ThreadScheduler {
    pub fn new(thread_name: impl Into<String>) -> Self {
        Self { thread_name: thread_name.into() }
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        Self::new("gps-sim-timer")
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule_repeating(&mut self, interval: Duration, mut task: TimerTask) -> SimResult<TimerHandle> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let join = thread::Builder::new()
            .name(self.thread_name.clone())
            .spawn(move || {
                let mut next_due = Instant::now() + interval;
                loop {
                    let wait = next_due.saturating_duration_since(Instant::now());
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {
                            if flag.load(Ordering::SeqCst) {
                                break;
                            }
                            task();
                            next_due += interval;
                        }
                        // Explicit stop or the handle's sender was dropped.
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })
            .map_err(SimError::TimerUnavailable)?;

        Ok(TimerHandle::with_cancel(cancelled, move || {
            drop(stop_tx);
            if join.thread().id() != thread::current().id() {
                let _ = join.join();
            }
        }))
    }
}

// ── ManualScheduler ───────────────────────────────────────────────────────────

struct ManualTimer {
    interval:  Duration,
    next_due:  Duration,
    cancelled: Arc<AtomicBool>,
    task:      TimerTask,
}

#[derive(Default)]
struct ManualInner {
    now:       Duration,
    timers:    Vec<ManualTimer>,
    fail_next: bool,
}

impl ManualInner {
    fn prune(&mut self) {
        self.timers.retain(|t| !t.cancelled.load(Ordering::SeqCst));
    }
}

/// A virtual-time scheduler for tests.
///
/// Nothing fires until [`advance`][Self::advance] is called; tasks then run on
/// the caller's thread in due-time order.  Clones share the same timeline.
/// Cancelled tasks are dropped at the next `advance` or `active_timers` call.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `schedule_repeating` call fail as if the platform had
    /// run out of timer resources.
    pub fn fail_next_schedule(&self) {
        self.lock().fail_next = true;
    }

    /// Virtual time elapsed so far.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of timers that have not been cancelled.
    pub fn active_timers(&self) -> usize {
        let mut inner = self.lock();
        inner.prune();
        inner.timers.len()
    }

    /// Move virtual time forward by `by`, firing every task that comes due.
    /// Returns the number of firings.
    ///
    /// Tasks must not call back into this scheduler.
    pub fn advance(&self, by: Duration) -> usize {
        let mut inner = self.lock();
        let target = inner.now + by;
        let mut fired = 0;

        loop {
            inner.prune();
            let due = inner
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.next_due <= target)
                .min_by_key(|(_, t)| t.next_due)
                .map(|(i, _)| i);
            let Some(i) = due else { break };

            let timer = &mut inner.timers[i];
            let at = timer.next_due;
            timer.next_due += timer.interval;
            (timer.task)();
            inner.now = at;
            fired += 1;
        }

        inner.now = target;
        inner.prune();
        fired
    }

    fn lock(&self) -> MutexGuard<'_, ManualInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, interval: Duration, task: TimerTask) -> SimResult<TimerHandle> {
        let mut inner = self.lock();
        if std::mem::take(&mut inner.fail_next) {
            return Err(SimError::TimerUnavailable(std::io::Error::new(
                std::io::ErrorKind::OutOfMemory,
                "manual scheduler told to fail",
            )));
        }
        let cancelled = Arc::new(AtomicBool::new(false));
        let next_due = inner.now + interval;
        inner.timers.push(ManualTimer {
            interval,
            next_due,
            cancelled: Arc::clone(&cancelled),
            task,
        });
        Ok(TimerHandle::new(cancelled))
    }
}
