//! `gps-sim` — timer-driven synthetic GPS producer.
//!
//! # Tick loop
//!
//! ```text
//! start():
//!   observer.on_start(seed sample)
//!   every interval (until stop):
//!     ① step     — MotionModel::step(state) → (state', sample)
//!     ② publish  — observer.on_sample(tick, sample)
//!   on teardown:
//!     observer.on_stop(final tick)
//! ```
//!
//! The simulator is moved into the timer task, so the motion state has a
//! single writer and needs no lock.  Schedulers never overlap firings of one
//! task; `stop` lets a running step finish and prevents any further one.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gps_core::SimConfig;
//! use gps_sim::{SimulatorBuilder, ThreadScheduler};
//!
//! let (tx, rx) = std::sync::mpsc::channel();
//! let sim = SimulatorBuilder::new(SimConfig::default()).seed(42).build()?;
//! let running = sim.start(&mut ThreadScheduler::default(), tx)?;
//! let first = rx.recv()?;
//! running.stop();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod simulator;
pub mod source;


pub use builder::SimulatorBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SampleObserver};
pub use scheduler::{ManualScheduler, Scheduler, ThreadScheduler, TimerHandle, TimerTask};
pub use simulator::{MotionSimulator, RunningSimulator};
pub use source::SimulatedSource;
