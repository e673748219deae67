//! Fluent builder for constructing a [`MotionSimulator`].

use gps_core::{Clock, GeoPoint, RandomSource, SimConfig, SimRng, SystemClock, UpdateInterval};

use crate::{MotionSimulator, SimResult};

/// Fluent builder for [`MotionSimulator<G, C>`].
///
/// # Defaults
///
/// | Method          | Default                                          |
/// |-----------------|--------------------------------------------------|
/// | `.origin(p)`    | `config.origin` (central Tunis)                  |
/// | `.interval(i)`  | `config.update_interval` (1000 ms)               |
/// | `.seed(s)`      | `config.seed`, else OS entropy                   |
/// | `.rng(r)`       | `SimRng` from the seed                           |
/// | `.clock(c)`     | `SystemClock`                                    |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimulatorBuilder::new(SimConfig::default())
///     .interval(UpdateInterval::from_millis(3000))
///     .seed(42)
///     .build()?;
/// let running = sim.start(&mut ThreadScheduler::default(), tx)?;
/// ```
pub struct SimulatorBuilder<G: RandomSource = SimRng, C: Clock = SystemClock> {
    config: SimConfig,
    rng:    G,
    clock:  C,
}

impl SimulatorBuilder<SimRng, SystemClock> {
    /// Start from `config`, with a `SimRng` seeded from `config.seed`.
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SimRng::new(seed),
            None       => SimRng::from_entropy(),
        };
        Self { config, rng, clock: SystemClock }
    }
}

impl<C: Clock> SimulatorBuilder<SimRng, C> {
    /// Reseed the default RNG for a reproducible trajectory.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self.rng = SimRng::new(seed);
        self
    }
}

impl<G: RandomSource, C: Clock> SimulatorBuilder<G, C> {
    pub fn origin(mut self, origin: GeoPoint) -> Self {
        self.config.origin = origin;
        self
    }

    pub fn interval(mut self, interval: UpdateInterval) -> Self {
        self.config.update_interval = interval;
        self
    }

    pub fn altitude_baseline(mut self, metres: f64) -> Self {
        self.config.altitude_baseline_m = metres;
        self
    }

    /// Substitute the random source (e.g. a fixed sequence in tests).
    pub fn rng<G2: RandomSource>(self, rng: G2) -> SimulatorBuilder<G2, C> {
        SimulatorBuilder { config: self.config, rng, clock: self.clock }
    }

    /// Substitute the timestamp source.
    pub fn clock<C2: Clock>(self, clock: C2) -> SimulatorBuilder<G, C2> {
        SimulatorBuilder { config: self.config, rng: self.rng, clock }
    }

    /// The configuration as it stands.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Validate the configuration and seed the simulator.
    pub fn build(self) -> SimResult<MotionSimulator<G, C>> {
        MotionSimulator::new(&self.config, self.rng, self.clock)
    }
}
