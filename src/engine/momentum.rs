//! Fling physics.
//!
//! After a drag releases with enough velocity the offset keeps moving under
//! exponential decay: `v(t) = v0 * e^(-rate * t)`, so the position has the
//! closed form `x(t) = x0 + v0 * (1 - e^(-rate * t)) / rate`. Sampling is a
//! pure function of the start state and a timestamp, which keeps fling tests
//! exact and sleep-free.

use std::time::Instant;

/// Velocity decay rate in 1/s. Time constant ~240 ms, which reads like a
/// stock platform fling on short lists.
pub const DECAY_RATE: f32 = 4.2;

/// Residual speed (rows/s) below which a fling counts as stopped.
pub const STOP_VELOCITY: f32 = 6.0;

/// One in-flight fling. Created on release, discarded on settle or on an
/// interrupting drag.
#[derive(Debug, Clone)]
pub struct Trajectory {
    start_offset: f32,
    initial_velocity: f32,
    started_at: Instant,
    generation: u64,
}

impl Trajectory {
    /// Cancellation token of the controller run that started this fling.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Stateless fling sampler parameterized by its decay constants.
#[derive(Debug, Clone)]
pub struct MomentumSimulator {
    decay_rate: f32,
    stop_velocity: f32,
}

impl Default for MomentumSimulator {
    fn default() -> Self {
        Self::new(DECAY_RATE, STOP_VELOCITY)
    }
}

impl MomentumSimulator {
    pub fn new(decay_rate: f32, stop_velocity: f32) -> Self {
        Self {
            decay_rate,
            stop_velocity,
        }
    }

    /// Start a fling from `start_offset` with `initial_velocity` in rows/s.
    pub fn begin(
        &self,
        initial_velocity: f32,
        start_offset: f32,
        now: Instant,
        generation: u64,
    ) -> Trajectory {
        Trajectory {
            start_offset,
            initial_velocity,
            started_at: now,
            generation,
        }
    }

    /// Unclamped position at `now`, plus whether the residual velocity has
    /// fallen below the stop threshold. Clamping against the scroll range is
    /// the caller's job; only it can tell a pinned position from a moving one.
    pub fn sample(&self, trajectory: &Trajectory, now: Instant) -> (f32, bool) {
        let elapsed = now
            .saturating_duration_since(trajectory.started_at)
            .as_secs_f32();
        let decay = (-self.decay_rate * elapsed).exp();
        let velocity = trajectory.initial_velocity * decay;
        let position =
            trajectory.start_offset + trajectory.initial_velocity * (1.0 - decay) / self.decay_rate;
        (position, velocity.abs() < self.stop_velocity)
    }
}
