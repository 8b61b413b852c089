//! Snap-to-item animation.
//!
//! Once free motion stops the offset rarely sits exactly on an item boundary;
//! a short fixed-duration ease-out closes the remaining gap and lands the
//! wheel on its target slot.

use std::time::{Duration, Instant};

/// How long the settle animation runs.
pub const SNAP_DURATION: Duration = Duration::from_millis(200);

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// One in-flight settle animation onto `target_index`.
#[derive(Debug, Clone)]
pub struct SnapAnimation {
    from: f32,
    to: f32,
    target_index: usize,
    started_at: Instant,
    duration: Duration,
    generation: u64,
}

impl SnapAnimation {
    pub fn begin(
        target_index: usize,
        from_offset: f32,
        to_offset: f32,
        duration: Duration,
        now: Instant,
        generation: u64,
    ) -> Self {
        Self {
            from: from_offset,
            to: to_offset,
            target_index,
            started_at: now,
            duration,
            generation,
        }
    }

    /// Index the wheel will land on; the commit notification carries it.
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Cancellation token of the controller run that started this snap.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Eased offset at `now`, plus whether the animation has run out.
    /// The final sample is exactly the target offset.
    pub fn sample(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.from + (self.to - self.from) * ease_out_cubic(t), false)
    }
}
