//! Selection notification gating.
//!
//! Live motion samples arrive every drag move and every animation frame, far
//! faster than a consumer wants to hear about them. "changing" notifications
//! are therefore throttled to one per interval, while the final "changed"
//! commit is never throttled: it fires exactly once per settled selection
//! change and is the authoritative value.

use std::time::{Duration, Instant};

/// Minimum spacing between two "changing" notifications.
pub const MIN_EMIT_INTERVAL: Duration = Duration::from_millis(50);

/// Throttles live notifications and tracks the committed selection.
#[derive(Debug, Clone)]
pub struct ChangeEmitter {
    min_interval: Duration,
    last_emit: Option<Instant>,
    committed: usize,
}

impl ChangeEmitter {
    pub fn new(initial_index: usize, min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_emit: None,
            committed: initial_index,
        }
    }

    /// Last index a "changed" notification fired for.
    pub fn committed_index(&self) -> usize {
        self.committed
    }

    /// Gate a live sample. Returns true when a "changing" notification should
    /// go out now. The first sample of a gesture always passes.
    pub fn on_live_sample(&mut self, now: Instant) -> bool {
        match self.last_emit {
            Some(last) if now.saturating_duration_since(last) < self.min_interval => false,
            _ => {
                self.last_emit = Some(now);
                true
            }
        }
    }

    /// Record a settled selection. Returns true when it differs from the
    /// committed one, i.e. exactly when a "changed" notification should fire.
    pub fn on_commit(&mut self, index: usize) -> bool {
        if index == self.committed {
            return false;
        }
        self.committed = index;
        true
    }

    /// Align to a programmatic selection without notifying.
    pub fn sync(&mut self, index: usize) {
        self.committed = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_always_emits() {
        let mut emitter = ChangeEmitter::new(0, MIN_EMIT_INTERVAL);
        assert!(emitter.on_live_sample(Instant::now()));
    }

    #[test]
    fn test_live_samples_throttled_to_interval() {
        let mut emitter = ChangeEmitter::new(0, Duration::from_millis(50));
        let start = Instant::now();

        assert!(emitter.on_live_sample(start));
        assert!(!emitter.on_live_sample(start + Duration::from_millis(10)));
        assert!(!emitter.on_live_sample(start + Duration::from_millis(49)));
        assert!(emitter.on_live_sample(start + Duration::from_millis(50)));
        assert!(!emitter.on_live_sample(start + Duration::from_millis(80)));
        assert!(emitter.on_live_sample(start + Duration::from_millis(101)));
    }

    #[test]
    fn test_emits_never_closer_than_interval() {
        let mut emitter = ChangeEmitter::new(0, Duration::from_millis(50));
        let start = Instant::now();
        let mut last_emit: Option<u64> = None;

        for ms in (0..500).step_by(7) {
            if emitter.on_live_sample(start + Duration::from_millis(ms)) {
                if let Some(prev) = last_emit {
                    assert!(ms - prev >= 50, "emits {prev}ms and {ms}ms too close");
                }
                last_emit = Some(ms);
            }
        }
        assert!(last_emit.is_some());
    }

    #[test]
    fn test_commit_fires_once_per_new_index() {
        let mut emitter = ChangeEmitter::new(0, MIN_EMIT_INTERVAL);
        assert!(!emitter.on_commit(0));
        assert!(emitter.on_commit(2));
        assert_eq!(emitter.committed_index(), 2);
        assert!(!emitter.on_commit(2));
        assert!(emitter.on_commit(0));
    }

    #[test]
    fn test_sync_suppresses_commit() {
        let mut emitter = ChangeEmitter::new(0, MIN_EMIT_INTERVAL);
        emitter.sync(4);
        assert!(!emitter.on_commit(4));
        assert_eq!(emitter.committed_index(), 4);
    }
}
