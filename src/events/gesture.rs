//! Drag gesture recognition.
//!
//! Terminal mouse reports are coarse (whole rows, irregular timing), so the
//! recognizer keeps a short sliding window of samples and estimates release
//! velocity from the distance covered across that window rather than from the
//! last two events. Pointer motion is converted to scroll distance here:
//! moving the pointer up scrolls toward later items, so each move contributes
//! `previous_row - current_row`.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How far back the velocity estimate looks.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Time spans shorter than this produce no meaningful rate.
const MIN_SPAN: Duration = Duration::from_millis(20);

/// One in-progress drag on one column.
#[derive(Debug)]
pub struct DragRecognizer {
    column: usize,
    last_row: u16,
    /// Cumulative scroll distance since the press, in rows.
    travelled: f32,
    /// (timestamp, cumulative distance) samples inside the window.
    samples: VecDeque<(Instant, f32)>,
}

impl DragRecognizer {
    pub fn begin(column: usize, row: u16, now: Instant) -> Self {
        let mut samples = VecDeque::new();
        samples.push_back((now, 0.0));
        Self {
            column,
            last_row: row,
            travelled: 0.0,
            samples,
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Feed a pointer position; returns the scroll-distance delta to hand to
    /// the engine.
    pub fn move_to(&mut self, row: u16, now: Instant) -> f32 {
        let delta = f32::from(self.last_row) - f32::from(row);
        self.last_row = row;
        self.travelled += delta;
        self.samples.push_back((now, self.travelled));
        while let Some(&(t, _)) = self.samples.front() {
            if now.saturating_duration_since(t) > VELOCITY_WINDOW && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
        delta
    }

    /// Release velocity in rows/s over the sample window. A press-and-hold
    /// release reports zero.
    pub fn velocity(&self, now: Instant) -> f32 {
        let Some(&(oldest_at, oldest_travelled)) = self.samples.front() else {
            return 0.0;
        };
        let span = now.saturating_duration_since(oldest_at);
        if span < MIN_SPAN {
            return 0.0;
        }
        (self.travelled - oldest_travelled) / span.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn test_upward_motion_scrolls_forward() {
        let start = Instant::now();
        let mut drag = DragRecognizer::begin(0, 10, start);
        assert_eq!(drag.move_to(8, at(start, 10)), 2.0);
        assert_eq!(drag.move_to(9, at(start, 20)), -1.0);
    }

    #[test]
    fn test_steady_drag_velocity() {
        let start = Instant::now();
        let mut drag = DragRecognizer::begin(0, 40, start);
        // One row up every 20 ms: 50 rows/s.
        for i in 1..=5u16 {
            drag.move_to(40 - i, at(start, u64::from(i) * 20));
        }
        let v = drag.velocity(at(start, 100));
        assert!((v - 50.0).abs() < 1.0, "expected ~50 rows/s, got {v}");
    }

    #[test]
    fn test_hold_before_release_reads_as_stopped() {
        let start = Instant::now();
        let mut drag = DragRecognizer::begin(0, 40, start);
        for i in 1..=5u16 {
            drag.move_to(40 - i, at(start, u64::from(i) * 10));
        }
        // The pointer then rests for a while before letting go.
        let v = drag.velocity(at(start, 800));
        assert!(v.abs() < 8.0, "stale motion should decay out, got {v}");
    }

    #[test]
    fn test_instant_release_has_no_velocity() {
        let start = Instant::now();
        let drag = DragRecognizer::begin(0, 12, start);
        assert_eq!(drag.velocity(at(start, 5)), 0.0);
    }

    #[test]
    fn test_window_prunes_old_samples() {
        let start = Instant::now();
        let mut drag = DragRecognizer::begin(0, 100, start);
        // Slow prelude, then a fast finish; only the finish should count.
        drag.move_to(99, at(start, 300));
        for i in 0..5u16 {
            drag.move_to(98 - i * 2, at(start, 400 + u64::from(i) * 20));
        }
        let v = drag.velocity(at(start, 480));
        assert!(v > 50.0, "window should isolate the fast tail, got {v}");
    }
}
