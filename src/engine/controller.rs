//! Wheel interaction state machine.
//!
//! One controller per column. Raw gesture primitives and animation ticks come
//! in; clamped offsets, haptic pulses, and selection notifications come out.
//! The controller is the only component that sequences the others:
//!
//! ```text
//! Idle --drag_start--> Dragging --drag_end(v)--> Flinging --(rest)--> Snapping --> Idle
//!                                \------------------(slow release)---/
//! ```
//!
//! Outputs are returned as [`WheelEvent`] values rather than pushed through
//! callbacks; the host decides what a pulse or a notification means.

use std::time::{Duration, Instant};

use super::emitter::{ChangeEmitter, MIN_EMIT_INTERVAL};
use super::haptics::HapticTrigger;
use super::momentum::{DECAY_RATE, MomentumSimulator, STOP_VELOCITY, Trajectory};
use super::position::ScrollPositionModel;
use super::snap::{SNAP_DURATION, SnapAnimation};
use super::visual::{RenderHint, render_hints};

/// Outward effect produced by a state transition.
///
/// `Changing` is throttled and live; `Changed` is the committed selection and
/// fires exactly once per settled change; `Haptic` fires once per
/// centered-index boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    Haptic,
    Changing(usize),
    Changed(usize),
}

/// Interaction constants, overridable from config.
#[derive(Debug, Clone)]
pub struct Tuning {
    /// Release speed (rows/s) above which a drag becomes a fling.
    pub fling_threshold: f32,
    /// Fling velocity decay rate in 1/s.
    pub decay_rate: f32,
    /// Residual fling speed (rows/s) treated as stopped.
    pub stop_velocity: f32,
    /// Throttle window for "changing" notifications.
    pub min_emit_interval: Duration,
    /// Settle animation length.
    pub snap_duration: Duration,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            fling_threshold: 10.0,
            decay_rate: DECAY_RATE,
            stop_velocity: STOP_VELOCITY,
            min_emit_interval: MIN_EMIT_INTERVAL,
            snap_duration: SNAP_DURATION,
        }
    }
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Dragging,
    Flinging(Trajectory),
    Snapping(SnapAnimation),
}

/// The interaction engine for one wheel column.
#[derive(Debug)]
pub struct WheelController {
    position: ScrollPositionModel,
    momentum: MomentumSimulator,
    trigger: HapticTrigger,
    emitter: ChangeEmitter,
    phase: Phase,
    /// Bumped on every cancellation point; trajectories and snap animations
    /// carry the value they were started under, so a tick that outlives its
    /// motion is absorbed as a no-op.
    generation: u64,
    /// Consecutive fling samples clamped at a range bound.
    pinned_samples: u8,
    fling_threshold: f32,
    snap_duration: Duration,
}

impl WheelController {
    pub fn new(item_count: usize, item_height: f32, initial_index: usize, tuning: &Tuning) -> Self {
        let mut position = ScrollPositionModel::new(item_count, item_height);
        let initial = match item_count {
            0 => 0,
            n => initial_index.min(n - 1),
        };
        position.set_offset(position.offset_of(initial));
        Self {
            position,
            momentum: MomentumSimulator::new(tuning.decay_rate, tuning.stop_velocity),
            trigger: HapticTrigger::new(initial),
            emitter: ChangeEmitter::new(initial, tuning.min_emit_interval),
            phase: Phase::Idle,
            generation: 0,
            pinned_samples: 0,
            fling_threshold: tuning.fling_threshold,
            snap_duration: tuning.snap_duration,
        }
    }

    pub fn offset(&self) -> f32 {
        self.position.offset()
    }

    pub fn item_count(&self) -> usize {
        self.position.item_count()
    }

    pub fn item_height(&self) -> f32 {
        self.position.item_height()
    }

    /// Item currently nearest the selection line.
    pub fn centered_index(&self) -> Option<usize> {
        self.position.centered_index()
    }

    /// Last settled selection; the value a consumer should trust.
    pub fn committed_index(&self) -> usize {
        self.emitter.committed_index()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging)
    }

    /// True while a fling or snap needs animation ticks.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Flinging(_) | Phase::Snapping(_))
    }

    /// Visual state for the items around the center, for one frame.
    pub fn render_hints(&self, visible_items: usize) -> Vec<RenderHint> {
        render_hints(
            self.position.offset(),
            self.position.item_count(),
            self.position.item_height(),
            visible_items,
        )
    }

    /// A finger (or pointer) went down. Cancels any in-flight motion without
    /// committing it.
    pub fn drag_start(&mut self) {
        self.generation += 1;
        self.pinned_samples = 0;
        self.phase = Phase::Dragging;
    }

    /// Pointer moved while dragging. `delta` is the scroll-distance
    /// contribution (pointer moving up scrolls toward later items, so the
    /// recognizer hands `previous_row - current_row`).
    pub fn drag_move(&mut self, delta: f32, now: Instant) -> Vec<WheelEvent> {
        if !matches!(self.phase, Phase::Dragging) {
            return Vec::new();
        }
        let next = self.position.offset() + delta;
        self.position.set_offset(next);
        self.live_effects(now)
    }

    /// Pointer released with an estimated velocity in rows/s. Fast releases
    /// fling; slow ones settle straight onto the nearest item.
    pub fn drag_end(&mut self, velocity: f32, now: Instant) -> Vec<WheelEvent> {
        if !matches!(self.phase, Phase::Dragging) {
            return Vec::new();
        }
        if self.position.item_count() == 0 {
            self.phase = Phase::Idle;
            return Vec::new();
        }
        if velocity.abs() > self.fling_threshold {
            self.pinned_samples = 0;
            self.phase = Phase::Flinging(self.momentum.begin(
                velocity,
                self.position.offset(),
                now,
                self.generation,
            ));
        } else {
            self.snap_to_nearest(now);
        }
        Vec::new()
    }

    /// Per-frame driver while flinging or snapping. Ticks in any other phase,
    /// or ticks carrying a stale generation, are absorbed.
    pub fn tick(&mut self, now: Instant) -> Vec<WheelEvent> {
        match self.phase.clone() {
            Phase::Flinging(trajectory) => {
                if trajectory.generation() != self.generation {
                    return Vec::new();
                }
                let (raw, stopped) = self.momentum.sample(&trajectory, now);
                let clamped = self.position.set_offset(raw);
                if raw != clamped {
                    self.pinned_samples += 1;
                } else {
                    self.pinned_samples = 0;
                }
                let events = self.live_effects(now);
                if stopped || self.pinned_samples > 1 {
                    self.snap_to_nearest(now);
                }
                events
            }
            Phase::Snapping(animation) => {
                if animation.generation() != self.generation {
                    return Vec::new();
                }
                let (offset, finished) = animation.sample(now);
                self.position.set_offset(offset);
                let mut events = self.live_effects(now);
                if finished {
                    self.phase = Phase::Idle;
                    if self.emitter.on_commit(animation.target_index()) {
                        events.push(WheelEvent::Changed(animation.target_index()));
                    }
                }
                events
            }
            Phase::Idle | Phase::Dragging => Vec::new(),
        }
    }

    /// Discrete user-driven step (keyboard, scroll wheel): snap `delta` items
    /// from the current target. Commits like any other settle. Ignored while
    /// a drag or fling owns the offset.
    pub fn step(&mut self, delta: i32, now: Instant) -> Vec<WheelEvent> {
        let count = self.position.item_count();
        if count == 0 {
            return Vec::new();
        }
        let base = match &self.phase {
            Phase::Idle => match self.position.centered_index() {
                Some(index) => index,
                None => return Vec::new(),
            },
            Phase::Snapping(animation) => animation.target_index(),
            Phase::Dragging | Phase::Flinging(_) => return Vec::new(),
        };
        let target = (base as i64 + i64::from(delta)).clamp(0, count as i64 - 1) as usize;
        self.snap_to(target, now);
        Vec::new()
    }

    /// Programmatic selection: jump without animation and without notifying.
    /// Out-of-range indices are ignored outright, as is a call while the user
    /// owns the offset.
    pub fn set_selected_index(&mut self, index: usize) {
        if matches!(self.phase, Phase::Dragging | Phase::Flinging(_)) {
            return;
        }
        if index >= self.position.item_count() {
            return;
        }
        self.generation += 1;
        self.phase = Phase::Idle;
        let target = self.position.offset_of(index);
        self.position.set_offset(target);
        self.trigger.sync(index);
        self.emitter.sync(index);
    }

    /// Replace the column geometry. The offset is re-clamped, not reset; any
    /// in-flight motion is dropped without a commit; nothing is notified.
    pub fn configure(&mut self, item_count: usize, item_height: f32) {
        self.generation += 1;
        self.pinned_samples = 0;
        self.phase = Phase::Idle;
        self.position.reconfigure(item_count, item_height);
        if item_count > 0 {
            self.emitter.sync(self.emitter.committed_index().min(item_count - 1));
            if let Some(centered) = self.position.centered_index() {
                self.trigger.sync(centered);
            }
        }
    }

    /// Haptic + throttled "changing" for the current position sample.
    fn live_effects(&mut self, now: Instant) -> Vec<WheelEvent> {
        let mut events = Vec::new();
        let Some(index) = self.position.centered_index() else {
            return events;
        };
        if self.trigger.on_index_sample(index) {
            events.push(WheelEvent::Haptic);
        }
        if self.emitter.on_live_sample(now) {
            events.push(WheelEvent::Changing(index));
        }
        events
    }

    fn snap_to_nearest(&mut self, now: Instant) {
        match self.position.centered_index() {
            Some(index) => self.snap_to(index, now),
            None => self.phase = Phase::Idle,
        }
    }

    fn snap_to(&mut self, target_index: usize, now: Instant) {
        self.phase = Phase::Snapping(SnapAnimation::begin(
            target_index,
            self.position.offset(),
            self.position.offset_of(target_index),
            self.snap_duration,
            now,
            self.generation,
        ));
    }
}
