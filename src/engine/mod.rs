//! The wheel interaction engine.
//!
//! Headless and synchronous: gesture primitives and timestamps in, clamped
//! positions and [`WheelEvent`]s out. The host (terminal UI, tests, anything)
//! supplies input sampling and decides what the events mean; the engine never
//! touches a terminal, a clock, or a runtime.

mod controller;
mod emitter;
mod haptics;
mod momentum;
mod position;
mod snap;
mod visual;

pub use controller::{Tuning, WheelController, WheelEvent};
pub use visual::RenderHint;
