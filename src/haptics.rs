//! Tactile feedback as an injected capability.
//!
//! The engine reports boundary crossings as events; what a "pulse" physically
//! is belongs to the host. In a terminal the closest analogue is the bell.
//! The sink is handed to the app at construction, never held as process-wide
//! state, so tests can count pulses and headless runs stay silent.

use std::io::{Write, stdout};

/// Receiver for haptic pulses.
pub trait HapticSink {
    /// Fire one pulse. Must be cheap; called from the render loop.
    fn pulse(&mut self);
}

/// Rings the terminal bell (BEL) once per pulse.
pub struct TerminalBell;

impl HapticSink for TerminalBell {
    fn pulse(&mut self) {
        let mut out = stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

/// Swallows pulses. Used when haptics are disabled in config.
pub struct Silent;

impl HapticSink for Silent {
    fn pulse(&mut self) {}
}

/// Pick a sink for the configured haptics toggle.
pub fn sink_for(enabled: bool) -> Box<dyn HapticSink> {
    if enabled {
        Box::new(TerminalBell)
    } else {
        Box::new(Silent)
    }
}
