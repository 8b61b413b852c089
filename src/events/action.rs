//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; input handlers produce them, the App
//! consumes them.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,

    // === Focus ===
    /// Focus the next column (wraps)
    FocusNext,
    /// Focus the previous column (wraps)
    FocusPrev,

    // === Discrete selection ===
    /// Step a column by a signed number of items
    Step { column: usize, delta: i32 },
    /// Snap the focused column to its first item
    JumpFirst,
    /// Snap the focused column to its last item
    JumpLast,

    // === Drag gesture ===
    /// Pointer pressed inside a column
    DragStart { column: usize, row: u16 },
    /// Pointer moved while pressed
    DragMove { row: u16 },
    /// Pointer released
    DragEnd { row: u16 },

    /// Re-read the config file and apply it to the running picker
    ReloadConfig,

    /// No action to take
    None,
}
