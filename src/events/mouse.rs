//! Mouse event handling.
//!
//! A left press inside a column starts a drag; motion and release while the
//! button is held feed the recognizer regardless of where the pointer wanders
//! (a drag that leaves the column keeps scrolling it, matching touch
//! semantics). The scroll wheel steps whichever column it hovers.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match app.column_at(x, y) {
            Some(column) => Action::DragStart { column, row: y },
            None => Action::None,
        },
        MouseEventKind::Drag(MouseButton::Left) if app.drag_active() => Action::DragMove { row: y },
        MouseEventKind::Up(MouseButton::Left) if app.drag_active() => Action::DragEnd { row: y },
        MouseEventKind::ScrollUp => match app.column_at(x, y) {
            Some(column) => Action::Step { column, delta: -1 },
            None => Action::None,
        },
        MouseEventKind::ScrollDown => match app.column_at(x, y) {
            Some(column) => Action::Step { column, delta: 1 },
            None => Action::None,
        },
        _ => Action::None,
    }
}
