//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::Action;

/// Map a key press to an action against the focused column.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        KeyCode::Up | KeyCode::Char('k') => Action::Step {
            column: app.focused,
            delta: -1,
        },
        KeyCode::Down | KeyCode::Char('j') => Action::Step {
            column: app.focused,
            delta: 1,
        },

        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::FocusNext,

        KeyCode::Home | KeyCode::Char('g') => Action::JumpFirst,
        KeyCode::End | KeyCode::Char('G') => Action::JumpLast,

        KeyCode::Char('r') => Action::ReloadConfig,

        _ => Action::None,
    }
}
