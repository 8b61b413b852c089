//! Application state: the wheel columns, input focus, and action handling.

use std::time::Instant;

use crate::config::Config;
use crate::engine::{Tuning, WheelController, WheelEvent};
use crate::events::{Action, DragRecognizer};
use crate::haptics::HapticSink;
use crate::log;

/// A rectangular screen region used for mouse hit testing.
///
/// Rebuilt from the real layout on every render, so hit tests always match
/// what is on screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// One wheel column: its items plus the interaction engine driving it.
pub struct WheelColumn {
    pub name: String,
    pub items: Vec<String>,
    pub unit: Option<String>,
    /// Relative width against sibling columns
    pub width: u16,
    pub controller: WheelController,
    /// Item last reported by a live "changing" notification
    pub live_index: usize,
}

impl WheelColumn {
    /// Value text for an index, or a dash for an empty column.
    pub fn label(&self, index: usize) -> &str {
        self.items.get(index).map_or("-", String::as_str)
    }

    /// The committed value with its unit, e.g. `30 min`.
    pub fn committed_label(&self) -> String {
        let value = self.label(self.controller.committed_index());
        match &self.unit {
            Some(unit) => format!("{} {}", value, unit),
            None => value.to_string(),
        }
    }
}

/// Top-level mutable state.
pub struct App {
    pub columns: Vec<WheelColumn>,
    pub focused: usize,
    /// Items drawn to each side of the center line
    pub visible_items: usize,
    /// Column screen regions, registered during render
    pub column_areas: Vec<Region>,
    /// Most recent committed change, for the status line
    pub last_change: Option<String>,
    pub should_quit: bool,
    drag: Option<DragRecognizer>,
    haptics: Box<dyn HapticSink>,
}

impl App {
    pub fn new(config: &Config, haptics: Box<dyn HapticSink>) -> Self {
        let tuning = config.tuning();
        let columns = config
            .columns
            .iter()
            .map(|c| Self::build_column(c.clone(), config.item_height, &tuning))
            .collect();

        Self {
            columns,
            focused: 0,
            visible_items: config.visible_items,
            column_areas: Vec::new(),
            last_change: None,
            should_quit: false,
            drag: None,
            haptics,
        }
    }

    fn build_column(
        config: crate::config::ColumnConfig,
        item_height: f32,
        tuning: &Tuning,
    ) -> WheelColumn {
        let controller =
            WheelController::new(config.values.len(), item_height, config.selected, tuning);
        let live_index = controller.committed_index();
        WheelColumn {
            name: config.name,
            items: config.values,
            unit: config.unit,
            width: config.width,
            controller,
            live_index,
        }
    }

    /// Column under a screen position, if any.
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        self.column_areas
            .iter()
            .position(|region| region.contains(x, y))
    }

    pub fn drag_active(&self) -> bool {
        self.drag.is_some()
    }

    /// True while any column needs animation ticks.
    pub fn is_animating(&self) -> bool {
        self.columns.iter().any(|c| c.controller.is_animating())
    }

    /// Apply one user action.
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::FocusNext => {
                if !self.columns.is_empty() {
                    self.focused = (self.focused + 1) % self.columns.len();
                }
            }
            Action::FocusPrev => {
                if !self.columns.is_empty() {
                    self.focused = self
                        .focused
                        .checked_sub(1)
                        .unwrap_or(self.columns.len() - 1);
                }
            }

            Action::Step { column, delta } => {
                if column < self.columns.len() {
                    self.focused = column;
                    let events = self.columns[column].controller.step(delta, now);
                    self.dispatch(column, events);
                }
            }
            Action::JumpFirst => self.jump(i32::MIN, now),
            Action::JumpLast => self.jump(i32::MAX, now),

            Action::DragStart { column, row } => {
                if column < self.columns.len() {
                    self.focused = column;
                    self.columns[column].controller.drag_start();
                    self.drag = Some(DragRecognizer::begin(column, row, now));
                }
            }
            Action::DragMove { row } => {
                if let Some(drag) = self.drag.as_mut() {
                    let delta = drag.move_to(row, now);
                    let column = drag.column();
                    let events = self.columns[column].controller.drag_move(delta, now);
                    self.dispatch(column, events);
                }
            }
            Action::DragEnd { row } => {
                if let Some(mut drag) = self.drag.take() {
                    drag.move_to(row, now);
                    let velocity = drag.velocity(now);
                    let column = drag.column();
                    let events = self.columns[column].controller.drag_end(velocity, now);
                    self.dispatch(column, events);
                }
            }

            // Resolved by the event loop, which owns the config path.
            Action::ReloadConfig => {}

            Action::None => {}
        }
    }

    /// Apply a freshly loaded config to the running picker.
    ///
    /// Existing columns keep their scroll and selection state (re-clamped
    /// against the new item list, never reset); only columns that are new in
    /// the config start at their configured index. Any in-flight motion on a
    /// reconfigured column is dropped without a commit.
    pub fn reconfigure(&mut self, config: &Config) {
        let tuning = config.tuning();
        self.visible_items = config.visible_items;
        self.drag = None;

        self.columns.truncate(config.columns.len());
        for (index, column_config) in config.columns.iter().enumerate() {
            match self.columns.get_mut(index) {
                Some(column) => {
                    column
                        .controller
                        .configure(column_config.values.len(), config.item_height);
                    column.name = column_config.name.clone();
                    column.items = column_config.values.clone();
                    column.unit = column_config.unit.clone();
                    column.width = column_config.width;
                    column.live_index = column.controller.committed_index();
                }
                None => self.columns.push(Self::build_column(
                    column_config.clone(),
                    config.item_height,
                    &tuning,
                )),
            }
        }

        if !self.columns.is_empty() {
            self.focused = self.focused.min(self.columns.len() - 1);
        } else {
            self.focused = 0;
        }
        log::log("Config reloaded");
    }

    /// Advance every animating column by one frame.
    pub fn tick(&mut self, now: Instant) {
        for index in 0..self.columns.len() {
            if self.columns[index].controller.is_animating() {
                let events = self.columns[index].controller.tick(now);
                self.dispatch(index, events);
            }
        }
    }

    fn jump(&mut self, delta: i32, now: Instant) {
        if let Some(column) = self.columns.get_mut(self.focused) {
            let events = column.controller.step(delta, now);
            let focused = self.focused;
            self.dispatch(focused, events);
        }
    }

    /// Route engine events to their host effects.
    fn dispatch(&mut self, column_index: usize, events: Vec<WheelEvent>) {
        for event in events {
            match event {
                WheelEvent::Haptic => self.haptics.pulse(),
                WheelEvent::Changing(index) => {
                    self.columns[column_index].live_index = index;
                }
                WheelEvent::Changed(index) => {
                    let column = &mut self.columns[column_index];
                    column.live_index = index;
                    let line = format!("{} → {}", column.name, column.committed_label());
                    log::log_event(&line);
                    self.last_change = Some(line);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColumnConfig;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    struct CountingSink(Rc<Cell<usize>>);

    impl HapticSink for CountingSink {
        fn pulse(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn test_config() -> Config {
        Config {
            item_height: 2.0,
            columns: vec![
                ColumnConfig {
                    name: "hours".to_string(),
                    values: (0..24).map(|h| h.to_string()).collect(),
                    unit: Some("h".to_string()),
                    selected: 0,
                    width: 1,
                },
                ColumnConfig {
                    name: "minutes".to_string(),
                    values: (0..60).map(|m| format!("{:02}", m)).collect(),
                    unit: None,
                    selected: 30,
                    width: 1,
                },
            ],
            ..Config::default()
        }
    }

    fn test_app() -> (App, Rc<Cell<usize>>) {
        let pulses = Rc::new(Cell::new(0));
        let app = App::new(
            &test_config(),
            Box::new(CountingSink(Rc::clone(&pulses))),
        );
        (app, pulses)
    }

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    fn settle(app: &mut App, start: Instant) {
        let mut ms = 0;
        while app.is_animating() {
            ms += 16;
            app.tick(at(start, ms));
            assert!(ms < 60_000);
        }
    }

    #[test]
    fn test_initial_selection_from_config() {
        let (app, _) = test_app();
        assert_eq!(app.columns[0].controller.committed_index(), 0);
        assert_eq!(app.columns[1].controller.committed_index(), 30);
        assert_eq!(app.columns[1].committed_label(), "30");
        assert_eq!(app.columns[0].committed_label(), "0 h");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let (mut app, _) = test_app();
        let now = Instant::now();
        app.apply(Action::FocusPrev, now);
        assert_eq!(app.focused, 1);
        app.apply(Action::FocusNext, now);
        assert_eq!(app.focused, 0);
    }

    #[test]
    fn test_drag_gesture_commits_and_pulses() {
        let (mut app, pulses) = test_app();
        let start = Instant::now();
        app.column_areas = vec![Region::new(0, 0, 20, 12), Region::new(20, 0, 20, 12)];

        app.apply(Action::DragStart { column: 0, row: 10 }, start);
        assert!(app.drag_active());
        assert_eq!(app.focused, 0);

        // Two rows up = one item at item_height 2.
        app.apply(Action::DragMove { row: 8 }, at(start, 40));
        assert_eq!(pulses.get(), 1);
        assert_eq!(app.columns[0].live_index, 1);

        // Rest, then release: no fling, snap commits on item 1.
        app.apply(Action::DragEnd { row: 8 }, at(start, 600));
        assert!(!app.drag_active());
        settle(&mut app, at(start, 600));

        assert_eq!(app.columns[0].controller.committed_index(), 1);
        assert_eq!(app.last_change.as_deref(), Some("hours → 1 h"));
    }

    #[test]
    fn test_step_action_focuses_and_commits() {
        let (mut app, _) = test_app();
        let start = Instant::now();
        app.apply(
            Action::Step {
                column: 1,
                delta: -1,
            },
            start,
        );
        assert_eq!(app.focused, 1);
        settle(&mut app, start);
        assert_eq!(app.columns[1].controller.committed_index(), 29);
        // The untouched column is unaffected.
        assert_eq!(app.columns[0].controller.committed_index(), 0);
    }

    #[test]
    fn test_jump_actions_clamp_to_ends() {
        let (mut app, _) = test_app();
        let start = Instant::now();
        app.apply(Action::JumpLast, start);
        settle(&mut app, start);
        assert_eq!(app.columns[0].controller.committed_index(), 23);

        app.apply(Action::JumpFirst, at(start, 1000));
        settle(&mut app, at(start, 1000));
        assert_eq!(app.columns[0].controller.committed_index(), 0);
    }

    #[test]
    fn test_stray_drag_events_are_ignored() {
        let (mut app, pulses) = test_app();
        let now = Instant::now();
        // Move/end without a press: nothing to do.
        app.apply(Action::DragMove { row: 3 }, now);
        app.apply(Action::DragEnd { row: 3 }, now);
        assert_eq!(pulses.get(), 0);
        assert!(!app.is_animating());
    }

    #[test]
    fn test_reconfigure_clamps_but_keeps_selection() {
        let (mut app, _) = test_app();
        let start = Instant::now();
        app.apply(Action::JumpLast, start);
        settle(&mut app, start);
        assert_eq!(app.columns[0].controller.committed_index(), 23);

        // Shrink the hours column: selection clamps, minutes untouched.
        let mut config = test_config();
        config.columns[0].values.truncate(10);
        app.reconfigure(&config);

        assert_eq!(app.columns[0].controller.committed_index(), 9);
        assert_eq!(app.columns[0].items.len(), 10);
        assert_eq!(app.columns[1].controller.committed_index(), 30);
    }

    #[test]
    fn test_reconfigure_to_empty_column_is_inert() {
        let (mut app, pulses) = test_app();
        let start = Instant::now();

        let mut config = test_config();
        config.columns[0].values.clear();
        app.reconfigure(&config);

        app.column_areas = vec![Region::new(0, 0, 20, 12), Region::new(20, 0, 20, 12)];
        app.apply(Action::DragStart { column: 0, row: 10 }, start);
        app.apply(Action::DragMove { row: 2 }, at(start, 30));
        app.apply(Action::DragEnd { row: 2 }, at(start, 60));
        settle(&mut app, at(start, 60));

        assert_eq!(pulses.get(), 0);
        assert_eq!(app.columns[0].controller.offset(), 0.0);
        assert!(app.last_change.is_none());
    }

    #[test]
    fn test_reconfigure_cancels_motion_without_commit() {
        let (mut app, _) = test_app();
        let start = Instant::now();
        app.apply(Action::Step { column: 0, delta: 3 }, start);
        assert!(app.is_animating());

        app.reconfigure(&test_config());
        assert!(!app.is_animating());
        // The interrupted snap never committed.
        assert_eq!(app.columns[0].controller.committed_index(), 0);
        assert!(app.last_change.is_none());
    }

    #[test]
    fn test_column_hit_testing() {
        let (mut app, _) = test_app();
        app.column_areas = vec![Region::new(0, 2, 20, 12), Region::new(20, 2, 20, 12)];
        assert_eq!(app.column_at(5, 4), Some(0));
        assert_eq!(app.column_at(25, 4), Some(1));
        assert_eq!(app.column_at(25, 1), None);
        assert_eq!(app.column_at(45, 4), None);
    }
}
