use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Region};
use crate::tui::components::{render_help, render_status, render_wheel};
use crate::tui::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main vertical layout: title, wheels, status, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Min(0),    // Wheel columns
        Constraint::Length(1), // Status
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_title(frame, main_layout[0]);

    // One region per column, split by relative width.
    let constraints: Vec<Constraint> = app
        .columns
        .iter()
        .map(|c| Constraint::Fill(c.width))
        .collect();
    let column_layout = Layout::horizontal(constraints).split(main_layout[1]);

    // Register hit-test regions for the mouse handler.
    app.column_areas = column_layout
        .iter()
        .map(|r| Region::new(r.x, r.y, r.width, r.height))
        .collect();

    for (i, column_area) in column_layout.iter().enumerate() {
        render_wheel(
            frame,
            *column_area,
            &app.columns[i],
            app.visible_items,
            i == app.focused,
        );
    }

    render_status(frame, main_layout[2], app);
    render_help(frame, main_layout[3]);
}

fn render_title(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from(vec![
        Span::styled(" spinwheel ", Style::new().fg(ACCENT).bold()),
        Span::styled("— wheel picker", Style::new().fg(TEXT_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
