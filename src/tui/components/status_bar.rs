//! Status and hotkey lines at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::*;

/// Committed selections, plus the live value of a column in motion.
pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled("selected ", Style::new().fg(TEXT_DIM))];

    for (i, column) in app.columns.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::new().fg(TEXT_DIM)));
        }
        spans.push(Span::styled(
            column.committed_label(),
            Style::new().fg(TEXT_WHITE),
        ));

        // While the wheel moves, show where it currently points.
        if column.controller.is_animating() || column.controller.is_dragging() {
            spans.push(Span::styled(
                format!(" ({})", column.label(column.live_index)),
                Style::new().fg(ACCENT),
            ));
        }
    }

    if let Some(change) = &app.last_change {
        spans.push(Span::styled(
            format!("   {}", change),
            Style::new().fg(TEXT_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Hotkey help line.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let key = Style::new().fg(TEXT_WHITE);
    let label = Style::new().fg(TEXT_DIM);

    let line = Line::from(vec![
        Span::styled("[drag]", key),
        Span::styled(" spin · ", label),
        Span::styled("[↑/↓]", key),
        Span::styled(" step · ", label),
        Span::styled("[←/→]", key),
        Span::styled(" focus · ", label),
        Span::styled("[Home/End]", key),
        Span::styled(" ends · ", label),
        Span::styled("[r]", key),
        Span::styled(" reload · ", label),
        Span::styled("[q]", key),
        Span::styled(" quit", label),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
