//! One wheel column.
//!
//! Items are placed on absolute rows derived from the continuous offset, so
//! mid-drag positions render between slots. Opacity maps to the color tiers
//! in the theme; scale has no terminal analogue beyond weight, so the
//! centered item is bold and the far tier is additionally dimmed.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::WheelColumn;
use crate::engine::RenderHint;
use crate::tui::theme::*;

/// Render a wheel column inside `area`.
pub fn render_wheel(
    frame: &mut Frame,
    area: Rect,
    column: &WheelColumn,
    visible_items: usize,
    focused: bool,
) {
    let border_style = if focused {
        Style::new().fg(ACCENT)
    } else {
        Style::new().fg(BORDER_DIM)
    };
    let block = Block::default()
        .title(format!(" {} ", column.name))
        .title_style(border_style)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Selection band behind the centered slot.
    let item_height = column.controller.item_height();
    let band_height = (item_height.round() as u16).clamp(1, inner.height);
    let center_row = inner.y + inner.height / 2;
    let band_top = center_row
        .saturating_sub(band_height / 2)
        .max(inner.y)
        .min(inner.y + inner.height - 1);
    let band_height = band_height.min(inner.y + inner.height - band_top);
    let band = Rect::new(inner.x, band_top, inner.width, band_height);
    frame.render_widget(
        Block::default().style(Style::new().bg(SELECTION_BG)),
        band,
    );

    // Place each visible item on its row.
    let offset = column.controller.offset();
    let mut lines: Vec<Line> = vec![Line::raw(""); inner.height as usize];
    for hint in column.controller.render_hints(visible_items) {
        let rel = hint.index as f32 * item_height - offset;
        let row = (f32::from(center_row) + rel).round();
        if row < f32::from(inner.y) || row >= f32::from(inner.y + inner.height) {
            continue;
        }
        let local = (row as u16 - inner.y) as usize;
        lines[local] = item_line(column, &hint);
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

fn item_line(column: &WheelColumn, hint: &RenderHint) -> Line<'static> {
    let style = emphasis_style(hint);
    let value = column.label(hint.index).to_string();
    match &column.unit {
        Some(unit) => Line::from(vec![
            Span::styled(value, style),
            Span::raw(" "),
            Span::styled(unit.clone(), style.remove_modifier(Modifier::BOLD)),
        ]),
        None => Line::from(Span::styled(value, style)),
    }
}

fn emphasis_style(hint: &RenderHint) -> Style {
    if hint.opacity >= 1.0 {
        Style::new().fg(TEXT_FULL).add_modifier(Modifier::BOLD)
    } else if hint.opacity >= 0.4 {
        Style::new().fg(TEXT_MID)
    } else {
        Style::new().fg(TEXT_FAINT).add_modifier(Modifier::DIM)
    }
}
