//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field. Disabled fields are greyed out and show no cursor.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_enabled: bool,
) {
    let focused = is_active && is_enabled;

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if field.is_empty() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if is_enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if focused { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    // Cursor sits before the placeholder, after real text
    let content = if field.is_empty() {
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, cursor_style),
            Span::styled(field.display_value(), text_style),
        ]))
    } else if field.field.is_multiline() {
        let mut lines: Vec<Line> = field
            .as_text()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.as_text(), text_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
