//! Layout components (content column, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Maximum width of the content column
const MAX_CONTENT_WIDTH: u16 = 72;

/// Split the screen into a centered content column and the status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = chunks[0];
    let width = content.width.min(MAX_CONTENT_WIDTH);
    let column = Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    }
    .inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 1,
    });

    (column, chunks[1])
}

/// Move `area` down by `rows`, clipping it to `bounds`
pub fn shift_down(area: Rect, rows: u16, bounds: Rect) -> Rect {
    let y = area.y.saturating_add(rows).min(bounds.bottom());
    Rect {
        y,
        height: area.height.min(bounds.bottom() - y),
        ..area
    }
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.controller.is_submitting() {
        "Sending message...".to_string()
    } else {
        format!("Tab:next  Shift+Tab:prev  Enter/{SUBMIT_SHORTCUT}:send  Esc:quit")
    };

    let mut spans = vec![Span::styled(
        format!(" {hints} "),
        Style::default().fg(Color::White),
    )];

    if app.awaiting_second_ctrl_c() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Press Ctrl+C again to quit",
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
