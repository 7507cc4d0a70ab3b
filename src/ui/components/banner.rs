//! Status banner shown above the form

use crate::state::{StatusKind, StatusMessage};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Banner height in rows
pub const BANNER_HEIGHT: u16 = 3;

/// Render the status message, red for problems and green for success
pub fn render_status_banner(frame: &mut Frame, area: Rect, status: &StatusMessage) {
    let color = match status.kind {
        StatusKind::Error => Color::Red,
        StatusKind::Success => Color::Green,
    };

    let paragraph = Paragraph::new(status.text.as_str())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(paragraph, area);
}
