//! Page heading

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Heading height in rows (text + spacing)
pub const HEADING_HEIGHT: u16 = 2;

/// Draw "Let's connect." with the accent on the last word
pub fn draw(frame: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled("Let's ", bold),
        Span::styled("connect.", bold.fg(Color::Cyan)),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
