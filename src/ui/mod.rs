//! UI module for rendering the TUI

mod components;
mod forms;
mod heading;
mod layout;

use crate::app::App;
use crate::state::RevealElement;
use components::{render_status_banner, BANNER_HEIGHT};
use heading::HEADING_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (column, status_bar) = layout::create_layout(frame.area());

    let status = app.controller.status_message();
    let banner_height = if status.is_some() { BANNER_HEIGHT + 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADING_HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Min(0),
        ])
        .split(column);

    if let Some(area) = revealed(app, RevealElement::Heading, chunks[0], column) {
        heading::draw(frame, area);
    }

    if let Some(status) = status {
        if let Some(area) = revealed(app, RevealElement::Status, chunks[1], column) {
            let area = Rect {
                height: area.height.min(BANNER_HEIGHT),
                ..area
            };
            render_status_banner(frame, area, status);
        }
    }

    if let Some(area) = revealed(app, RevealElement::Form, chunks[2], column) {
        forms::draw_contact_form(frame, area, app);
    }

    layout::draw_status_bar(frame, status_bar, app);
}

/// Where an element should be drawn this frame, `None` while hidden
fn revealed(app: &App, element: RevealElement, area: Rect, bounds: Rect) -> Option<Rect> {
    let offset = match &app.reveal {
        Some(reveal) => reveal.offset(element)?,
        None => 0,
    };
    Some(layout::shift_down(area, offset, bounds))
}
