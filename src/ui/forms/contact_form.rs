//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::ContactField;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Width of the submit button
const BUTTON_WIDTH: u16 = 20;

/// Draw the four inputs and the submit button
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.controller.form();
    let enabled = !app.controller.is_submitting();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name | Email
            Constraint::Length(3),             // Subject
            Constraint::Min(7),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .split(area);

    let identity = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let slots = [
        (ContactField::Name, identity[0]),
        (ContactField::Email, identity[1]),
        (ContactField::Subject, rows[1]),
        (ContactField::Message, rows[2]),
    ];
    for (field, slot) in slots {
        let is_active = form.active_field_index == field.index();
        draw_field(frame, slot, form.get(field), is_active, enabled);
    }

    let button_area = center_horizontally(rows[3], BUTTON_WIDTH);
    let label = if enabled {
        "Let's talk →".to_string()
    } else {
        format!("{} Sending...", app.spinner.frame())
    };
    render_button(
        frame,
        button_area,
        &label,
        form.is_submit_focused(),
        enabled,
    );
}

/// Center a fixed-width slice of `area`
fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
