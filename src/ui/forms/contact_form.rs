//! Contact form rendering

use super::field_renderer::{draw_field, draw_field_error, draw_help_text};
use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldName, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const SINGLE_LINE_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 5;
const ERROR_LINE_HEIGHT: u16 = 1;
const HELP_HEIGHT: u16 = 1;

/// Total rows the form needs, including its border
pub const FORM_HEIGHT: u16 = 2
    + 3 * (SINGLE_LINE_HEIGHT + ERROR_LINE_HEIGHT)
    + MESSAGE_HEIGHT
    + BUTTON_HEIGHT
    + HELP_HEIGHT;

fn field_height(field: FieldName) -> u16 {
    if field.is_multiline() {
        MESSAGE_HEIGHT
    } else {
        SINGLE_LINE_HEIGHT
    }
}

/// Draw the contact form: inputs, inline errors, submit button and help line
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let focus = app.state.focus;

    let mut constraints = Vec::new();
    for field in FieldName::ALL {
        constraints.push(Constraint::Length(field_height(field)));
        if !field.is_multiline() {
            constraints.push(Constraint::Length(ERROR_LINE_HEIGHT));
        }
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(HELP_HEIGHT));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut chunk = 0;
    for field in FieldName::ALL {
        let error = form.errors().get(field);
        draw_field(
            frame,
            chunks[chunk],
            field.label(),
            form.state().get(field).as_text(),
            focus == Focus::from(field),
            field.is_multiline(),
            error.is_some(),
        );
        chunk += 1;
        if !field.is_multiline() {
            draw_field_error(frame, chunks[chunk], error);
            chunk += 1;
        }
    }

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[chunk])[0];
    render_button(frame, button_area, "Submit", focus.is_submit_button());
    chunk += 1;

    if app.state.show_help {
        let enter_action = if focus.is_submit_button() {
            "submit"
        } else if focus.is_multiline() {
            "new line"
        } else {
            "next field"
        };
        draw_help_text(
            frame,
            chunks[chunk],
            &[
                ("Tab", "next field"),
                ("Enter", enter_action),
                (SUBMIT_SHORTCUT, "submit"),
                (COPY_SHORTCUT, "copy summary"),
                ("Esc", "quit"),
            ],
        );
    }
}
