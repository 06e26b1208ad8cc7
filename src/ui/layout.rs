//! Layout components (header, status bar)

use super::forms::FORM_HEIGHT;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header shown above the form
pub const HEADER_TITLE: &str = "Contact Form";

/// Areas of the main screen
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub summary: Rect,
    pub status: Rect,
}

/// Split the screen into header, form, summary and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(FORM_HEIGHT), // Form
            Constraint::Min(0),              // Submission summary
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        form: chunks[1],
        summary: chunks[2],
        status: chunks[3],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        HEADER_TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar: validation state, status message, last submit time
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let mut spans = vec![];

    let error_count = form.errors().len();
    if error_count == 0 {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
        spans.push(Span::styled("ready", Style::default().fg(Color::DarkGray)));
    } else {
        let noun = if error_count == 1 { "error" } else { "errors" };
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Red)));
        spans.push(Span::styled(
            format!("{error_count} {noun}"),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if let Some(record) = form.last_submission() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!(
                "last submit {}",
                record.submitted_at.with_timezone(&chrono::Local).format("%H:%M:%S")
            ),
            Style::default().fg(Color::Blue),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
