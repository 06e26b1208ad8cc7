//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Draw a labeled input box.
///
/// Invalid fields get a red border so the error line below reads as attached.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
    has_error: bool,
) {
    let border_style = match (is_active, has_error) {
        (_, true) => Style::default().fg(Color::Red),
        (true, false) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if is_multiline {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(CURSOR, cursor_style));
            }
        }
        Paragraph::new(lines)
    } else {
        let mut spans = vec![Span::styled(value.to_string(), text_style)];
        if is_active {
            spans.push(Span::styled(CURSOR, cursor_style));
        }
        Paragraph::new(Line::from(spans))
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the inline error line under a field; nothing when the field is valid
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let error = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, area);
    }
}

/// Draw a help line of `key: action` pairs
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
