//! Submission summary panel

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the values of the last successful submit.
///
/// One `Label: value` line per field; the message line only appears when a
/// message was submitted.
pub fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = match app.state.form.last_submission() {
        Some(record) => record
            .summary_lines()
            .into_iter()
            .flat_map(|(field, value)| {
                // multiline messages continue on indented lines
                let mut parts = value.split('\n');
                let first = Line::from(vec![
                    Span::styled(
                        format!("{}: ", field.summary_label()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(parts.next().unwrap_or_default().to_string()),
                ]);
                std::iter::once(first)
                    .chain(parts.map(|part| Line::from(format!("  {part}"))))
                    .collect::<Vec<_>>()
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "Nothing submitted yet.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
