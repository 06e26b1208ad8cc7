//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod summary;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header);
    forms::draw_contact_form(frame, screen.form, app);
    summary::draw_summary(frame, screen.summary, app);
    layout::draw_status_bar(frame, screen.status, app);

    // Error dialog overlays everything else
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContactFormConfig;
    use crate::state::FieldName;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    fn filled_app(message: &str) -> App {
        let mut app = App::new(&ContactFormConfig::default());
        let form = &mut app.state.form;
        form.update_field(FieldName::FirstName, "12345");
        form.update_field(FieldName::LastName, "myLastName");
        form.update_field(FieldName::Email, "email@mail.com");
        form.update_field(FieldName::Message, message);
        app
    }

    #[test]
    fn test_renders_header_without_errors() {
        let app = App::new(&ContactFormConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Contact Form"));
        assert_eq!(count(&screen, "Error"), 0);
    }

    #[test]
    fn test_renders_labels() {
        let app = App::new(&ContactFormConfig::default());
        let screen = render(&app);
        for field in FieldName::ALL {
            assert!(screen.contains(field.label()), "missing {}", field.label());
        }
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_renders_one_error_for_short_first_name() {
        let mut app = App::new(&ContactFormConfig::default());
        app.state.form.update_field(FieldName::FirstName, "1234");
        let screen = render(&app);
        assert_eq!(count(&screen, "Error: "), 1);
        assert!(screen.contains("Error: firstName must have a value of at least 5 characters."));
    }

    #[test]
    fn test_renders_three_errors_on_empty_submit() {
        let mut app = App::new(&ContactFormConfig::default());
        app.submit();
        let screen = render(&app);
        assert_eq!(count(&screen, "Error: "), 3);
        assert!(screen.contains("Error: lastName is a required field."));
        assert!(screen.contains("Error: email must be a valid email address."));
    }

    #[test]
    fn test_summary_without_message() {
        let mut app = filled_app("");
        app.submit();
        let screen = render(&app);
        assert!(screen.contains("First Name: 12345"));
        assert!(screen.contains("Last Name: myLastName"));
        assert!(screen.contains("Email: email@mail.com"));
        assert!(!screen.contains("Message:"));
    }

    #[test]
    fn test_summary_with_message() {
        let mut app = filled_app("this is my message to you...");
        app.submit();
        let screen = render(&app);
        assert!(screen.contains("Message: this is my message to you..."));
    }

    #[test]
    fn test_form_is_empty_after_submit() {
        let mut app = filled_app("");
        app.submit();
        let screen = render(&app);
        // value only appears in the summary, not in the reset input
        assert_eq!(count(&screen, "myLastName"), 1);
        assert_eq!(count(&screen, "Error: "), 0);
    }

    #[test]
    fn test_error_dialog_overlay() {
        let mut app = App::new(&ContactFormConfig::default());
        app.push_error("Failed to copy to clipboard");
        let screen = render(&app);
        assert!(screen.contains("Failed to copy to clipboard"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_status_bar_counts_errors() {
        let mut app = App::new(&ContactFormConfig::default());
        app.submit();
        assert!(render(&app).contains("3 errors"));
    }

    #[test]
    fn test_status_bar_shows_last_submit_and_help_line_shows_hints() {
        let mut app = filled_app("");
        app.submit();
        let screen = render(&app);
        let status = screen.lines().last().unwrap();
        assert!(status.contains("ready"));
        assert!(status.contains("last submit"));
        assert!(!status.contains("Ctrl+S"));
        assert!(screen.contains("Ctrl+S: submit"));
    }

    #[test]
    fn test_help_line_hidden_when_disabled() {
        let config = ContactFormConfig {
            show_help: Some(false),
            ..Default::default()
        };
        let app = App::new(&config);
        assert!(!render(&app).contains("Ctrl+S: submit"));
    }
}
