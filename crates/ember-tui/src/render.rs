//! Sign-in screen view.
//!
//! Pure function of `AppState`; never mutates state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::mask;
use crate::state::{AppState, Focus};
use crate::widgets::{
    ACCENT, InputField, InputHint, MUTED, calculate_card_area, render_button,
    render_card_container, render_hints, render_input_field,
};

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 18;

const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
/// Ticks per spinner frame.
const SPINNER_SPEED_DIVISOR: usize = 3;

pub fn render(app: &AppState, frame: &mut Frame) {
    let card = calculate_card_area(frame.area(), CARD_WIDTH, CARD_HEIGHT);
    render_card_container(frame, card, "Sign In", ACCENT);

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );

    let [
        subtitle_area,
        _,
        email_area,
        password_area,
        _,
        button_area,
        _,
        status_area,
        _,
        hints_area,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Sign in to your Ember account",
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center),
        subtitle_area,
    );

    let form = &app.form;
    let masked_password = mask(&form.password);

    render_input_field(
        frame,
        email_area,
        &InputField {
            label: "Email",
            value: &form.email,
            placeholder: "you@example.com",
            focused: form.focused_field == Focus::Email,
            disabled: !form.is_input_enabled(),
        },
    );
    render_input_field(
        frame,
        password_area,
        &InputField {
            label: "Password",
            value: &masked_password,
            placeholder: "Password",
            focused: form.focused_field == Focus::Password,
            disabled: !form.is_input_enabled(),
        },
    );

    let button_label = if form.is_loading {
        let frame_idx = (app.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len();
        format!("{} Signing in…", SPINNER_FRAMES[frame_idx])
    } else {
        "Sign In".to_string()
    };
    render_button(
        frame,
        button_area,
        &button_label,
        form.focused_field == Focus::None,
        !form.is_submit_enabled(),
    );

    if let Some(line) = status_line(app) {
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), status_area);
    }

    let hints = [
        InputHint::new("↑↓", "move"),
        InputHint::new("Enter", "select"),
        InputHint::new("Esc", "quit"),
    ];
    render_hints(frame, hints_area, &hints, ACCENT);
}

fn status_line(app: &AppState) -> Option<Line<'static>> {
    if let Some(error) = &app.form.error_message {
        return Some(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(email) = &app.signed_in_as {
        return Some(Line::from(Span::styled(
            format!("Signed in as {email}"),
            Style::default().fg(Color::Green),
        )));
    }
    if app.form.is_loading {
        return Some(Line::from(Span::styled(
            "Contacting Ember…",
            Style::default().fg(MUTED),
        )));
    }
    None
}

#[cfg(test)]
mod tests {
    use ember_core::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw(app: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> AppState {
        AppState::new(&Config::default())
    }

    #[test]
    fn test_renders_form_controls() {
        let text = draw(&app());
        assert!(text.contains("Sign In"));
        assert!(text.contains("Email"));
        assert!(text.contains("Password"));
        assert!(text.contains("you@example.com"));
        assert!(text.contains("Esc quit"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = app();
        app.form.email = "viewer@ember.tv".to_string();
        app.form.password = "hunter2".to_string();

        let text = draw(&app);

        assert!(text.contains("viewer@ember.tv"));
        assert!(!text.contains("hunter2"));
        assert!(text.contains("•••••••"));
    }

    #[test]
    fn test_focused_button_is_marked() {
        let mut app = app();
        app.form.focused_field = Focus::None;
        assert!(draw(&app).contains("▶ Sign In ◀"));

        app.form.focused_field = Focus::Email;
        assert!(!draw(&app).contains("▶ Sign In ◀"));
    }

    #[test]
    fn test_loading_shows_progress() {
        let mut app = app();
        app.form.is_loading = true;

        let text = draw(&app);

        assert!(text.contains("Signing in…"));
        assert!(!text.contains("▶"));
    }

    #[test]
    fn test_error_message_is_rendered() {
        let mut app = app();
        app.form.error_message = Some("Please enter both email and password.".to_string());

        assert!(draw(&app).contains("Please enter both email and password."));
    }

    #[test]
    fn test_success_line_is_rendered() {
        let mut app = app();
        app.signed_in_as = Some("viewer@ember.tv".to_string());

        assert!(draw(&app).contains("Signed in as viewer@ember.tv"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app(), frame)).unwrap();
    }
}
