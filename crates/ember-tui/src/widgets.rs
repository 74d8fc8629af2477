//! Building blocks for the sign-in card: container, input fields, button, hints.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::common::truncate_start_with_ellipsis;

/// Accent used for focus highlights.
pub const ACCENT: Color = Color::Rgb(255, 122, 41);
/// Dimmed color for inactive borders, placeholders and hints.
pub const MUTED: Color = Color::DarkGray;

/// Centers a `width` x `height` card in `area`, shrinking it to fit.
pub fn calculate_card_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Renders the card background, border and title.
pub fn render_card_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

/// A labelled single-line input.
pub struct InputField<'a> {
    pub label: &'a str,
    /// Text to show (already masked for secrets).
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub disabled: bool,
}

/// Renders an input as a bordered box; the focused one gets a thick accent
/// border and a cursor so it reads from across the room.
pub fn render_input_field(frame: &mut Frame, area: Rect, field: &InputField<'_>) {
    let (border_type, border_color, label_style) = if field.focused {
        (
            BorderType::Thick,
            ACCENT,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Plain, MUTED, Style::default().fg(Color::Gray))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(format!(" {} ", field.label), label_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let show_cursor = field.focused && !field.disabled;
    let max_text_width = inner.width.saturating_sub(u16::from(show_cursor)) as usize;

    let mut spans = Vec::new();
    if field.value.is_empty() {
        if show_cursor {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }
        spans.push(Span::styled(
            truncate_start_with_ellipsis(field.placeholder, max_text_width),
            Style::default().fg(MUTED),
        ));
    } else {
        let text_color = if field.disabled {
            MUTED
        } else {
            Color::White
        };
        spans.push(Span::styled(
            truncate_start_with_ellipsis(field.value, max_text_width),
            Style::default().fg(text_color),
        ));
        if show_cursor {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Renders a one-line button centered in `area`.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, disabled: bool) {
    let style = if disabled {
        Style::default().fg(MUTED)
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };
    let text = if focused && !disabled {
        format!("▶ {label} ◀")
    } else {
        format!("  {label}  ")
    };

    let para = Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders a centered line of keyboard hints.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(MUTED)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(MUTED),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let card = calculate_card_area(area, 50, 20);
        assert_eq!(card, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_card_shrinks_to_small_terminal() {
        let area = Rect::new(0, 0, 30, 10);
        let card = calculate_card_area(area, 50, 20);
        assert_eq!(card.width, 26);
        assert_eq!(card.height, 8);
        assert!(card.x + card.width <= area.width);
        assert!(card.y + card.height <= area.height);
    }
}
