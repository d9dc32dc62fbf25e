// Modal UI components.
// Message dialogs and the keyboard help overlay.

use ratatui::{prelude::*, widgets::*};

use crate::app::Modal;

use super::theme::Theme;

/// Centered rect of at most `width` x `height` inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Draw a message dialog on top of the current view.
pub fn draw_message_modal(frame: &mut Frame, modal: &Modal, theme: &Theme) {
    let modal_area = centered(frame.area(), 60, 9);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let border_color = if modal.is_error {
        theme.error
    } else {
        theme.accent
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.panel_bg))
        .title(format!(" {} ", modal.title))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            modal.message.clone(),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(theme.subtle_text)),
            Span::styled("any key", Style::default().fg(theme.warn)),
            Span::styled(" to close", Style::default().fg(theme.subtle_text)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal_area);
}

/// Draw the help overlay.
pub fn draw_help_overlay(frame: &mut Frame, theme: &Theme) {
    let popup_area = centered(frame.area(), 52, 20);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", k), Style::default().fg(theme.accent)),
            Span::styled(what, Style::default().fg(theme.text)),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("/ or i", "Edit username"),
        key("Enter", "Show activity (while editing)"),
        key("↑/↓ or j/k", "Navigate events"),
        key("Home/End g/G", "Jump to first/last event"),
        key("Enter or o", "Open event in browser"),
        key("p", "Open profile in browser"),
        key("y", "Copy event link"),
        key("c", "Copy event summary"),
        key("r", "Refresh (bypass cache)"),
        key("t", "Toggle light/dark theme"),
        key("?", "Show/hide this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(theme.subtle_text)),
            Span::styled("Esc", Style::default().fg(theme.warn)),
            Span::styled(" or ", Style::default().fg(theme.subtle_text)),
            Span::styled("?", Style::default().fg(theme.warn)),
            Span::styled(" to close", Style::default().fg(theme.subtle_text)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.panel_bg))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
