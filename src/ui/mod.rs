// UI module for rendering the TUI.
// Username input, profile panel, activity list and footer.

mod feed;
mod modal;
pub mod theme;

use chrono::Utc;
use ratatui::{prelude::*, widgets::*};

use crate::app::{App, InputMode};
use crate::state::{LoadingState, StatusLevel};

use theme::Theme;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let theme = Theme::for_name(app.theme);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.text)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username input
            Constraint::Length(3), // Profile panel
            Constraint::Min(1),    // Activity list
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_top_bar(frame, app, chunks[0], &theme);
    draw_profile_panel(frame, app, chunks[1], &theme);
    feed::render_feed(frame, &mut app.feed, chunks[2], &theme);
    draw_footer(frame, app, chunks[3], &theme);

    // Overlays (rendered last, on top of everything)
    if app.show_help {
        modal::draw_help_overlay(frame, &theme);
    }
    if let Some(m) = &app.modal {
        modal::draw_message_modal(frame, m, &theme);
    }
}

/// Draw the username input and key hints.
fn draw_top_bar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(area);

    let editing = app.input_mode == InputMode::Editing;
    let border_color = if editing { theme.accent } else { theme.border };

    let mut spans = vec![Span::styled(
        "User: ",
        Style::default().fg(theme.subtle_text),
    )];
    if app.input.is_empty() && !editing {
        spans.push(Span::styled(
            "press / to enter a GitHub username",
            Style::default().fg(theme.subtle_text),
        ));
    } else {
        spans.push(Span::styled(
            app.input.clone(),
            Style::default().fg(theme.text),
        ));
    }
    if editing {
        spans.push(Span::styled("█", Style::default().fg(theme.accent)));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.panel_bg))
            .title(" GitHub Activity Viewer ")
            .title_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(input, chunks[0]);

    let hints = Paragraph::new(Line::from(vec![
        Span::raw(" ↵ "),
        Span::styled("Show", Style::default().fg(theme.subtle_text)),
        Span::raw("  t "),
        Span::styled("Theme", Style::default().fg(theme.subtle_text)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(theme.subtle_text)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(hints, chunks[1]);
}

/// Draw the profile panel for the loaded user.
fn draw_profile_panel(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel_bg));

    let Some(feed) = app.feed.feed() else {
        frame.render_widget(block, area);
        return;
    };

    let mut spans = vec![
        Span::raw("👤 "),
        Span::styled(
            feed.profile.display_name().to_string(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", feed.profile.html_url),
            Style::default().fg(theme.subtle_text),
        ),
    ];

    if let Some(avatar) = &feed.avatar {
        spans.push(Span::styled(
            format!("  🖼 {}", format_size(avatar.bytes.len())),
            Style::default().fg(theme.subtle_text),
        ));
    }
    if feed.from_cache {
        spans.push(Span::styled(
            "  (cached)",
            Style::default().fg(theme.warn),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the footer with event count, status messages and API rate.
fn draw_footer(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(28)])
        .split(area);

    let status = app
        .status
        .as_ref()
        .filter(|msg| msg.is_visible(Utc::now()));

    let left = match (status, &app.feed.data) {
        (Some(msg), _) => {
            let color = match msg.level {
                StatusLevel::Info => theme.accent,
                StatusLevel::Warn => theme.warn,
                StatusLevel::Error => theme.error,
            };
            Span::styled(format!(" {}", msg.message), Style::default().fg(color))
        }
        (None, LoadingState::Loaded(feed)) => Span::styled(
            format!(" Showing {} recent events.", feed.rows.len()),
            Style::default().fg(theme.subtle_text),
        ),
        (None, _) => Span::styled(
            " q Quit",
            Style::default().fg(theme.subtle_text),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(left)), chunks[0]);

    let right = match &app.feed.data {
        LoadingState::Loaded(feed) => {
            let rate = feed.rate_limit;
            let color = if rate.remaining < 10 {
                theme.error
            } else {
                theme.subtle_text
            };
            Span::styled(
                format!("API Rate: {} / {} ", rate.remaining, rate.limit),
                Style::default().fg(color),
            )
        }
        LoadingState::Error(_) => Span::styled(
            "API Status: Error ",
            Style::default().fg(theme.error),
        ),
        _ => Span::raw(""),
    };
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Human-readable byte size.
fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
