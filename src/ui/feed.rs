// Activity list rendering.
// Styled feed rows with loading, error and empty states.

use ratatui::{prelude::*, widgets::*};

use crate::state::{FeedState, LoadingState};

use super::theme::Theme;

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.warn).bg(theme.panel_bg));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, theme: &Theme, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.error).bg(theme.panel_bg));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.subtle_text).bg(theme.panel_bg));
    frame.render_widget(text, area);
}

/// Render the activity list.
pub fn render_feed(frame: &mut Frame, feed: &mut FeedState, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel_bg))
        .title(" Recent Activity ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &feed.data {
        LoadingState::Idle => render_empty(frame, inner, theme, "Enter a GitHub username to begin"),
        LoadingState::Loading => render_loading(frame, inner, theme, "Fetching activity"),
        LoadingState::Error(e) => render_error(frame, inner, theme, e),
        LoadingState::Loaded(data) => {
            if data.rows.is_empty() {
                render_empty(frame, inner, theme, "No recent public activity");
                return;
            }

            let kind_width = data
                .rows
                .iter()
                .map(|row| row.kind.chars().count())
                .max()
                .unwrap_or(0);

            let items: Vec<ListItem> = data
                .rows
                .iter()
                .map(|row| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{} ", row.icon),
                            Style::default().fg(theme.subtle_text),
                        ),
                        Span::styled(
                            format!("{:<width$}  ", row.kind, width = kind_width),
                            Style::default().fg(theme.accent),
                        ),
                        Span::styled(row.summary.clone(), Style::default().fg(theme.text)),
                        Span::styled(
                            format!("  {}", row.date),
                            Style::default().fg(theme.subtle_text),
                        ),
                    ]))
                })
                .collect();

            let list_widget = List::new(items)
                .highlight_style(
                    Style::default()
                        .bg(theme.accent)
                        .fg(theme.accent_text)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, inner, &mut feed.list_state);
        }
    }
}
