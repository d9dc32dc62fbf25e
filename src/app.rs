// App state and main event loop.
// Owns the feed state, forwards fetch requests to the worker and handles keys.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::{Config, ThemeName};
use crate::fetch::{FetchEvent, FetchHandle};
use crate::state::{FeedState, FetchFailure, StatusMessage};
use crate::{system, ui};

/// Whether keystrokes go to the username input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// A dialog shown on top of everything until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Modal {
    pub fn notice(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
        }
    }

    pub fn failure(failure: FetchFailure) -> Self {
        Self {
            title: failure.kind.title().to_string(),
            message: failure.message,
            is_error: true,
        }
    }
}

/// Main application state.
pub struct App {
    pub theme: ThemeName,
    /// Username being typed.
    pub input: String,
    pub input_mode: InputMode,
    pub feed: FeedState,
    pub modal: Option<Modal>,
    pub status: Option<StatusMessage>,
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    fetcher: FetchHandle,
    outcomes: UnboundedReceiver<FetchEvent>,
}

impl App {
    pub fn new(
        config: &Config,
        theme: ThemeName,
        fetcher: FetchHandle,
        outcomes: UnboundedReceiver<FetchEvent>,
    ) -> Self {
        Self {
            theme,
            input: String::new(),
            input_mode: InputMode::Editing,
            feed: FeedState::new(config.max_events),
            modal: None,
            status: None,
            show_help: false,
            should_quit: false,
            fetcher,
            outcomes,
        }
    }

    /// Prefill the input and start fetching right away.
    pub fn start_with(&mut self, username: &str, force_refresh: bool) {
        self.input = username.to_string();
        self.submit(force_refresh);
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            self.poll_fetches();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Drain finished fetches from the worker without blocking.
    pub fn poll_fetches(&mut self) {
        while let Ok(event) = self.outcomes.try_recv() {
            self.handle_fetch_event(event);
        }
    }

    fn handle_fetch_event(&mut self, event: FetchEvent) {
        if let Some(failure) = self.feed.apply(event) {
            self.modal = Some(Modal::failure(failure));
        }
    }

    /// Send the typed username to the worker.
    pub fn submit(&mut self, force_refresh: bool) {
        let username = self.input.trim().to_string();
        if username.is_empty() {
            self.modal = Some(Modal::notice(
                "Input Required",
                "Please enter a GitHub username.",
            ));
            return;
        }

        match self.fetcher.request(&username, force_refresh) {
            Ok(ticket) => {
                self.feed.begin(ticket);
                self.input_mode = InputMode::Normal;
                self.status = None;
            }
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    /// Re-fetch the shown user, bypassing the cache.
    pub fn refresh(&mut self) {
        if let Some(feed) = self.feed.feed() {
            self.input = feed.username.clone();
        }
        self.submit(true);
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.modal.is_some() {
            self.modal = None;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(false),
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !c.is_whitespace() => self.input.push(c),
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') | KeyCode::Char('i') => self.input_mode = InputMode::Editing,
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('t') => self.theme = self.theme.toggled(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Down | KeyCode::Char('j') => self.feed.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.feed.select_prev(),
            KeyCode::Home | KeyCode::Char('g') => self.feed.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.feed.select_last(),
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected(),
            KeyCode::Char('p') => self.open_profile(),
            KeyCode::Char('y') => self.copy_selected(|row| row.url.clone(), "link"),
            KeyCode::Char('c') => self.copy_selected(|row| row.summary.clone(), "summary"),
            _ => {}
        }
    }

    fn open_selected(&mut self) {
        let Some(url) = self.feed.selected_row().map(|row| row.url.clone()) else {
            return;
        };
        self.open_link(&url);
    }

    fn open_profile(&mut self) {
        let Some(url) = self
            .feed
            .feed()
            .map(|feed| feed.profile.html_url.clone())
            .filter(|url| !url.is_empty())
        else {
            return;
        };
        self.open_link(&url);
    }

    fn open_link(&mut self, url: &str) {
        self.status = Some(match system::open_url(url) {
            Ok(()) => StatusMessage::info(format!("Opened {}", url)),
            Err(e) => {
                tracing::warn!(%url, error = %e, "could not open link");
                StatusMessage::error(e.to_string())
            }
        });
    }

    fn copy_selected(&mut self, pick: impl Fn(&crate::activity::FeedRow) -> String, what: &str) {
        let Some(text) = self.feed.selected_row().map(pick) else {
            return;
        };
        self.status = Some(match system::copy_to_clipboard(&text) {
            Ok(()) => StatusMessage::info(format!("Copied {}", what)),
            Err(e) => StatusMessage::warn(e.to_string()),
        });
    }
}
