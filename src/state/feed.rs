// Feed view state.
// Tracks the outstanding fetch ticket, loaded rows and list selection.

use ratatui::widgets::ListState;

use crate::activity::{FeedRow, feed_rows};
use crate::error::FailureKind;
use crate::fetch::{FetchEvent, Resolution};
use crate::github::{Avatar, Profile, RateLimitSnapshot};

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// A resolved feed ready for display.
#[derive(Debug, Clone)]
pub struct LoadedFeed {
    pub username: String,
    pub profile: Profile,
    pub rate_limit: RateLimitSnapshot,
    pub avatar: Option<Avatar>,
    pub rows: Vec<FeedRow>,
    pub from_cache: bool,
}

impl LoadedFeed {
    pub fn new(username: String, resolution: Resolution, max_events: usize) -> Self {
        let Resolution {
            bundle,
            avatar,
            from_cache,
        } = resolution;
        Self {
            username,
            rows: feed_rows(&bundle.events, max_events),
            profile: bundle.profile,
            rate_limit: bundle.rate_limit,
            avatar,
            from_cache,
        }
    }
}

/// A failure to surface in the error modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug)]
pub struct FeedState {
    pub data: LoadingState<LoadedFeed>,
    pub list_state: ListState,
    /// Ticket of the request whose outcome is awaited.
    pub pending_ticket: Option<u64>,
    pub max_events: usize,
}

impl FeedState {
    pub fn new(max_events: usize) -> Self {
        Self {
            data: LoadingState::Idle,
            list_state: ListState::default(),
            pending_ticket: None,
            max_events,
        }
    }

    /// Mark a fetch as in flight. Older outstanding tickets become stale.
    pub fn begin(&mut self, ticket: u64) {
        self.pending_ticket = Some(ticket);
        self.data = LoadingState::Loading;
        self.list_state.select(None);
    }

    /// Apply a worker outcome. Outcomes for stale tickets are dropped.
    pub fn apply(&mut self, event: FetchEvent) -> Option<FetchFailure> {
        if self.pending_ticket != Some(event.ticket()) {
            tracing::debug!(ticket = event.ticket(), "dropping stale fetch outcome");
            return None;
        }
        self.pending_ticket = None;

        match event {
            FetchEvent::Loaded {
                username,
                resolution,
                ..
            } => {
                let feed = LoadedFeed::new(username, *resolution, self.max_events);
                let has_rows = !feed.rows.is_empty();
                self.data = LoadingState::Loaded(feed);
                self.list_state.select(if has_rows { Some(0) } else { None });
                None
            }
            FetchEvent::Failed { kind, message, .. } => {
                self.data = LoadingState::Error(message.clone());
                Some(FetchFailure { kind, message })
            }
        }
    }

    pub fn feed(&self) -> Option<&LoadedFeed> {
        self.data.data()
    }

    pub fn row_count(&self) -> usize {
        self.feed().map(|f| f.rows.len()).unwrap_or(0)
    }

    /// Select the next row, staying at the end.
    pub fn select_next(&mut self) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous row, staying at the start.
    pub fn select_prev(&mut self) {
        if self.row_count() == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if self.row_count() > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.row_count();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    pub fn selected_row(&self) -> Option<&FeedRow> {
        let index = self.list_state.selected()?;
        self.feed()?.rows.get(index)
    }
}
