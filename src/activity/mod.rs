// Activity feed presentation model.
// Turns fetched records into the rows the list and plain output display.

pub mod classify;

pub use classify::{ActivityKind, Classification, classify, display_date, kind_label};

use crate::github::ActivityRecord;

/// One display row of the activity list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    pub icon: &'static str,
    pub kind: String,
    pub summary: String,
    pub url: String,
    pub date: String,
}

impl FeedRow {
    pub fn from_record(record: &ActivityRecord) -> Self {
        let Classification { summary, url } = classify(record);
        Self {
            icon: ActivityKind::from_tag(&record.kind).icon(),
            kind: kind_label(&record.kind),
            summary,
            url,
            date: display_date(&record.created_at),
        }
    }

    /// Single-line rendering used by `--plain`.
    pub fn plain_line(&self) -> String {
        format!("{}  {:<14} {}  {}", self.date, self.kind, self.summary, self.url)
    }
}

/// Rows for at most `cap` records, in feed order.
pub fn feed_rows(records: &[ActivityRecord], cap: usize) -> Vec<FeedRow> {
    records.iter().take(cap).map(FeedRow::from_record).collect()
}
