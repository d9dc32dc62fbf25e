// Activity record classification.
// Maps a raw events-feed record to a one-line summary and the link it points at.

use serde_json::Value;

use crate::github::{ActivityRecord, MISSING};

/// Web host that repository links are built on.
pub const GITHUB_WEB_BASE: &str = "https://github.com";

/// Known event kinds. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Push,
    Issues,
    IssueComment,
    PullRequest,
    Watch,
    Fork,
    Create,
    Delete,
    Public,
    Release,
    Other,
}

impl ActivityKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PushEvent" => ActivityKind::Push,
            "IssuesEvent" => ActivityKind::Issues,
            "IssueCommentEvent" => ActivityKind::IssueComment,
            "PullRequestEvent" => ActivityKind::PullRequest,
            "WatchEvent" => ActivityKind::Watch,
            "ForkEvent" => ActivityKind::Fork,
            "CreateEvent" => ActivityKind::Create,
            "DeleteEvent" => ActivityKind::Delete,
            "PublicEvent" => ActivityKind::Public,
            "ReleaseEvent" => ActivityKind::Release,
            _ => ActivityKind::Other,
        }
    }

    /// List glyph for the kind.
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Push => "⬆",
            ActivityKind::Issues => "❗",
            ActivityKind::IssueComment => "💬",
            ActivityKind::PullRequest | ActivityKind::Fork => "⑂",
            ActivityKind::Watch => "★",
            ActivityKind::Create => "➕",
            ActivityKind::Delete => "🗑",
            ActivityKind::Public => "🌐",
            ActivityKind::Release => "🏷",
            ActivityKind::Other => "❓",
        }
    }
}

/// Display summary and target link for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub summary: String,
    pub url: String,
}

/// Classify a record. Never fails; absent fields degrade to defaults.
pub fn classify(record: &ActivityRecord) -> Classification {
    let repo = record.repository_name();
    let repo_url = format!("{}/{}", GITHUB_WEB_BASE, repo);
    let payload = &record.payload;
    let link_or_repo = |pointer: &str| text_at(payload, pointer).unwrap_or_else(|| repo_url.clone());

    let (summary, url) = match ActivityKind::from_tag(&record.kind) {
        ActivityKind::Push => {
            let size = text_at(payload, "/size").unwrap_or_else(|| "0".to_string());
            (format!("Pushed {} commit(s) to {}", size, repo), repo_url.clone())
        }
        ActivityKind::Issues => {
            let title = text_at(payload, "/issue/title").unwrap_or_else(|| MISSING.to_string());
            (
                format!("{} issue in {}: '{}'", action(payload), repo, title),
                link_or_repo("/issue/html_url"),
            )
        }
        ActivityKind::IssueComment => (
            format!("Commented on an issue in {}", repo),
            link_or_repo("/comment/html_url"),
        ),
        ActivityKind::PullRequest => {
            let number = text_at(payload, "/pull_request/number").unwrap_or_default();
            (
                format!("{} PR #{} in {}", action(payload), number, repo),
                link_or_repo("/pull_request/html_url"),
            )
        }
        ActivityKind::Watch => (format!("Starred {}", repo), repo_url.clone()),
        ActivityKind::Fork => {
            let forkee = text_at(payload, "/forkee/full_name").unwrap_or_else(|| MISSING.to_string());
            (
                format!("Forked {} to {}", repo, forkee),
                link_or_repo("/forkee/html_url"),
            )
        }
        kind @ (ActivityKind::Create | ActivityKind::Delete) => {
            let verb = if kind == ActivityKind::Create {
                "Created"
            } else {
                "Deleted"
            };
            let ref_type = text_at(payload, "/ref_type").unwrap_or_else(|| MISSING.to_string());
            (format!("{} {} in {}", verb, ref_type, repo), repo_url.clone())
        }
        ActivityKind::Release => (
            format!("Published release in {}", repo),
            link_or_repo("/release/html_url"),
        ),
        ActivityKind::Public | ActivityKind::Other => (
            format!("Performed {} in {}", record.kind, repo),
            repo_url.clone(),
        ),
    };

    Classification { summary, url }
}

/// Kind tag without the trailing `Event`.
pub fn kind_label(tag: &str) -> String {
    if tag.is_empty() {
        return "Unknown".to_string();
    }
    tag.replace("Event", "")
}

/// `2024-05-01T12:00:00Z` as `2024-05-01 12:00:00`.
pub fn display_date(created_at: &str) -> String {
    created_at.replace('T', " ").replace('Z', "")
}

/// Payload `action` with its first letter upper-cased and the rest lower-cased.
fn action(payload: &Value) -> String {
    let raw = text_at(payload, "/action").unwrap_or_default();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Scalar at a JSON pointer rendered as text. Null, objects and arrays count as absent.
fn text_at(payload: &Value, pointer: &str) -> Option<String> {
    match payload.pointer(pointer)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::github::RepoRef;

    fn record(kind: &str, payload: Value) -> ActivityRecord {
        ActivityRecord {
            kind: kind.to_string(),
            repo: Some(RepoRef {
                name: Some("octo/repo".to_string()),
            }),
            created_at: "2024-05-01T12:00:00Z".to_string(),
            payload,
        }
    }

    #[test]
    fn test_push_counts_commits() {
        let c = classify(&record("PushEvent", json!({"size": 3})));
        assert_eq!(c.summary, "Pushed 3 commit(s) to octo/repo");
        assert_eq!(c.url, "https://github.com/octo/repo");
    }

    #[test]
    fn test_push_without_size_defaults_to_zero() {
        let c = classify(&record("PushEvent", json!({})));
        assert_eq!(c.summary, "Pushed 0 commit(s) to octo/repo");
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        let c = classify(&record("SponsorEvent", Value::Null));
        assert_eq!(c.summary, "Performed SponsorEvent in octo/repo");
        assert_eq!(c.url, "https://github.com/octo/repo");
    }

    #[test]
    fn test_pull_request_opened() {
        let c = classify(&record(
            "PullRequestEvent",
            json!({
                "action": "opened",
                "pull_request": {"number": 42, "html_url": "https://github.com/octo/repo/pull/42"}
            }),
        ));
        assert_eq!(c.summary, "Opened PR #42 in octo/repo");
        assert_eq!(c.url, "https://github.com/octo/repo/pull/42");
    }

    #[test]
    fn test_pull_request_without_details() {
        let c = classify(&record("PullRequestEvent", json!({})));
        assert_eq!(c.summary, " PR # in octo/repo");
        assert_eq!(c.url, "https://github.com/octo/repo");
    }

    #[test]
    fn test_issue_action_is_capitalized() {
        let c = classify(&record(
            "IssuesEvent",
            json!({
                "action": "CLOSED",
                "issue": {"title": "Crash on start", "html_url": "https://github.com/octo/repo/issues/7"}
            }),
        ));
        assert_eq!(c.summary, "Closed issue in octo/repo: 'Crash on start'");
        assert_eq!(c.url, "https://github.com/octo/repo/issues/7");
    }

    #[test]
    fn test_issue_without_title() {
        let c = classify(&record("IssuesEvent", json!({"action": "reopened", "issue": {}})));
        assert_eq!(c.summary, "Reopened issue in octo/repo: 'N/A'");
        assert_eq!(c.url, "https://github.com/octo/repo");
    }

    #[test]
    fn test_issue_comment_links_comment() {
        let c = classify(&record(
            "IssueCommentEvent",
            json!({"comment": {"html_url": "https://github.com/octo/repo/issues/1#issuecomment-9"}}),
        ));
        assert_eq!(c.summary, "Commented on an issue in octo/repo");
        assert_eq!(c.url, "https://github.com/octo/repo/issues/1#issuecomment-9");
    }

    #[test]
    fn test_watch_is_star() {
        let c = classify(&record("WatchEvent", json!({"action": "started"})));
        assert_eq!(c.summary, "Starred octo/repo");
        assert_eq!(c.url, "https://github.com/octo/repo");
    }

    #[test]
    fn test_fork_links_forkee() {
        let c = classify(&record(
            "ForkEvent",
            json!({"forkee": {"full_name": "me/repo", "html_url": "https://github.com/me/repo"}}),
        ));
        assert_eq!(c.summary, "Forked octo/repo to me/repo");
        assert_eq!(c.url, "https://github.com/me/repo");

        let bare = classify(&record("ForkEvent", Value::Null));
        assert_eq!(bare.summary, "Forked octo/repo to N/A");
    }

    #[test]
    fn test_create_and_delete_ref() {
        let created = classify(&record("CreateEvent", json!({"ref_type": "branch"})));
        assert_eq!(created.summary, "Created branch in octo/repo");

        let deleted = classify(&record("DeleteEvent", json!({})));
        assert_eq!(deleted.summary, "Deleted N/A in octo/repo");
    }

    #[test]
    fn test_release_links_release() {
        let c = classify(&record(
            "ReleaseEvent",
            json!({"release": {"html_url": "https://github.com/octo/repo/releases/v1"}}),
        ));
        assert_eq!(c.summary, "Published release in octo/repo");
        assert_eq!(c.url, "https://github.com/octo/repo/releases/v1");
    }

    #[test]
    fn test_missing_repo_uses_placeholder() {
        let mut r = record("WatchEvent", Value::Null);
        r.repo = None;
        let c = classify(&r);
        assert_eq!(c.summary, "Starred N/A");
        assert_eq!(c.url, "https://github.com/N/A");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let r = record("PushEvent", json!({"size": 5}));
        assert_eq!(classify(&r), classify(&r));
    }

    #[test]
    fn test_labels_and_dates() {
        assert_eq!(kind_label("PullRequestEvent"), "PullRequest");
        assert_eq!(kind_label(""), "Unknown");
        assert_eq!(display_date("2024-05-01T12:00:00Z"), "2024-05-01 12:00:00");
        assert_eq!(ActivityKind::from_tag("PublicEvent").icon(), "🌐");
        assert_eq!(ActivityKind::from_tag("SponsorEvent"), ActivityKind::Other);
    }
}
