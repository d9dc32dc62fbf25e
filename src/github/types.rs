// GitHub API response types.
// Defines structs for deserializing the profile, rate limit and events endpoints.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder used wherever the API leaves a name out.
pub const MISSING: &str = "N/A";

/// Public GitHub user profile from `/users/{username}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub events_url: Option<String>,
}

impl Profile {
    /// Name to show for the user, falling back to the login.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }

    /// Events feed URL with the `{/privacy}` template suffix removed.
    pub fn events_endpoint(&self) -> Option<String> {
        self.events_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| url.replace("{/privacy}", ""))
    }
}

/// Repository reference attached to an activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of a user's public events feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub repo: Option<RepoRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl ActivityRecord {
    /// Full `owner/name` of the repository, or `N/A` when absent.
    pub fn repository_name(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .unwrap_or(MISSING)
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Remaining/limit counters reported by `/rate_limit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitSnapshot {
    #[serde(default)]
    pub remaining: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Body of `/rate_limit`; only the core bucket is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateLimitResponse {
    #[serde(default)]
    pub resources: RateLimitResources,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateLimitResources {
    #[serde(default)]
    pub core: RateLimitSnapshot,
}

/// Events endpoint body: either the records or an API error object.
#[derive(Debug, Clone)]
pub enum EventsPayload {
    Records(Vec<ActivityRecord>),
    Failure { message: String },
}

impl<'de> Deserialize<'de> for EventsPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            records @ Value::Array(_) => serde_json::from_value(records)
                .map(EventsPayload::Records)
                .map_err(D::Error::custom),
            Value::Object(mut object) => match object.remove("message") {
                Some(Value::String(message)) => Ok(EventsPayload::Failure { message }),
                _ => Err(D::Error::custom(
                    "events object carries no error message",
                )),
            },
            other => Err(D::Error::custom(format!(
                "expected a list of events, found {}",
                other
            ))),
        }
    }
}

/// Raw avatar image bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Outcome of a profile lookup before the orchestrator decides on it.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLookup {
    Found(Profile),
    Missing { status: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_display_name_falls_back_to_login() {
        let mut profile: Profile = serde_json::from_str(
            r#"{"login": "octocat", "name": null, "html_url": "https://github.com/octocat"}"#,
        )
        .unwrap();
        assert_eq!(profile.display_name(), "octocat");

        profile.name = Some("The Octocat".to_string());
        assert_eq!(profile.display_name(), "The Octocat");
    }

    #[test]
    fn test_events_endpoint_strips_privacy_template() {
        let profile: Profile = serde_json::from_str(
            r#"{"login": "octocat", "events_url": "https://api.github.com/users/octocat/events{/privacy}"}"#,
        )
        .unwrap();
        assert_eq!(
            profile.events_endpoint().as_deref(),
            Some("https://api.github.com/users/octocat/events")
        );
    }

    #[test]
    fn test_record_without_repo_or_payload() {
        let record: ActivityRecord = serde_json::from_str(r#"{"type": "PublicEvent"}"#).unwrap();
        assert_eq!(record.repository_name(), "N/A");
        assert!(record.payload.is_null());
        assert_eq!(record.created_at, "");
    }

    #[test]
    fn test_rate_limit_response_reads_core_bucket() {
        let body = r#"{"resources": {"core": {"limit": 60, "remaining": 57, "reset": 1}}, "rate": {}}"#;
        let parsed: RateLimitResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.resources.core,
            RateLimitSnapshot {
                remaining: 57,
                limit: 60
            }
        );

        let empty: RateLimitResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.resources.core, RateLimitSnapshot::default());
    }

    #[test]
    fn test_events_payload_variants() {
        let records: EventsPayload =
            serde_json::from_str(r#"[{"type": "WatchEvent", "repo": {"name": "a/b"}}]"#).unwrap();
        assert!(matches!(records, EventsPayload::Records(ref r) if r.len() == 1));

        let failure: EventsPayload =
            serde_json::from_str(r#"{"message": "rate limit exceeded", "documentation_url": "x"}"#)
                .unwrap();
        assert!(
            matches!(failure, EventsPayload::Failure { ref message } if message == "rate limit exceeded")
        );
    }

    #[test]
    fn test_one_sparse_record_does_not_sink_the_feed() {
        let body = r#"[
            {"type": "WatchEvent", "repo": {"name": "a/b"}, "created_at": "2024-01-01T00:00:00Z", "payload": {}},
            {"type": "PushEvent", "repo": {}, "created_at": "2024-01-02T00:00:00Z", "payload": {}},
            {"type": null, "repo": {"name": null}, "created_at": null, "payload": null}
        ]"#;
        let payload: EventsPayload = serde_json::from_str(body).unwrap();
        let EventsPayload::Records(records) = payload else {
            panic!("expected records");
        };
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].repository_name(), "a/b");
        assert_eq!(records[1].repository_name(), "N/A");
        assert_eq!(records[1].kind, "PushEvent");
        assert_eq!(records[2].kind, "");
        assert_eq!(records[2].created_at, "");
        assert_eq!(records[2].repository_name(), "N/A");
    }

    #[test]
    fn test_undecodable_events_keep_the_cause() {
        let err = serde_json::from_str::<EventsPayload>(r#"[{"type": 7}]"#).unwrap_err();
        assert!(err.to_string().contains("invalid type"), "{}", err);

        let err = serde_json::from_str::<EventsPayload>(r#"{"documentation_url": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("no error message"), "{}", err);

        let err = serde_json::from_str::<EventsPayload>("42").unwrap_err();
        assert!(err.to_string().contains("expected a list of events"), "{}", err);
    }
}
