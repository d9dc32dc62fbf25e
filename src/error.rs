// Error types for ghactivity.
// Separates fetch failures (shown to the user) from config and IO errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("User '{username}' not found (status {status}).")]
    NotFound { username: String, status: u16 },

    #[error("Could not connect to GitHub API: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Could not connect to GitHub API: malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("{0}")]
    Upstream(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl ActivityError {
    /// Category used to title the failure when it reaches the UI.
    pub fn kind(&self) -> FailureKind {
        match self {
            ActivityError::NotFound { .. } => FailureKind::NotFound,
            ActivityError::Network(_) | ActivityError::MalformedResponse(_) => {
                FailureKind::Network
            }
            ActivityError::Upstream(_) => FailureKind::Upstream,
            ActivityError::Config(_) | ActivityError::Io(_) | ActivityError::Other(_) => {
                FailureKind::Other
            }
        }
    }
}

/// Tagged failure category delivered alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Network,
    Upstream,
    Other,
}

impl FailureKind {
    pub fn title(&self) -> &'static str {
        match self {
            FailureKind::NotFound => "Not Found",
            FailureKind::Network => "Network Error",
            FailureKind::Upstream => "API Error",
            FailureKind::Other => "An Error Occurred",
        }
    }
}

pub type Result<T> = std::result::Result<T, ActivityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_user_and_status() {
        let err = ActivityError::NotFound {
            username: "ghost-user".to_string(),
            status: 404,
        };
        let message = err.to_string();
        assert!(message.contains("ghost-user"));
        assert!(message.contains("404"));
        assert_eq!(err.kind(), FailureKind::NotFound);
    }

    #[test]
    fn test_malformed_body_counts_as_network_failure() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ActivityError::from(json_err);
        assert_eq!(err.kind(), FailureKind::Network);
        assert!(err.to_string().starts_with("Could not connect to GitHub API"));
    }

    #[test]
    fn test_upstream_message_is_verbatim() {
        let err = ActivityError::Upstream("rate limit exceeded".to_string());
        assert_eq!(err.to_string(), "rate limit exceeded");
        assert_eq!(err.kind().title(), "API Error");
    }
}
