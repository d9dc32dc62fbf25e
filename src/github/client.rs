// GitHub API HTTP client.
// Carries the fixed identifying headers and decodes JSON bodies.

use std::time::Duration;

use reqwest::{
    Client, Response, Url,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ActivityError, Result};

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Unauthenticated GitHub API client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: String,
}

impl GitHubClient {
    /// Create a client against `api_base` that identifies itself as `user_agent`.
    pub fn new(api_base: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| ActivityError::Config(format!("user_agent: {}", e)))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.api_base,
            &config.user_agent,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Make a GET request to an endpoint relative to the API base.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.api_base, endpoint);
        self.get_url(&url).await
    }

    /// Make a GET request to the API base joined with `segments`, each one
    /// percent-encoded as a single path segment.
    pub async fn get_segments(&self, segments: &[&str]) -> Result<Response> {
        let url = self.segments_url(segments)?;
        self.get_url(url.as_str()).await
    }

    fn segments_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| ActivityError::Config(format!("api_base: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                ActivityError::Config(format!("api_base: {} cannot be a base", self.api_base))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Make a GET request to an absolute URL. The status is not checked.
    pub async fn get_url(&self, url: &str) -> Result<Response> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        tracing::debug!(%url, status = %response.status(), "response");
        Ok(response)
    }

    /// Read the whole body and decode it as JSON.
    pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
