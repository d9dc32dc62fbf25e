// GitHub API endpoint functions.
// Typed methods for the profile, rate limit, events and avatar requests.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Avatar, EventsPayload, Profile, ProfileLookup, RateLimitResponse, RateLimitSnapshot};

impl GitHubClient {
    /// Look up a public user profile. A non-success status is reported, not raised.
    pub async fn lookup_user(&self, username: &str) -> Result<ProfileLookup> {
        let response = self.get_segments(&["users", username]).await?;
        let status = response.status();
        if !status.is_success() {
            return Ok(ProfileLookup::Missing {
                status: status.as_u16(),
            });
        }

        let profile: Profile = Self::read_json(response).await?;
        Ok(ProfileLookup::Found(profile))
    }

    /// Get the core rate limit counters.
    pub async fn get_rate_limit(&self) -> Result<RateLimitSnapshot> {
        let response = self.get("/rate_limit").await?;
        let body: RateLimitResponse = Self::read_json(response).await?;
        Ok(body.resources.core)
    }

    /// Get the public events feed of a profile.
    pub async fn get_user_events(&self, profile: &Profile) -> Result<EventsPayload> {
        let response = match profile.events_endpoint() {
            Some(url) => self.get_url(&url).await?,
            None => {
                self.get_segments(&["users", profile.login.as_str(), "events"])
                    .await?
            }
        };
        let payload: EventsPayload = Self::read_json(response).await?;
        Ok(payload)
    }

    /// Download an avatar image.
    pub async fn get_avatar(&self, url: &str) -> Result<Avatar> {
        let response = self.get_url(url).await?.error_for_status()?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;
        Ok(Avatar {
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}
