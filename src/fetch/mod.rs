// Fetch pipeline.
// Resolves a username into a profile, events and rate limit bundle, off the UI thread.

pub mod orchestrator;
pub mod worker;

use std::future::Future;

use crate::error::Result;
use crate::github::{
    ActivityRecord, Avatar, EventsPayload, GitHubClient, Profile, ProfileLookup, RateLimitSnapshot,
};

pub use orchestrator::Orchestrator;
pub use worker::{FetchEvent, FetchHandle, spawn_worker};

/// The reconciled result of one successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    pub profile: Profile,
    /// Newest first, in API order.
    pub events: Vec<ActivityRecord>,
    pub rate_limit: RateLimitSnapshot,
}

/// What one resolve call yields.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub bundle: Bundle,
    pub avatar: Option<Avatar>,
    /// Served from cache without any remote call.
    pub from_cache: bool,
}

/// Remote side of the pipeline.
pub trait ActivitySource {
    fn lookup_profile(&self, username: &str) -> impl Future<Output = Result<ProfileLookup>> + Send;

    fn rate_limit(&self) -> impl Future<Output = Result<RateLimitSnapshot>> + Send;

    fn events(&self, profile: &Profile) -> impl Future<Output = Result<EventsPayload>> + Send;

    fn avatar(&self, url: &str) -> impl Future<Output = Result<Avatar>> + Send;
}

impl ActivitySource for GitHubClient {
    async fn lookup_profile(&self, username: &str) -> Result<ProfileLookup> {
        self.lookup_user(username).await
    }

    async fn rate_limit(&self) -> Result<RateLimitSnapshot> {
        self.get_rate_limit().await
    }

    async fn events(&self, profile: &Profile) -> Result<EventsPayload> {
        self.get_user_events(profile).await
    }

    async fn avatar(&self, url: &str) -> Result<Avatar> {
        self.get_avatar(url).await
    }
}
