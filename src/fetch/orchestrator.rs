// Fetch orchestrator.
// Serves fresh bundles from the cache or runs the remote calls and stores the result.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::cache::{CacheEntry, ProfileCache};
use crate::error::{ActivityError, Result};
use crate::github::{Avatar, EventsPayload, Profile, ProfileLookup};

use super::{ActivitySource, Bundle, Resolution};

/// Exclusive owner of the cache; the only code path that mutates it.
pub struct Orchestrator<S> {
    source: S,
    cache: ProfileCache,
}

impl<S: ActivitySource> Orchestrator<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            cache: ProfileCache::new(ttl),
        }
    }

    #[cfg(test)]
    pub fn cache(&self) -> &ProfileCache {
        &self.cache
    }

    /// Resolve `username` into a bundle as of now.
    pub async fn resolve(&mut self, username: &str, force_refresh: bool) -> Result<Resolution> {
        self.resolve_at(username, force_refresh, Utc::now()).await
    }

    /// Resolve `username` with an explicit clock reading.
    pub async fn resolve_at(
        &mut self,
        username: &str,
        force_refresh: bool,
        now: DateTime<Utc>,
    ) -> Result<Resolution> {
        if !force_refresh {
            if let Some(entry) = self.cache.get(username, now) {
                tracing::debug!(username, captured_at = %entry.captured_at, "cache hit");
                return Ok(Resolution {
                    bundle: entry.bundle.clone(),
                    avatar: entry.avatar.clone(),
                    from_cache: true,
                });
            }
        }

        tracing::info!(username, force_refresh, "fetching profile and events");

        // Rate limit is read before the lookup result is checked so the
        // snapshot reflects this attempt even when the user is missing.
        let lookup = self.source.lookup_profile(username).await?;
        let rate_limit = self.source.rate_limit().await?;

        let profile = match lookup {
            ProfileLookup::Found(profile) => profile,
            ProfileLookup::Missing { status } => {
                tracing::warn!(username, status, "profile lookup failed");
                return Err(ActivityError::NotFound {
                    username: username.to_string(),
                    status,
                });
            }
        };

        let events = match self.source.events(&profile).await? {
            EventsPayload::Records(records) => records,
            EventsPayload::Failure { message } => {
                tracing::warn!(username, %message, "events feed returned an error");
                return Err(ActivityError::Upstream(message));
            }
        };

        let bundle = Bundle {
            profile,
            events,
            rate_limit,
        };
        let avatar = self.fetch_avatar(&bundle.profile).await;

        self.cache
            .put(username, CacheEntry::new(bundle.clone(), avatar.clone(), now));
        tracing::info!(
            username,
            events = bundle.events.len(),
            remaining = bundle.rate_limit.remaining,
            "fetch complete"
        );

        Ok(Resolution {
            bundle,
            avatar,
            from_cache: false,
        })
    }

    /// Best-effort avatar download; failures are logged and dropped.
    async fn fetch_avatar(&self, profile: &Profile) -> Option<Avatar> {
        let url = profile.avatar_url.as_deref().filter(|url| !url.is_empty())?;
        match self.source.avatar(url).await {
            Ok(avatar) => Some(avatar),
            Err(e) => {
                tracing::debug!(%url, error = %e, "avatar fetch failed");
                None
            }
        }
    }
}
