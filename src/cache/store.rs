// In-memory profile cache.
// Holds the last successful fetch per username and checks TTL freshness.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::fetch::Bundle;
use crate::github::Avatar;

/// Default TTL for a fetched bundle: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// A cached fetch result with its capture time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Reconciled profile, events and rate limit.
    pub bundle: Bundle,
    /// Avatar fetched alongside the bundle, if any.
    pub avatar: Option<Avatar>,
    /// When the bundle was fetched.
    pub captured_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(bundle: Bundle, avatar: Option<Avatar>, captured_at: DateTime<Utc>) -> Self {
        Self {
            bundle,
            avatar,
            captured_at,
        }
    }

    /// Check if the entry is still usable at `now`.
    pub fn is_valid(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        match now.signed_duration_since(self.captured_at).to_std() {
            Ok(elapsed) => elapsed < ttl,
            // Captured "in the future" (clock went backwards): still fresh.
            Err(_) => true,
        }
    }

    /// Check if the entry has expired at `now`.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        !self.is_valid(ttl, now)
    }
}

/// Username-keyed cache. One entry per key, replaced wholesale on refresh.
#[derive(Debug, Clone)]
pub struct ProfileCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl Default for ProfileCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ProfileCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the entry for `key` if it is still valid at `now`.
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<&CacheEntry> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_valid(self.ttl, now))
    }

    /// Store an entry, replacing whatever was cached for `key`.
    pub fn put(&mut self, key: &str, entry: CacheEntry) {
        self.entries.insert(key.to_string(), entry);
    }

    /// Whether any entry exists for `key`, valid or not.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{Profile, RateLimitSnapshot};

    fn bundle(login: &str) -> Bundle {
        Bundle {
            profile: Profile {
                login: login.to_string(),
                name: None,
                avatar_url: None,
                html_url: format!("https://github.com/{}", login),
                events_url: None,
            },
            events: Vec::new(),
            rate_limit: RateLimitSnapshot {
                remaining: 59,
                limit: 60,
            },
        }
    }

    #[test]
    fn test_fresh_entry_is_returned() {
        let now = Utc::now();
        let mut cache = ProfileCache::default();
        cache.put("octocat", CacheEntry::new(bundle("octocat"), None, now));

        let entry = cache.get("octocat", now + chrono::Duration::seconds(299));
        assert_eq!(entry.map(|e| e.bundle.profile.login.as_str()), Some("octocat"));
    }

    #[test]
    fn test_entry_expires_at_ttl() {
        let now = Utc::now();
        let mut cache = ProfileCache::new(Duration::from_secs(300));
        cache.put("octocat", CacheEntry::new(bundle("octocat"), None, now));

        // Exactly TTL old is no longer valid
        assert!(cache.get("octocat", now + chrono::Duration::seconds(300)).is_none());
        assert!(cache.contains("octocat"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let now = Utc::now();
        let mut cache = ProfileCache::default();
        cache.put("Octocat", CacheEntry::new(bundle("Octocat"), None, now));

        assert!(cache.get("octocat", now).is_none());
        assert!(cache.get("Octocat", now).is_some());
    }

    #[test]
    fn test_put_replaces_existing_entry() {
        let now = Utc::now();
        let mut cache = ProfileCache::default();
        cache.put("octocat", CacheEntry::new(bundle("old"), None, now));
        cache.put("octocat", CacheEntry::new(bundle("new"), None, now));

        assert_eq!(cache.len(), 1);
        let entry = cache.get("octocat", now).unwrap();
        assert_eq!(entry.bundle.profile.login, "new");
    }

    #[test]
    fn test_entry_from_the_future_stays_valid() {
        let now = Utc::now();
        let entry = CacheEntry::new(bundle("octocat"), None, now + chrono::Duration::seconds(30));
        assert!(entry.is_valid(DEFAULT_TTL, now));
        assert!(!entry.is_expired(DEFAULT_TTL, now));
    }
}
