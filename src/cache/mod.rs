// Cache module for short-lived fetch results.
// Keeps fetched bundles in memory only; nothing is written to disk.

#![allow(dead_code)]

pub mod store;

pub use store::{CacheEntry, DEFAULT_TTL, ProfileCache};
