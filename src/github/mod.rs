// GitHub API module.
// Provides the client and types for the public profile and events endpoints.

#![allow(dead_code)]

pub mod client;
pub mod endpoints;
#[cfg(test)]
pub mod stub;
pub mod types;

pub use client::GitHubClient;
pub use types::*;
