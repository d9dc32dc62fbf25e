// State management module.
// Holds the feed view state and status line messages.

#![allow(dead_code)]

pub mod feed;
pub mod status;

pub use feed::{FeedState, FetchFailure, LoadingState};
pub use status::{StatusLevel, StatusMessage};
