//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod feeds;

pub use feeds::{create_feed, delete_feed, get_feed, get_feed_detail, list_feeds, update_feed};
