//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Feed, FeedId, NewFeed, UpdateFeed};
use crate::error::DomainError;

/// Repository for Feed entities
///
/// The store must round-trip the config blob faithfully: what `create` and
/// `update` persist is exactly what later reads return, with no coercion in
/// the storage layer itself.
#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Find a feed by ID
    async fn find_by_id(&self, id: &FeedId) -> Result<Option<Feed>, DomainError>;

    /// Find a feed by its public slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Feed>, DomainError>;

    /// All feeds, ordered by title ascending
    async fn list(&self) -> Result<Vec<Feed>, DomainError>;

    /// Create a new feed
    async fn create(&self, feed: &NewFeed) -> Result<Feed, DomainError>;

    /// Replace a feed's title and configuration wholesale
    async fn update(&self, id: &FeedId, update: &UpdateFeed) -> Result<Feed, DomainError>;

    /// Delete a feed and its configuration
    async fn delete(&self, id: &FeedId) -> Result<(), DomainError>;
}
