//! Feed service
//!
//! Orchestrates feed saves, public reads, listing and deletion. Saves run
//! the submitted configuration through the sanitizer and persist it
//! wholesale; public reads re-validate the stored blob and flatten it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::app::flattener::flatten_config;
use crate::app::sanitizer::{sanitize_config, sanitize_key, sanitize_text_field, slugify};
use crate::domain::entities::{Feed, FeedConfig, FeedId, NewFeed, UpdateFeed};
use crate::domain::ports::FeedRepository;
use crate::error::{AppError, DomainError};

/// A feed loaded for the admin edit screen. The stored config comes back
/// re-shaped through the sanitizer, so hand-edited store contents still
/// arrive fully shaped.
#[derive(Debug, Clone, Serialize)]
pub struct FeedDetail {
    pub id: FeedId,
    pub slug: String,
    pub title: String,
    pub config: FeedConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Service for feed management and public reads
pub struct FeedService<R>
where
    R: FeedRepository,
{
    feeds: Arc<R>,
}

impl<R> FeedService<R>
where
    R: FeedRepository,
{
    pub fn new(feeds: Arc<R>) -> Self {
        Self { feeds }
    }

    /// Create a feed from an untrusted submission.
    ///
    /// The title is the one field that can reject a save: after plain-text
    /// normalization it must be non-empty. The config itself never rejects.
    pub async fn create_feed(&self, title: &str, raw_config: &Value) -> Result<Feed, AppError> {
        let title = sanitize_text_field(title);
        if title.is_empty() {
            return Err(DomainError::Validation("Feed title cannot be empty".to_string()).into());
        }

        let config = sanitize_config(raw_config);
        let slug = self.unique_slug(&title).await?;
        let feed = self.feeds.create(&NewFeed { slug, title, config }).await?;

        tracing::info!(feed_id = %feed.id, slug = %feed.slug, "feed created");
        Ok(feed)
    }

    /// Replace a feed's title and configuration wholesale. The slug stays
    /// what it was at creation.
    pub async fn update_feed(
        &self,
        id: &FeedId,
        title: &str,
        raw_config: &Value,
    ) -> Result<Feed, AppError> {
        let title = sanitize_text_field(title);
        if title.is_empty() {
            return Err(DomainError::Validation("Feed title cannot be empty".to_string()).into());
        }

        let config = sanitize_config(raw_config);
        let feed = self.feeds.update(id, &UpdateFeed { title, config }).await?;

        tracing::info!(feed_id = %feed.id, "feed updated");
        Ok(feed)
    }

    /// Public read: look up a feed by slug and flatten its stored config.
    pub async fn read_feed(&self, slug: &str) -> Result<Map<String, Value>, AppError> {
        let slug = sanitize_key(slug);
        let feed = self
            .feeds
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Feed '{}' not found", slug)))?;

        let flat = flatten_config(&feed.config).map_err(|e| {
            tracing::error!(feed_id = %feed.id, slug = %feed.slug, "invalid stored feed config: {}", e);
            e
        })?;
        Ok(flat)
    }

    /// Load one feed for editing.
    pub async fn get_feed(&self, id: &FeedId) -> Result<Option<FeedDetail>, AppError> {
        Ok(self.feeds.find_by_id(id).await?.map(|feed| FeedDetail {
            id: feed.id,
            slug: feed.slug,
            title: feed.title,
            config: sanitize_config(&feed.config),
            created_at: feed.created_at,
            updated_at: feed.updated_at,
        }))
    }

    /// All feeds, ordered by title.
    pub async fn list_feeds(&self) -> Result<Vec<Feed>, AppError> {
        Ok(self.feeds.list().await?)
    }

    /// Delete a feed along with its configuration.
    pub async fn delete_feed(&self, id: &FeedId) -> Result<(), AppError> {
        self.feeds.delete(id).await?;
        tracing::info!(feed_id = %id, "feed deleted");
        Ok(())
    }

    /// Derive a slug from the title, appending a numeric suffix until it is
    /// unique among stored feeds.
    async fn unique_slug(&self, title: &str) -> Result<String, AppError> {
        let base = slugify(title);
        let base = if base.is_empty() {
            "feed".to_string()
        } else {
            base
        };

        if self.feeds.find_by_slug(&base).await?.is_none() {
            return Ok(base);
        }
        let mut n = 2u32;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.feeds.find_by_slug(&candidate).await?.is_none() {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}
