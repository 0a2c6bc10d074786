//! Mock implementations of port traits
//!
//! In-memory implementations that can be pre-populated for testing.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Feed, FeedId, NewFeed, UpdateFeed};
use crate::domain::ports::FeedRepository;
use crate::error::DomainError;

/// In-memory FeedRepository backed by hash maps
#[derive(Default)]
pub struct InMemoryFeedRepository {
    feeds: Arc<RwLock<HashMap<FeedId, Feed>>>,
    by_slug: Arc<RwLock<HashMap<String, FeedId>>>,
}

impl InMemoryFeedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a feed for testing
    pub fn with_feed(self, feed: Feed) -> Self {
        {
            let mut feeds = self.feeds.write().unwrap();
            let mut by_slug = self.by_slug.write().unwrap();

            by_slug.insert(feed.slug.clone(), feed.id);
            feeds.insert(feed.id, feed);
        }
        self
    }
}

#[async_trait]
impl FeedRepository for InMemoryFeedRepository {
    async fn find_by_id(&self, id: &FeedId) -> Result<Option<Feed>, DomainError> {
        let feeds = self.feeds.read().unwrap();
        Ok(feeds.get(id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Feed>, DomainError> {
        let by_slug = self.by_slug.read().unwrap();
        let feeds = self.feeds.read().unwrap();

        if let Some(id) = by_slug.get(slug) {
            Ok(feeds.get(id).cloned())
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> Result<Vec<Feed>, DomainError> {
        let feeds = self.feeds.read().unwrap();
        let mut all: Vec<Feed> = feeds.values().cloned().collect();
        all.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(all)
    }

    async fn create(&self, new_feed: &NewFeed) -> Result<Feed, DomainError> {
        let mut feeds = self.feeds.write().unwrap();
        let mut by_slug = self.by_slug.write().unwrap();

        // same uniqueness guarantee as the feeds.slug column
        if by_slug.contains_key(&new_feed.slug) {
            return Err(DomainError::Database(format!(
                "duplicate slug: {}",
                new_feed.slug
            )));
        }

        let now = Utc::now();
        let feed = Feed {
            id: FeedId::new(),
            slug: new_feed.slug.clone(),
            title: new_feed.title.clone(),
            config: new_feed.config.to_value(),
            created_at: now,
            updated_at: now,
        };

        by_slug.insert(feed.slug.clone(), feed.id);
        feeds.insert(feed.id, feed.clone());
        Ok(feed)
    }

    async fn update(&self, id: &FeedId, update: &UpdateFeed) -> Result<Feed, DomainError> {
        let mut feeds = self.feeds.write().unwrap();

        let feed = feeds
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Feed {} not found", id)))?;

        feed.title = update.title.clone();
        feed.config = update.config.to_value();
        feed.updated_at = Utc::now();
        Ok(feed.clone())
    }

    async fn delete(&self, id: &FeedId) -> Result<(), DomainError> {
        let mut feeds = self.feeds.write().unwrap();
        let mut by_slug = self.by_slug.write().unwrap();

        match feeds.remove(id) {
            Some(feed) => {
                by_slug.remove(&feed.slug);
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("Feed {} not found", id))),
        }
    }
}
