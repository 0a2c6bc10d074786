//! Feed domain entity
//!
//! A feed is a named collection of key/value fields exposed as one public
//! JSON endpoint, addressed by slug.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::feed_config::FeedConfig;

/// Unique identifier for a feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedId(pub Uuid);

impl FeedId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FeedId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for FeedId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FeedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named feed exposed as one public JSON endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Feed {
    pub id: FeedId,
    pub slug: String,
    pub title: String,
    /// Stored configuration blob, exactly as the storage layer returned it.
    /// The read path re-validates this before flattening, since the store
    /// could have been hand-edited behind our back.
    pub config: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create a new feed
#[derive(Debug, Clone)]
pub struct NewFeed {
    pub slug: String,
    pub title: String,
    pub config: FeedConfig,
}

/// Data applied to an existing feed on save. The slug assigned at creation
/// is not part of an update; it stays stable across title edits.
#[derive(Debug, Clone)]
pub struct UpdateFeed {
    pub title: String,
    pub config: FeedConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_id_display() {
        let id = FeedId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn feed_id_from_uuid() {
        let raw = Uuid::new_v4();
        assert_eq!(FeedId::from(raw), FeedId(raw));
    }
}
