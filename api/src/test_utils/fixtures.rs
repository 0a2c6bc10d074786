//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::{Feed, FeedConfig, FeedId, FieldEntry, ToggleEntry, ToggleState};

/// Create a test config with one entry in every category
pub fn test_config() -> FeedConfig {
    let mut config = FeedConfig::default();
    config.text_fields.insert(
        "0".to_string(),
        FieldEntry {
            key: "headline".to_string(),
            value: "Hello".to_string(),
        },
    );
    config.media_fields.insert(
        "0".to_string(),
        FieldEntry {
            key: "hero".to_string(),
            value: "https://cdn.example.com/hero.png".to_string(),
        },
    );
    config.toggles.insert(
        "0".to_string(),
        ToggleEntry {
            key: "live".to_string(),
            value: ToggleState::On,
        },
    );
    config
}

/// Create a test feed with default values
pub fn test_feed() -> Feed {
    Feed {
        id: FeedId(Uuid::new_v4()),
        slug: "test-feed".to_string(),
        title: "Test Feed".to_string(),
        config: test_config().to_value(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Create a test feed with a specific slug and title
pub fn test_feed_named(slug: &str, title: &str) -> Feed {
    Feed {
        id: FeedId(Uuid::new_v4()),
        slug: slug.to_string(),
        title: title.to_string(),
        config: test_config().to_value(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Create a test feed whose stored config is an arbitrary value, for
/// exercising reads against corrupted store contents
pub fn test_feed_with_config(config: Value) -> Feed {
    Feed {
        id: FeedId(Uuid::new_v4()),
        slug: "test-feed".to_string(),
        title: "Test Feed".to_string(),
        config,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
