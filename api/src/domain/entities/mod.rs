//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod feed;
pub mod feed_config;

pub use feed::{Feed, FeedId, NewFeed, UpdateFeed};
pub use feed_config::{FeedConfig, FieldEntry, ToggleEntry, ToggleState};
