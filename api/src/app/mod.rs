//! Application layer
//!
//! Contains use cases and service orchestration.
//! - `sanitizer`: normalizes untrusted submissions into canonical configs
//! - `flattener`: projects stored configs into the public response shape
//! - `feed_service`: save / read / list / delete orchestration

pub mod feed_service;
pub mod flattener;
pub mod sanitizer;

pub use feed_service::{FeedDetail, FeedService};
// Re-export the pure transforms for direct consumers (tests, tooling)
#[allow(unused_imports)]
pub use flattener::flatten_config;
#[allow(unused_imports)]
pub use sanitizer::{sanitize_config, sanitize_key, sanitize_text_field};
