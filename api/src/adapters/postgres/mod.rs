//! PostgreSQL adapters

pub mod feed_repo;

pub use feed_repo::PostgresFeedRepository;
