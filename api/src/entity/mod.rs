//! SeaORM table models
//!
//! Database-facing models, kept separate from the pure domain entities in
//! `domain::entities`.

pub mod feeds;
