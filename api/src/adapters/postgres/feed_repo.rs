//! PostgreSQL adapter for FeedRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Feed, FeedId, NewFeed, UpdateFeed};
use crate::domain::ports::FeedRepository;
use crate::entity::feeds;
use crate::error::DomainError;

/// PostgreSQL implementation of FeedRepository
pub struct PostgresFeedRepository {
    db: DatabaseConnection,
}

impl PostgresFeedRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeedRepository for PostgresFeedRepository {
    async fn find_by_id(&self, id: &FeedId) -> Result<Option<Feed>, DomainError> {
        let result = feeds::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Feed>, DomainError> {
        let result = feeds::Entity::find()
            .filter(feeds::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self) -> Result<Vec<Feed>, DomainError> {
        let results = feeds::Entity::find()
            .order_by_asc(feeds::Column::Title)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, feed: &NewFeed) -> Result<Feed, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = feeds::ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(feed.slug.clone()),
            title: Set(feed.title.clone()),
            config: Set(feed.config.to_value()),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, id: &FeedId, update: &UpdateFeed) -> Result<Feed, DomainError> {
        let existing = feeds::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Feed {} not found", id)))?;

        let mut model = existing.into_active_model();
        model.title = Set(update.title.clone());
        model.config = Set(update.config.to_value());
        model.updated_at = Set(Some(Utc::now().fixed_offset()));

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &FeedId) -> Result<(), DomainError> {
        let result = feeds::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Feed {} not found", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<feeds::Model> for Feed {
    fn from(model: feeds::Model) -> Self {
        Feed {
            id: FeedId(model.id),
            slug: model.slug,
            title: model.title,
            config: model.config,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
            updated_at: model
                .updated_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
