//! Feed handlers
//!
//! The public read endpoint plus the admin CRUD endpoints. Authentication
//! for the admin routes is delegated to the hosting deployment (reverse
//! proxy or gateway); this service only enforces the data contract.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::app::FeedDetail;
use crate::domain::entities::{Feed, FeedConfig, FeedId};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or updating a feed
#[derive(Debug, Deserialize)]
pub struct SaveFeedRequest {
    pub title: String,
    /// Raw, untrusted configuration tree; the sanitizer shapes it
    #[serde(default)]
    pub config: Value,
}

/// One feed in the admin list
#[derive(Debug, Serialize)]
pub struct FeedSummaryResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Feed> for FeedSummaryResponse {
    fn from(feed: Feed) -> Self {
        FeedSummaryResponse {
            id: feed.id.to_string(),
            slug: feed.slug,
            title: feed.title,
            created_at: feed.created_at.to_rfc3339(),
            updated_at: feed.updated_at.to_rfc3339(),
        }
    }
}

/// A feed loaded for editing, config included
#[derive(Debug, Serialize)]
pub struct FeedDetailResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub config: FeedConfig,
    pub created_at: String,
    pub updated_at: String,
}

impl From<FeedDetail> for FeedDetailResponse {
    fn from(detail: FeedDetail) -> Self {
        FeedDetailResponse {
            id: detail.id.to_string(),
            slug: detail.slug,
            title: detail.title,
            config: detail.config,
            created_at: detail.created_at.to_rfc3339(),
            updated_at: detail.updated_at.to_rfc3339(),
        }
    }
}

/// GET /feeds/:slug
///
/// Serve a feed's flattened configuration as a public JSON object.
pub async fn get_feed(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let data = state.feed_service.read_feed(&slug).await?;
    Ok(Json(data))
}

/// GET /admin/feeds
///
/// List all feeds, ordered by title.
pub async fn list_feeds(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeedSummaryResponse>>, AppError> {
    let feeds = state.feed_service.list_feeds().await?;
    Ok(Json(feeds.into_iter().map(Into::into).collect()))
}

/// POST /admin/feeds
///
/// Create a feed from an untrusted submission.
pub async fn create_feed(
    State(state): State<AppState>,
    Json(request): Json<SaveFeedRequest>,
) -> Result<(StatusCode, Json<FeedSummaryResponse>), AppError> {
    let feed = state
        .feed_service
        .create_feed(&request.title, &request.config)
        .await?;
    Ok((StatusCode::CREATED, Json(feed.into())))
}

/// GET /admin/feeds/:id
///
/// Load one feed for editing.
pub async fn get_feed_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeedDetailResponse>, AppError> {
    let detail = state
        .feed_service
        .get_feed(&FeedId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Feed {} not found", id)))?;
    Ok(Json(detail.into()))
}

/// PUT /admin/feeds/:id
///
/// Replace a feed's title and configuration.
pub async fn update_feed(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SaveFeedRequest>,
) -> Result<Json<FeedSummaryResponse>, AppError> {
    let feed = state
        .feed_service
        .update_feed(&FeedId(id), &request.title, &request.config)
        .await?;
    Ok(Json(feed.into()))
}

/// DELETE /admin/feeds/:id
///
/// Delete a feed and its configuration.
pub async fn delete_feed(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.feed_service.delete_feed(&FeedId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
