//! Unified error types for the Feedsmith API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `ConfigFormatError`: Malformed stored feed configuration
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Stored feed configuration is not a structured record.
///
/// This distinguishes a corrupted store (hand-edited row, botched import)
/// from an empty or sparse config, which is valid and flattens cleanly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigFormatError {
    #[error("stored feed config is not a structured record (got {0})")]
    NotARecord(&'static str),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Feed config error: {0}")]
    ConfigFormat(#[from] ConfigFormatError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            // Logged with feed context at the service layer; the public body
            // stays generic.
            AppError::ConfigFormat(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error retrieving feed configuration",
                None,
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
