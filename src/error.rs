// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// A dashboard panel could not load its data.
///
/// Transport failures, non-success statuses and undecodable bodies all
/// collapse into this one kind; the message only feeds the operator log.
#[derive(Debug, thiserror::Error)]
#[error("{endpoint}: {reason}")]
pub struct FetchError {
    pub endpoint: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
            }
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "template_error")
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
