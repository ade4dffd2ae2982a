// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Statistics API routes.

use crate::error::Result;
use crate::models::{InactiveUsersResponse, OldPublishedCardUser, UserCountResponse};
use crate::services::client::{INACTIVE_USERS_PATH, OLD_PUBLISHED_CARDS_PATH, USER_COUNT_PATH};
use crate::services::stats;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Statistics routes (read-only, unauthenticated).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(USER_COUNT_PATH, get(get_user_count))
        .route(INACTIVE_USERS_PATH, get(get_inactive_users))
        .route(OLD_PUBLISHED_CARDS_PATH, get(get_users_with_old_published_cards))
}

/// Count all users.
async fn get_user_count(State(state): State<Arc<AppState>>) -> Result<Json<UserCountResponse>> {
    let user_count = state.db.count_users().await?;
    tracing::debug!(user_count, "Counted users");

    Ok(Json(UserCountResponse { user_count }))
}

/// Users with no published and no pending cards ("dead on arrival").
async fn get_inactive_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InactiveUsersResponse>> {
    let snapshot = state.db.load_snapshot().await?;
    let response = stats::inactive_users(&snapshot);

    tracing::debug!(
        total_inactive_users = response.total_inactive_users,
        "Computed inactive users"
    );

    Ok(Json(response))
}

/// Users with nothing pending whose last published card is stale.
async fn get_users_with_old_published_cards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OldPublishedCardUser>>> {
    let cutoff = stats::stale_cutoff(chrono::Utc::now(), state.config.stale_card_hours);
    let snapshot = state.db.load_snapshot().await?;
    let users = stats::users_with_old_published_cards(&snapshot, cutoff);

    tracing::debug!(
        count = users.len(),
        cutoff = %crate::time_utils::format_utc_rfc3339(cutoff),
        "Computed users with old published cards"
    );

    Ok(Json(users))
}
