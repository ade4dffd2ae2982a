// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The dashboard page.

use crate::error::Result;
use crate::panels::DashboardRoot;
use crate::AppState;
use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(dashboard_page))
}

/// Render the dashboard.
///
/// Every request mounts fresh panels, so each page load issues exactly one
/// fetch per panel. Panels are unmounted when the handler returns.
async fn dashboard_page(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let mut root = DashboardRoot::mount(&state.stats_client);
    root.settle(state.config.render_wait).await;

    Ok(Html(root.render()?))
}
