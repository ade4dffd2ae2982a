// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Kleo admin dashboard.
//!
//! Serves a statistics API over the Firestore user and card collections,
//! and an HTML dashboard whose panels each read one of those endpoints.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod panels;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::StatsClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    /// Client the dashboard panels fetch through
    pub stats_client: StatsClient,
}
