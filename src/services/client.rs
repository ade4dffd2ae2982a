// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Statistics API client used by the dashboard panels.
//!
//! Every call is a single GET with no retry. Transport errors, non-success
//! statuses and undecodable bodies are all reported as [`FetchError`].

use crate::error::FetchError;
use crate::models::{InactiveUsersResponse, OldPublishedCardUser, UserCountResponse};
use serde::de::DeserializeOwned;

pub const USER_COUNT_PATH: &str = "/user-count";
pub const INACTIVE_USERS_PATH: &str = "/doa-users";
pub const OLD_PUBLISHED_CARDS_PATH: &str = "/users-with-old-published-cards";

/// Statistics API client.
#[derive(Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    base_url: String,
}

impl StatsClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_user_count(&self) -> Result<UserCountResponse, FetchError> {
        self.get_json(USER_COUNT_PATH).await
    }

    pub async fn get_inactive_users(&self) -> Result<InactiveUsersResponse, FetchError> {
        self.get_json(INACTIVE_USERS_PATH).await
    }

    pub async fn get_old_published_card_users(
        &self,
    ) -> Result<Vec<OldPublishedCardUser>, FetchError> {
        self.get_json(OLD_PUBLISHED_CARDS_PATH).await
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::new(path, e))?;

        self.check_response_json(path, response).await
    }

    /// Check response status and parse JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, FetchError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::new(path, format!("HTTP {}: {}", status, body)));
        }

        // Read the body first so decode errors can be told apart from
        // transport errors in the log.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::new(path, e))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::new(path, format!("Invalid JSON: {}", e)))
    }
}
