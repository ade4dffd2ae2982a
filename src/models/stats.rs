// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wire types for the statistics API.
//!
//! The server serializes these and the dashboard panels deserialize the
//! same types, so both sides always agree on field names.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// `GET /user-count`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserCountResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_count: u64,
}

/// One row of the inactive users table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserHistoryCount {
    pub user: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub history_count: u64,
}

/// `GET /doa-users`
///
/// `total_inactive_users` is reported separately from the list; clients
/// must not assume it equals `user_history_counts.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct InactiveUsersResponse {
    pub user_history_counts: Vec<UserHistoryCount>,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_inactive_users: u64,
}

/// One element of `GET /users-with-old-published-cards` (a bare JSON array).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct OldPublishedCardUser {
    pub user: String,
    /// Unix seconds
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub last_published_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_users_field_names() {
        let body = serde_json::json!({
            "user_history_counts": [{"user": "alice", "history_count": 3}],
            "total_inactive_users": 7
        });

        let parsed: InactiveUsersResponse = serde_json::from_value(body).unwrap();

        assert_eq!(parsed.user_history_counts[0].user, "alice");
        assert_eq!(parsed.user_history_counts[0].history_count, 3);
        // Total is independent of the list length
        assert_eq!(parsed.total_inactive_users, 7);
    }

    #[test]
    fn test_user_count_rejects_negative() {
        let result: Result<UserCountResponse, _> =
            serde_json::from_str(r#"{"user_count": -1}"#);
        assert!(result.is_err());
    }
}
