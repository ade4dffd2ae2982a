// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Users with no published or pending cards, with their history counts.

use super::Panel;
use crate::error::FetchError;
use crate::models::UserHistoryCount;
use crate::services::StatsClient;
use askama::Template;

/// Rows and total exactly as the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InactiveUsersView {
    pub rows: Vec<UserHistoryCount>,
    pub total: u64,
}

#[derive(Template)]
#[template(path = "panels/inactive_users.html")]
struct InactiveUsersTemplate<'a> {
    total: u64,
    rows: &'a [UserHistoryCount],
}

pub struct InactiveUsersPanel;

impl Panel for InactiveUsersPanel {
    type View = InactiveUsersView;

    const NAME: &'static str = "inactive_users";

    async fn fetch(client: StatsClient) -> Result<InactiveUsersView, FetchError> {
        let response = client.get_inactive_users().await?;
        Ok(InactiveUsersView {
            rows: response.user_history_counts,
            total: response.total_inactive_users,
        })
    }

    fn render(view: &InactiveUsersView) -> askama::Result<String> {
        InactiveUsersTemplate {
            total: view.total,
            rows: &view.rows,
        }
        .render()
    }
}
