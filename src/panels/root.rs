// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page layout holding the three panels.

use super::{
    InactiveUsersPanel, MountedPanel, OldPublishedCardUsersPanel, PanelStatus, UserCountPanel,
};
use crate::services::StatsClient;
use askama::Template;
use std::time::Duration;

const TITLE: &str = "Dashboard";

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate<'a> {
    title: &'a str,
    user_count: String,
    inactive_users: String,
    old_published_cards: String,
}

/// The dashboard page. Owns nothing but its child panels.
pub struct DashboardRoot {
    pub user_count: MountedPanel<UserCountPanel>,
    pub inactive_users: MountedPanel<InactiveUsersPanel>,
    pub old_published_cards: MountedPanel<OldPublishedCardUsersPanel>,
}

impl DashboardRoot {
    /// Mount all three panels. Their fetches run independently.
    pub fn mount(client: &StatsClient) -> Self {
        Self {
            user_count: MountedPanel::mount(client),
            inactive_users: MountedPanel::mount(client),
            old_published_cards: MountedPanel::mount(client),
        }
    }

    /// Wait up to `wait` for every panel to settle.
    ///
    /// Panels still loading when the wait runs out keep showing their
    /// defaults. Returns whether all three settled in time.
    pub async fn settle(&mut self, wait: Duration) -> bool {
        let all = futures_util::future::join3(
            self.user_count.settled(),
            self.inactive_users.settled(),
            self.old_published_cards.settled(),
        );

        match tokio::time::timeout(wait, all).await {
            Ok(statuses) => {
                tracing::debug!(?statuses, "Dashboard panels settled");
                true
            }
            Err(_) => {
                tracing::warn!(
                    wait_ms = wait.as_millis() as u64,
                    user_count = ?self.user_count.status(),
                    inactive_users = ?self.inactive_users.status(),
                    old_published_cards = ?self.old_published_cards.status(),
                    "Rendering dashboard before all panels settled"
                );
                false
            }
        }
    }

    pub fn statuses(&self) -> [PanelStatus; 3] {
        [
            self.user_count.status(),
            self.inactive_users.status(),
            self.old_published_cards.status(),
        ]
    }

    /// Render the full HTML page from whatever each panel currently holds.
    pub fn render(&self) -> askama::Result<String> {
        DashboardTemplate {
            title: TITLE,
            user_count: self.user_count.render()?,
            inactive_users: self.inactive_users.render()?,
            old_published_cards: self.old_published_cards.render()?,
        }
        .render()
    }
}
