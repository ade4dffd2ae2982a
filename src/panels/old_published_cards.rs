// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Users whose last published card has gone stale.

use super::Panel;
use crate::error::FetchError;
use crate::models::OldPublishedCardUser;
use crate::services::StatsClient;
use crate::time_utils::format_unix_seconds;
use askama::Template;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OldPublishedCardUsersView {
    pub rows: Vec<OldPublishedCardUser>,
}

struct DisplayRow<'a> {
    user: &'a str,
    last_published_at: String,
}

#[derive(Template)]
#[template(path = "panels/old_published_cards.html")]
struct OldPublishedCardsTemplate<'a> {
    rows: Vec<DisplayRow<'a>>,
}

pub struct OldPublishedCardUsersPanel;

impl Panel for OldPublishedCardUsersPanel {
    type View = OldPublishedCardUsersView;

    const NAME: &'static str = "old_published_cards";

    async fn fetch(client: StatsClient) -> Result<OldPublishedCardUsersView, FetchError> {
        let rows = client.get_old_published_card_users().await?;
        Ok(OldPublishedCardUsersView { rows })
    }

    fn render(view: &OldPublishedCardUsersView) -> askama::Result<String> {
        let rows = view
            .rows
            .iter()
            .map(|r| DisplayRow {
                user: &r.user,
                last_published_at: format_unix_seconds(r.last_published_at),
            })
            .collect();

        OldPublishedCardsTemplate { rows }.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_formats_timestamp() {
        let view = OldPublishedCardUsersView {
            rows: vec![OldPublishedCardUser {
                user: "carol".to_string(),
                last_published_at: 1_609_459_200,
            }],
        };

        let html = OldPublishedCardUsersPanel::render(&view).unwrap();

        assert!(html.contains("carol"));
        assert!(html.contains(&format_unix_seconds(1_609_459_200)));
        assert!(!html.contains("1609459200"));
    }

    #[test]
    fn test_render_empty_has_no_rows() {
        let html = OldPublishedCardUsersPanel::render(&Default::default()).unwrap();
        assert!(html.contains("Last Published At"));
        assert!(!html.contains("<tr class=\"row-"));
    }
}
