// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Total user count.

use super::Panel;
use crate::error::FetchError;
use crate::services::StatsClient;
use askama::Template;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCountView {
    pub user_count: u64,
}

#[derive(Template)]
#[template(path = "panels/user_count.html")]
struct UserCountTemplate {
    user_count: u64,
}

pub struct UserCountPanel;

impl Panel for UserCountPanel {
    type View = UserCountView;

    const NAME: &'static str = "user_count";

    async fn fetch(client: StatsClient) -> Result<UserCountView, FetchError> {
        let response = client.get_user_count().await?;
        Ok(UserCountView {
            user_count: response.user_count,
        })
    }

    fn render(view: &UserCountView) -> askama::Result<String> {
        UserCountTemplate {
            user_count: view.user_count,
        }
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_shows_zero() {
        let html = UserCountPanel::render(&UserCountView::default()).unwrap();
        assert!(html.contains("Total Users"));
        assert!(html.contains(r#"<p class="stat">0</p>"#));
    }
}
