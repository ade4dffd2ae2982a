// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard panels.
//!
//! A panel owns one fetch and one view model. Mounting a panel spawns its
//! fetch on the runtime; the result is published through a `watch` channel
//! whose receiver is the mounted panel itself. Dropping the panel (unmount)
//! aborts the fetch, and a result that still races in finds no receiver and
//! is discarded.
//!
//! ```text
//! Initializing ──ok──▶ Loaded
//!      │
//!      └────err──▶ Failed   (rendered exactly like Initializing)
//! ```

pub mod inactive_users;
pub mod old_published_cards;
pub mod root;
pub mod user_count;

pub use inactive_users::{InactiveUsersPanel, InactiveUsersView};
pub use old_published_cards::{OldPublishedCardUsersPanel, OldPublishedCardUsersView};
pub use root::DashboardRoot;
pub use user_count::{UserCountPanel, UserCountView};

use crate::error::FetchError;
use crate::services::StatsClient;
use std::future::Future;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Lifecycle of a mounted panel. Both `Loaded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStatus {
    Initializing,
    Loaded,
    Failed,
}

impl PanelStatus {
    pub fn is_settled(self) -> bool {
        self != PanelStatus::Initializing
    }
}

/// Point-in-time copy of a panel's state.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot<V> {
    pub status: PanelStatus,
    pub view: V,
}

impl<V: Default> PanelSnapshot<V> {
    fn initial() -> Self {
        Self {
            status: PanelStatus::Initializing,
            view: V::default(),
        }
    }
}

/// One self-contained dashboard unit.
pub trait Panel: 'static {
    /// Display-ready data; `Default` is what shows until a fetch succeeds.
    type View: Default + Clone + Send + Sync + 'static;

    /// Name used in logs.
    const NAME: &'static str;

    /// Issue the panel's single read.
    fn fetch(client: StatsClient) -> impl Future<Output = Result<Self::View, FetchError>> + Send;

    /// Render the view model as an HTML fragment.
    fn render(view: &Self::View) -> askama::Result<String>;
}

/// A panel that has been mounted and owns its in-flight fetch.
pub struct MountedPanel<P: Panel> {
    state: watch::Receiver<PanelSnapshot<P::View>>,
    task: JoinHandle<()>,
}

impl<P: Panel> MountedPanel<P> {
    /// Mount the panel, starting exactly one fetch.
    pub fn mount(client: &StatsClient) -> Self {
        let (tx, rx) = watch::channel(PanelSnapshot::initial());
        let client = client.clone();

        let task = tokio::spawn(async move {
            let next = match P::fetch(client).await {
                Ok(view) => PanelSnapshot {
                    status: PanelStatus::Loaded,
                    view,
                },
                Err(e) => {
                    tracing::error!(panel = P::NAME, error = %e, "Error fetching panel data");
                    PanelSnapshot {
                        status: PanelStatus::Failed,
                        view: P::View::default(),
                    }
                }
            };

            if tx.send(next).is_err() {
                tracing::debug!(panel = P::NAME, "Panel unmounted before fetch resolved");
            }
        });

        tracing::debug!(panel = P::NAME, "Panel mounted");

        Self { state: rx, task }
    }

    pub fn status(&self) -> PanelStatus {
        self.state.borrow().status
    }

    pub fn snapshot(&self) -> PanelSnapshot<P::View> {
        self.state.borrow().clone()
    }

    /// Wait until the fetch has resolved one way or the other.
    pub async fn settled(&mut self) -> PanelStatus {
        let settled = self
            .state
            .wait_for(|s| s.status.is_settled())
            .await
            .map(|snapshot| snapshot.status);

        // Sender gone without a result: the task was aborted or panicked.
        settled.unwrap_or_else(|_| self.status())
    }

    pub fn render(&self) -> askama::Result<String> {
        P::render(&self.state.borrow().view)
    }
}

impl<P: Panel> Drop for MountedPanel<P> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
