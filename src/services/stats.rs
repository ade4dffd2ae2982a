// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User activity statistics computed from collection snapshots.
//!
//! Every collection is joined to `users` by slug. The aggregation is pure so
//! it can be tested without a database; `FirestoreDb::load_snapshot` feeds it.

use crate::models::{
    HistoryItem, InactiveUsersResponse, OldPublishedCardUser, PendingCard, PublishedCard, User,
    UserHistoryCount,
};
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};

/// Contents of the collections the statistics are computed from.
#[derive(Debug, Clone, Default)]
pub struct StatsSnapshot {
    pub users: Vec<User>,
    pub published_cards: Vec<PublishedCard>,
    pub pending_cards: Vec<PendingCard>,
    pub history: Vec<HistoryItem>,
}

/// Per-slug lookup tables built once per snapshot.
struct SlugIndex<'a> {
    /// slug -> latest publish timestamp
    latest_published: HashMap<&'a str, i64>,
    pending: HashSet<&'a str>,
    history: HashMap<&'a str, u64>,
}

impl<'a> SlugIndex<'a> {
    fn build(snapshot: &'a StatsSnapshot) -> Self {
        let mut latest_published: HashMap<&str, i64> = HashMap::new();
        for card in &snapshot.published_cards {
            latest_published
                .entry(card.slug.as_str())
                .and_modify(|ts| *ts = (*ts).max(card.timestamp))
                .or_insert(card.timestamp);
        }

        let pending = snapshot
            .pending_cards
            .iter()
            .map(|c| c.slug.as_str())
            .collect();

        let mut history: HashMap<&str, u64> = HashMap::new();
        for item in &snapshot.history {
            *history.entry(item.slug.as_str()).or_insert(0) += 1;
        }

        Self {
            latest_published,
            pending,
            history,
        }
    }
}

/// Users who never got a card out the door: no published and no pending
/// cards. Each is reported with how many history items they have.
pub fn inactive_users(snapshot: &StatsSnapshot) -> InactiveUsersResponse {
    let index = SlugIndex::build(snapshot);

    let user_history_counts: Vec<UserHistoryCount> = snapshot
        .users
        .iter()
        .filter(|u| {
            !index.latest_published.contains_key(u.slug.as_str())
                && !index.pending.contains(u.slug.as_str())
        })
        .map(|u| UserHistoryCount {
            user: u.slug.clone(),
            history_count: index.history.get(u.slug.as_str()).copied().unwrap_or(0),
        })
        .collect();

    InactiveUsersResponse {
        total_inactive_users: user_history_counts.len() as u64,
        user_history_counts,
    }
}

/// Users with nothing pending whose most recent published card is older
/// than `cutoff`. Users who never published are not included.
///
/// Only the latest card is compared, so a user with one old and one fresh
/// card is not reported (as opposed to matching on any old card).
pub fn users_with_old_published_cards(
    snapshot: &StatsSnapshot,
    cutoff: DateTime<Utc>,
) -> Vec<OldPublishedCardUser> {
    let index = SlugIndex::build(snapshot);
    let cutoff = cutoff.timestamp();

    snapshot
        .users
        .iter()
        .filter(|u| !index.pending.contains(u.slug.as_str()))
        .filter_map(|u| {
            let &last_published_at = index.latest_published.get(u.slug.as_str())?;
            (last_published_at < cutoff).then(|| OldPublishedCardUser {
                user: u.slug.clone(),
                last_published_at,
            })
        })
        .collect()
}

/// The instant before which a user's last publication counts as stale.
pub fn stale_cutoff(now: DateTime<Utc>, stale_after_hours: i64) -> DateTime<Utc> {
    now - Duration::hours(stale_after_hours)
}
