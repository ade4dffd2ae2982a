// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Card and history documents, joined to users by `slug`.

use serde::{Deserialize, Serialize};

/// A card the user has published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedCard {
    /// Owning user's slug
    pub slug: String,
    /// Publication time (Unix seconds)
    pub timestamp: i64,
}

/// A card waiting to be published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingCard {
    pub slug: String,
}

/// One entry of a user's browsing history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    pub slug: String,
}
