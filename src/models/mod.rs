// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod card;
pub mod stats;
pub mod user;

pub use card::{HistoryItem, PendingCard, PublishedCard};
pub use stats::{InactiveUsersResponse, OldPublishedCardUser, UserCountResponse, UserHistoryCount};
pub use user::User;
