// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod client;
pub mod stats;

pub use client::StatsClient;
pub use stats::StatsSnapshot;
