// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use kleo_dashboard::config::Config;
use kleo_dashboard::db::FirestoreDb;
use kleo_dashboard::routes::create_router;
use kleo_dashboard::services::StatsClient;
use kleo_dashboard::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app whose panels read from `api_base_url`, backed by an
/// offline database. Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(api_base_url: &str) -> (Router, Arc<AppState>) {
    let mut config = Config::test_default();
    config.api_base_url = api_base_url.to_string();
    config.render_wait = Duration::from_secs(5);

    let state = Arc::new(AppState {
        stats_client: StatsClient::new(config.api_base_url.clone()),
        config,
        db: FirestoreDb::new_mock(),
    });

    (create_router(state.clone()), state)
}

// ─── Stub statistics backend ─────────────────────────────────────

/// What a stub endpoint answers with.
#[allow(dead_code)]
#[derive(Clone)]
pub enum StubReply {
    Json(serde_json::Value),
    Status(StatusCode),
    /// A 200 with this body labelled as JSON.
    Raw(&'static str),
    /// Never answer.
    Hang,
    /// Answer with this status after a delay.
    Delayed(Duration, StatusCode),
}

/// Per-endpoint request counters.
#[derive(Default)]
pub struct StubHits {
    pub user_count: AtomicUsize,
    pub inactive_users: AtomicUsize,
    pub old_published_cards: AtomicUsize,
}

impl StubHits {
    #[allow(dead_code)]
    pub fn total(&self) -> [usize; 3] {
        [
            self.user_count.load(Ordering::SeqCst),
            self.inactive_users.load(Ordering::SeqCst),
            self.old_published_cards.load(Ordering::SeqCst),
        ]
    }
}

pub struct StubBackend {
    pub base_url: String,
    pub hits: Arc<StubHits>,
}

impl StubBackend {
    #[allow(dead_code)]
    pub fn client(&self) -> StatsClient {
        StatsClient::new(self.base_url.clone())
    }
}

fn stub_route(
    reply: StubReply,
    hits: Arc<StubHits>,
    pick: fn(&StubHits) -> &AtomicUsize,
) -> MethodRouter {
    get(move || {
        let reply = reply.clone();
        let hits = hits.clone();
        async move {
            pick(&hits).fetch_add(1, Ordering::SeqCst);
            match reply {
                StubReply::Json(value) => Json(value).into_response(),
                StubReply::Status(status) => status.into_response(),
                StubReply::Raw(body) => {
                    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
                }
                StubReply::Hang => std::future::pending::<Response>().await,
                StubReply::Delayed(delay, status) => {
                    tokio::time::sleep(delay).await;
                    status.into_response()
                }
            }
        }
    })
}

/// Serve the three statistics endpoints on an ephemeral local port.
#[allow(dead_code)]
pub async fn spawn_stub_backend(
    user_count: StubReply,
    inactive_users: StubReply,
    old_published_cards: StubReply,
) -> StubBackend {
    let hits = Arc::new(StubHits::default());

    let app = Router::new()
        .route(
            "/user-count",
            stub_route(user_count, hits.clone(), |h| &h.user_count),
        )
        .route(
            "/doa-users",
            stub_route(inactive_users, hits.clone(), |h| &h.inactive_users),
        )
        .route(
            "/users-with-old-published-cards",
            stub_route(old_published_cards, hits.clone(), |h| &h.old_published_cards),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Stub backend has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub backend failed");
    });

    StubBackend {
        base_url: format!("http://{}", addr),
        hits,
    }
}

/// Responses matching the documented examples.
#[allow(dead_code)]
pub async fn spawn_happy_backend() -> StubBackend {
    spawn_stub_backend(
        StubReply::Json(serde_json::json!({ "user_count": 42 })),
        StubReply::Json(serde_json::json!({
            "user_history_counts": [
                { "user": "alice", "history_count": 3 },
                { "user": "bob", "history_count": 0 }
            ],
            "total_inactive_users": 2
        })),
        StubReply::Json(serde_json::json!([
            { "user": "carol", "last_published_at": 1609459200 }
        ])),
    )
    .await
}
