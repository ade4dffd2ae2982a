// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides read access to the collections the statistics API aggregates:
//! - Users
//! - Published and pending cards
//! - History items
//!
//! Write helpers exist for seeding data (tests, local development).

use crate::db::collections;
use crate::error::AppError;
use crate::models::{HistoryItem, PendingCard, PublishedCard, User};
use crate::services::stats::StatsSnapshot;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Result row of the users count aggregation.
#[derive(Debug, Deserialize)]
struct UserCountAggregate {
    user_count: u64,
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // The emulator rejects real credentials, so use an unauthenticated connection.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Reads ───────────────────────────────────────────────────

    /// List all users, ordered by slug.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .order_by([("slug", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count documents in the users collection.
    ///
    /// Runs a server-side aggregation, so every document is counted whether
    /// or not it carries a `slug`.
    pub async fn count_users(&self) -> Result<u64, AppError> {
        let counts: Vec<UserCountAggregate> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .aggregate(|a| a.fields([a.field("user_count").count()]))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(counts.first().map_or(0, |c| c.user_count))
    }

    pub async fn list_published_cards(&self) -> Result<Vec<PublishedCard>, AppError> {
        self.list_all(collections::PUBLISHED_CARDS).await
    }

    pub async fn list_pending_cards(&self) -> Result<Vec<PendingCard>, AppError> {
        self.list_all(collections::PENDING_CARDS).await
    }

    pub async fn list_history(&self) -> Result<Vec<HistoryItem>, AppError> {
        self.list_all(collections::HISTORY).await
    }

    /// Read every collection the statistics aggregate over.
    ///
    /// The four reads run concurrently; the first failure wins.
    pub async fn load_snapshot(&self) -> Result<StatsSnapshot, AppError> {
        let (users, published_cards, pending_cards, history) = tokio::try_join!(
            self.list_users(),
            self.list_published_cards(),
            self.list_pending_cards(),
            self.list_history(),
        )?;

        tracing::debug!(
            users = users.len(),
            published_cards = published_cards.len(),
            pending_cards = pending_cards.len(),
            history = history.len(),
            "Loaded stats snapshot"
        );

        Ok(StatsSnapshot {
            users,
            published_cards,
            pending_cards,
            history,
        })
    }

    // ─── Writes ──────────────────────────────────────────────────

    /// Create or update a user (document ID is the slug).
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        self.upsert_document(collections::USERS, &user.slug, user).await
    }

    pub async fn upsert_published_card(
        &self,
        card_id: &str,
        card: &PublishedCard,
    ) -> Result<(), AppError> {
        self.upsert_document(collections::PUBLISHED_CARDS, card_id, card)
            .await
    }

    pub async fn upsert_pending_card(
        &self,
        card_id: &str,
        card: &PendingCard,
    ) -> Result<(), AppError> {
        self.upsert_document(collections::PENDING_CARDS, card_id, card).await
    }

    pub async fn upsert_history_item(
        &self,
        item_id: &str,
        item: &HistoryItem,
    ) -> Result<(), AppError> {
        self.upsert_document(collections::HISTORY, item_id, item).await
    }

    // ─── Helper Methods ────────────────────────────────────────────

    async fn list_all<T>(&self, collection: &str) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.get_client()?
            .fluent()
            .select()
            .from(collection)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update an arbitrary document.
    pub async fn upsert_document<T>(
        &self,
        collection: &str,
        doc_id: &str,
        object: &T,
    ) -> Result<(), AppError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collection)
            .document_id(doc_id)
            .object(object)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
