//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const PUBLISHED_CARDS: &str = "published_cards";
    pub const PENDING_CARDS: &str = "pending_cards";
    /// Browsing history items (one document per item)
    pub const HISTORY: &str = "history";
}
