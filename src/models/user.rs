//! User model for storage.

use serde::{Deserialize, Serialize};

/// User profile stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Public handle, also used as document ID and as the join key
    /// into every card and history collection.
    pub slug: String,
}
