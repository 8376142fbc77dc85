//! Auth data models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use roastery::lines::CartLine;

/// User record kept in the durable store.
///
/// Demo scope: the password is stored as entered, matching the mock
/// backend it stands in for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub full_name: String,
    /// Email as entered.
    pub email: String,
    /// Lowercased email used for lookups.
    pub email_lower: String,
    pub password: String,
    pub created_at: Timestamp,
}

/// The single active session record; its presence means "authenticated".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub started_at: Timestamp,
}

/// Where a deferred add-to-cart originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingAddSource {
    #[serde(rename = "products-page")]
    ProductsPage,
    #[serde(rename = "home-products-grid")]
    HomeProductsGrid,
}

/// A deferred add-to-cart awaiting authentication.
///
/// Stashed when an unauthenticated visitor tries to add to the cart;
/// consumed exactly once after login. A later stash replaces an earlier
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingAdd {
    pub line: CartLine,
    /// Path to return to after login.
    pub return_to: String,
    pub source: PendingAddSource,
}
