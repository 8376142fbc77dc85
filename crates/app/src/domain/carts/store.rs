//! The persisted cart record.
//!
//! The original storefront keeps the cart in page memory; a
//! command-driven client has no resident memory, so the cart lives in
//! the session-scoped record store between commands.

use std::sync::Arc;

use roastery::cart::Cart;

use crate::storage::{RecordStore, StorageError};

/// Transient-store key holding the cart state.
pub const CART_KEY: &str = "cart_state";

/// Loads and saves the cart record.
#[derive(Clone)]
pub struct CartStore {
    store: Arc<dyn RecordStore>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore").finish_non_exhaustive()
    }
}

impl CartStore {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// The persisted cart; a missing or corrupted record reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read.
    pub fn load(&self) -> Result<Cart, StorageError> {
        let cart = match self.store.get(CART_KEY)? {
            Some(value) => serde_json::from_value(value).unwrap_or_default(),
            None => Cart::default(),
        };

        Ok(cart)
    }

    /// Persists the cart, replacing the previous record.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be written.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        self.store.put(CART_KEY, serde_json::to_value(cart)?)
    }

    /// Drops the cart record entirely.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be written.
    pub fn reset(&self) -> Result<(), StorageError> {
        self.store.remove(CART_KEY)
    }
}
