//! Checkout service errors.

use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    /// A cart line asks for more than the backend has; checkout aborts.
    #[error("insufficient stock for \"{product}\": only {available} left")]
    InsufficientStock { product: String, available: i64 },

    /// Order placement or validation could not reach the backend.
    #[error("checkout failed")]
    Backend(#[from] BackendError),
}
