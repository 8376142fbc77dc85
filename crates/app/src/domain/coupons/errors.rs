//! Coupons service errors.

use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum CouponsServiceError {
    /// The code does not name a coupon; the caller clears any active one.
    #[error("invalid coupon code")]
    Invalid,

    /// The backend could not be reached; the active coupon stays as-is.
    #[error("could not verify coupon")]
    Backend(#[source] BackendError),
}
