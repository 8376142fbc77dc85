//! Coupons service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use roastery::coupons::ActiveCoupon;

use crate::{backend::BackendClient, domain::coupons::errors::CouponsServiceError};

/// Coupon lookup backed by the mock backend.
#[derive(Debug, Clone)]
pub struct HttpCouponsService {
    backend: Arc<BackendClient>,
}

impl HttpCouponsService {
    #[must_use]
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl CouponsService for HttpCouponsService {
    #[tracing::instrument(skip(self))]
    async fn lookup(&self, code: &str) -> Result<ActiveCoupon, CouponsServiceError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CouponsServiceError::Invalid);
        }

        let payload = self
            .backend
            .coupon(code)
            .await
            .map_err(CouponsServiceError::Backend)?
            .ok_or(CouponsServiceError::Invalid)?;

        // A document without a code is not a coupon.
        if payload.code.is_empty() {
            return Err(CouponsServiceError::Invalid);
        }

        Ok(payload.into_coupon())
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Resolves a coupon code to the coupon to activate.
    async fn lookup(&self, code: &str) -> Result<ActiveCoupon, CouponsServiceError>;
}
