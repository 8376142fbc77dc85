//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, LocalAuthService},
    backend::{BackendClient, BackendError},
    config::AppConfig,
    domain::{
        carts::CartStore,
        checkout::{CheckoutService, HttpCheckoutService},
        coupons::{CouponsService, HttpCouponsService},
    },
    storage::FileRecordStore,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to initialise the backend client")]
    Backend(#[source] BackendError),
}

/// Wired service handles for one storefront invocation.
#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub cart: CartStore,
    pub coupons: Arc<dyn CouponsService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub pricing: roastery::config::PricingConfig,
}

impl AppContext {
    /// Builds the application context from configuration.
    ///
    /// The durable store (users, session) and the session-scoped store
    /// (pending add, cart) live as separate files under the data
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let backend =
            Arc::new(BackendClient::new(&config.backend_url).map_err(AppInitError::Backend)?);

        let durable = Arc::new(FileRecordStore::new(config.data_dir.join("auth.json")));
        let transient = Arc::new(FileRecordStore::new(config.data_dir.join("session.json")));

        Ok(Self {
            auth: Arc::new(LocalAuthService::new(durable, transient.clone())),
            cart: CartStore::new(transient),
            coupons: Arc::new(HttpCouponsService::new(backend.clone())),
            checkout: Arc::new(HttpCheckoutService::new(backend, config.pricing.clone())),
            pricing: config.pricing.clone(),
        })
    }
}
