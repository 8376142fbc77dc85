//! Typed fetch wrappers over the mock backend's REST endpoints.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde_json::json;
use thiserror::Error;

use super::types::{CouponPayload, DeliveryOption, NewOrder, PlacedOrder, ProductStock};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when communicating with the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid backend base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The backend returned a non-2xx response or unexpected body.
    #[error("unexpected response from backend: {0}")]
    UnexpectedResponse(String),
}

/// HTTP client for the mock storefront backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    /// Creates a client for the given base URL, e.g.
    /// `"http://localhost:5176"`. Pass a mock server's URI in tests.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL does not parse or the HTTP
    /// client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        // A trailing slash keeps joined paths under the base rather than
        // replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|_| BackendError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| BackendError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Fetches a coupon by code; `GET /coupons/{code}`.
    ///
    /// The code is lowercased before the request. A 404 means the code
    /// is invalid and maps to `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx, non-404
    /// response.
    pub async fn coupon(&self, code: &str) -> Result<Option<CouponPayload>, BackendError> {
        let url = self.endpoint(&["coupons", &code.to_lowercase()])?;

        let response = self.http.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(BackendError::UnexpectedResponse(format!(
                "coupon request failed with status {status}: {text}"
            )));
        }

        Ok(Some(response.json().await?))
    }

    /// Fetches the delivery options; `GET /deliveryOptions`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn delivery_options(&self) -> Result<Vec<DeliveryOption>, BackendError> {
        let url = self.endpoint(&["deliveryOptions"])?;

        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();

            return Err(BackendError::UnexpectedResponse(format!(
                "delivery options request failed with status {status}"
            )));
        }

        Ok(response.json().await?)
    }

    /// Persists an order; `POST /orders`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn place_order(&self, order: &NewOrder) -> Result<PlacedOrder, BackendError> {
        let url = self.endpoint(&["orders"])?;

        let response = self.http.post(url).json(order).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(BackendError::UnexpectedResponse(format!(
                "order request failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }

    /// Fetches a product for stock checks; `GET /products/{id}`.
    ///
    /// Any unsuccessful response maps to `Ok(None)`: a product the
    /// backend does not know carries unlimited stock.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn product(&self, id: &str) -> Result<Option<ProductStock>, BackendError> {
        let url = self.endpoint(&["products", id])?;

        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }

    /// Updates a product's stock; `PATCH /products/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn update_stock(&self, id: &str, stock: i64) -> Result<(), BackendError> {
        let url = self.endpoint(&["products", id])?;

        let response = self
            .http
            .patch(url)
            .json(&json!({ "stock": stock }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();

            return Err(BackendError::UnexpectedResponse(format!(
                "stock update failed with status {status}"
            )));
        }

        Ok(())
    }
}
