//! Checkout service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use roastery::{
    cart::Cart,
    checkout::{CheckoutQuote, DeliveryMode},
    config::PricingConfig,
};

use crate::{
    backend::{
        BackendClient, DeliveryOption, NewOrder, OrderItem, OrderPricing, PlacedOrder,
        UNLIMITED_STOCK,
    },
    domain::checkout::errors::CheckoutServiceError,
};

/// Assembles the order payload the backend expects from the cart and
/// its quote.
pub fn build_order(cart: &Cart, quote: &CheckoutQuote, delivery_mode: DeliveryMode) -> NewOrder {
    let items = cart
        .lines
        .iter()
        .map(|line| OrderItem {
            id: line.id.clone(),
            qty: line.qty,
        })
        .collect();

    NewOrder {
        items,
        pricing: OrderPricing {
            sub_total: quote.subtotal,
            sub_total_after_coupon: quote.subtotal_after_coupon,
            delivery_mode,
            delivery_fee: quote.delivery_fee_after_coupon,
            tip: quote.tip,
            service_fee: quote.service_fee,
            tax: quote.tax,
            credits: quote.credits,
            coupon: cart.coupon.clone(),
            total: quote.total_payable,
        },
        created_at: Timestamp::now(),
    }
}

/// Checkout orchestration over the mock backend.
#[derive(Debug, Clone)]
pub struct HttpCheckoutService {
    backend: Arc<BackendClient>,
    pricing: PricingConfig,
}

impl HttpCheckoutService {
    #[must_use]
    pub fn new(backend: Arc<BackendClient>, pricing: PricingConfig) -> Self {
        Self { backend, pricing }
    }

    /// Lowers a product's stock by the ordered quantity, clamped at zero.
    async fn decrement_stock(&self, item: &OrderItem) {
        let product = match self.backend.product(&item.id).await {
            Ok(Some(product)) => product,
            Ok(None) => return,
            Err(error) => {
                tracing::warn!(product = %item.id, %error, "skipping stock decrement");
                return;
            }
        };

        let Some(stock) = product.stock else {
            return;
        };

        let next = (stock - i64::from(item.qty)).max(0);

        if let Err(error) = self.backend.update_stock(&item.id, next).await {
            tracing::warn!(product = %item.id, %error, "stock decrement failed");
        }
    }
}

#[async_trait]
impl CheckoutService for HttpCheckoutService {
    #[tracing::instrument(skip(self))]
    async fn delivery_options(&self) -> Vec<DeliveryOption> {
        match self.backend.delivery_options().await {
            Ok(options) if !options.is_empty() => options,
            Ok(_) | Err(_) => {
                tracing::warn!("delivery options unavailable; using the default fee");

                vec![DeliveryOption {
                    id: "standard".to_owned(),
                    label: "Standard delivery".to_owned(),
                    fee: self.pricing.default_delivery_fee,
                }]
            }
        }
    }

    #[tracing::instrument(skip(self, order), fields(item_count = order.items.len()))]
    async fn place_order(&self, order: NewOrder) -> Result<PlacedOrder, CheckoutServiceError> {
        // Validate every line before touching the order collection. A
        // product the backend does not know counts as unlimited stock.
        for item in &order.items {
            let Some(product) = self.backend.product(&item.id).await? else {
                continue;
            };

            let available = product.stock.unwrap_or(UNLIMITED_STOCK);

            if i64::from(item.qty) > available {
                return Err(CheckoutServiceError::InsufficientStock {
                    product: product.name,
                    available,
                });
            }
        }

        let placed = self.backend.place_order(&order).await?;

        // Best-effort decrement; the order stands even when this fails.
        for item in &order.items {
            self.decrement_stock(item).await;
        }

        Ok(placed)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Delivery options for this checkout session, falling back to the
    /// default fee when the fetch fails or returns nothing.
    async fn delivery_options(&self) -> Vec<DeliveryOption>;

    /// Validates stock, persists the order, then decrements stock per
    /// line. The caller clears the cart and coupon on success.
    async fn place_order(&self, order: NewOrder) -> Result<PlacedOrder, CheckoutServiceError>;
}
