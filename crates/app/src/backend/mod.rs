//! HTTP client for the mock storefront backend.

mod client;
mod types;

pub use client::{BackendClient, BackendError};
pub use types::{
    CouponPayload, DeliveryOption, NewOrder, OrderId, OrderItem, OrderPricing, PlacedOrder,
    ProductStock, UNLIMITED_STOCK,
};
