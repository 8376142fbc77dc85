//! The demo product catalog.

mod data;
mod models;

pub use data::{TAB_SIZE, demo_products, product, tab_listing};
pub use models::{CatalogTab, Product};
