//! Catalog models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use roastery::lines::{CartLine, PurchaseMode, clamp_qty};

/// A catalog product with both pricing tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price_individual: Decimal,
    pub price_bulk: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blurb: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Product {
    /// Builds the cart line for this product at the chosen quantity and
    /// mode, with the quantity clamped.
    pub fn to_line(&self, qty: u32, mode: PurchaseMode) -> CartLine {
        CartLine {
            id: self.id.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
            unit_price_individual: self.price_individual,
            unit_price_bulk: self.price_bulk,
            qty: clamp_qty(qty),
            mode,
        }
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, candidates: &[&str]) -> bool {
        self.tags
            .iter()
            .any(|tag| candidates.iter().any(|c| tag.eq_ignore_ascii_case(c)))
    }
}

/// Products-page listing tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTab {
    NewArrivals,
    BestSellers,
    TopRated,
}
