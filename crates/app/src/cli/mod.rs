//! Roastery storefront CLI.
//!
//! One submodule per storefront surface: catalog browsing, the auth
//! screen, the cart, coupons, and checkout.

use clap::{Parser, Subcommand};

use crate::context::AppContext;

mod auth;
mod cart;
mod catalog;
mod checkout;
mod coupon;
mod output;

#[derive(Debug, Parser)]
#[command(name = "roastery-app", about = "Roastery storefront CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog(catalog::CatalogCommand),
    /// Register, log in, or inspect the mock session
    Auth(auth::AuthCommand),
    /// Manage cart lines
    Cart(cart::CartCommand),
    /// Apply or clear a coupon
    Coupon(coupon::CouponCommand),
    /// Quote or place an order
    Checkout(checkout::CheckoutCommand),
}

impl Cli {
    /// Dispatches the parsed command against the wired services.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message for the failure that stopped the
    /// command.
    pub async fn run(self, ctx: &AppContext) -> Result<(), String> {
        match self.command {
            Commands::Catalog(command) => catalog::run(&command),
            Commands::Auth(command) => auth::run(command, ctx),
            Commands::Cart(command) => cart::run(command, ctx),
            Commands::Coupon(command) => coupon::run(command, ctx).await,
            Commands::Checkout(command) => checkout::run(command, ctx).await,
        }
    }
}
