//! Coupon commands.

use clap::{Args, Subcommand};

use crate::{context::AppContext, domain::coupons::CouponsServiceError};

#[derive(Debug, Args)]
pub(crate) struct CouponCommand {
    #[command(subcommand)]
    command: CouponSubcommand,
}

#[derive(Debug, Subcommand)]
enum CouponSubcommand {
    /// Look up a code and activate it on the cart
    Apply { code: String },
    /// Remove the active coupon
    Clear,
}

pub(crate) async fn run(command: CouponCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        CouponSubcommand::Apply { code } => apply(&code, ctx).await,
        CouponSubcommand::Clear => clear(ctx),
    }
}

async fn apply(code: &str, ctx: &AppContext) -> Result<(), String> {
    let mut cart = ctx.cart.load().map_err(|e| e.to_string())?;

    match ctx.coupons.lookup(code).await {
        Ok(coupon) => {
            println!("Applied: {} - {}", coupon.code, coupon.description);
            cart.apply_coupon(coupon);
        }
        Err(CouponsServiceError::Invalid) => {
            // An invalid code also clears whatever was active.
            println!("Invalid coupon code");
            cart.clear_coupon();
        }
        Err(error @ CouponsServiceError::Backend(_)) => {
            println!("{error} (is the backend running?)");
            return Ok(());
        }
    }

    ctx.cart.save(&cart).map_err(|e| e.to_string())
}

fn clear(ctx: &AppContext) -> Result<(), String> {
    let mut cart = ctx.cart.load().map_err(|e| e.to_string())?;

    cart.clear_coupon();
    ctx.cart.save(&cart).map_err(|e| e.to_string())?;

    println!("Coupon removed.");

    Ok(())
}
