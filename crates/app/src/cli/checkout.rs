//! Checkout commands: quote the breakdown, place the order.

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use roastery::checkout::{CheckoutQuote, DeliveryMode, QuoteInputs, quote};

use crate::{
    backend::DeliveryOption,
    cli::output::usd,
    context::AppContext,
    domain::checkout::{CheckoutServiceError, build_order},
};

#[derive(Debug, Args)]
pub(crate) struct CheckoutCommand {
    #[command(subcommand)]
    command: CheckoutSubcommand,
}

#[derive(Debug, Subcommand)]
enum CheckoutSubcommand {
    /// Show the price breakdown without ordering
    Quote(QuoteArgs),
    /// Validate stock and place the order
    Place(QuoteArgs),
}

#[derive(Debug, Args)]
struct QuoteArgs {
    /// Pick the order up in store; no delivery fee applies
    #[arg(long)]
    pickup: bool,

    /// Delivery option id; defaults to the first one offered
    #[arg(long)]
    delivery_option: Option<String>,

    /// Preset tip as a percentage of the subtotal after coupon
    #[arg(long, default_value_t = 0)]
    tip_percent: u32,

    /// Custom tip amount; overrides the preset
    #[arg(long)]
    tip: Option<Decimal>,

    /// Redeem stored credits against this order
    #[arg(long)]
    use_credits: bool,
}

pub(crate) async fn run(command: CheckoutCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        CheckoutSubcommand::Quote(args) => quote_only(args, ctx).await,
        CheckoutSubcommand::Place(args) => place(args, ctx).await,
    }
}

async fn prepare(
    args: &QuoteArgs,
    ctx: &AppContext,
) -> Result<Option<(roastery::cart::Cart, CheckoutQuote, DeliveryMode)>, String> {
    let cart = ctx.cart.load().map_err(|e| e.to_string())?;

    if cart.is_empty() {
        println!("Your cart is empty.");
        return Ok(None);
    }

    let options = ctx.checkout.delivery_options().await;
    let option = select_option(args, &options)?;

    let delivery_mode = if args.pickup {
        DeliveryMode::Pickup
    } else {
        DeliveryMode::Delivery
    };

    let inputs = QuoteInputs {
        delivery_mode,
        delivery_fee: option.fee,
        tip_preset_percent: Decimal::from(args.tip_percent),
        tip_custom: args.tip,
        use_credits: args.use_credits,
    };

    let breakdown = quote(&cart, &ctx.pricing, &inputs);
    render(&breakdown, delivery_mode, option);

    Ok(Some((cart, breakdown, delivery_mode)))
}

fn select_option<'a>(
    args: &QuoteArgs,
    options: &'a [DeliveryOption],
) -> Result<&'a DeliveryOption, String> {
    match &args.delivery_option {
        Some(id) => options
            .iter()
            .find(|o| o.id == *id)
            .ok_or_else(|| format!("unknown delivery option '{id}'")),
        None => options
            .first()
            .ok_or_else(|| "no delivery options available".to_owned()),
    }
}

async fn quote_only(args: QuoteArgs, ctx: &AppContext) -> Result<(), String> {
    prepare(&args, ctx).await.map(|_| ())
}

async fn place(args: QuoteArgs, ctx: &AppContext) -> Result<(), String> {
    let Some((cart, breakdown, delivery_mode)) = prepare(&args, ctx).await? else {
        return Ok(());
    };

    let order = build_order(&cart, &breakdown, delivery_mode);

    match ctx.checkout.place_order(order).await {
        Ok(placed) => {
            // The order is in; drop the cart and its coupon together.
            ctx.cart.reset().map_err(|e| e.to_string())?;

            match placed.id {
                Some(id) => println!("Order placed! Reference: {id}."),
                None => println!("Order placed!"),
            }

            Ok(())
        }
        Err(error @ CheckoutServiceError::InsufficientStock { .. }) => Err(error.to_string()),
        Err(CheckoutServiceError::Backend(error)) => {
            tracing::debug!(%error, "order placement failed");

            Err("Checkout failed. Please try again.".to_owned())
        }
    }
}

fn render(breakdown: &CheckoutQuote, delivery_mode: DeliveryMode, option: &DeliveryOption) {
    println!("Subtotal:              {}", usd(breakdown.subtotal));

    if breakdown.coupon_amount_on_subtotal > Decimal::ZERO {
        println!(
            "Coupon on subtotal:   -{}",
            usd(breakdown.coupon_amount_on_subtotal)
        );
        println!(
            "Subtotal after coupon: {}",
            usd(breakdown.subtotal_after_coupon)
        );
    }

    match delivery_mode {
        DeliveryMode::Delivery => {
            if breakdown.shipping_coupon_amount > Decimal::ZERO {
                println!(
                    "Delivery ({}):         {} after -{} coupon",
                    option.label,
                    usd(breakdown.delivery_fee_after_coupon),
                    usd(breakdown.shipping_coupon_amount)
                );
            } else {
                println!(
                    "Delivery ({}):         {}",
                    option.label,
                    usd(breakdown.delivery_fee_after_coupon)
                );
            }
        }
        DeliveryMode::Pickup => println!("Pickup:                free"),
    }

    if breakdown.tip > Decimal::ZERO {
        println!("Tip:                   {}", usd(breakdown.tip));
    }

    println!("Service fee:           {}", usd(breakdown.service_fee));
    println!("Tax:                   {}", usd(breakdown.tax));

    if breakdown.credits > Decimal::ZERO {
        println!("Credits:              -{}", usd(breakdown.credits));
    }

    println!("Total payable:         {}", usd(breakdown.total_payable));
}
