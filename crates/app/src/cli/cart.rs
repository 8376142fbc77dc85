//! Cart commands: the guarded add plus line mutations.

use clap::{Args, Subcommand, ValueEnum};
use tabled::{Table, Tabled, settings::Style};

use roastery::lines::PurchaseMode;

use crate::{
    auth::{PendingAdd, PendingAddSource},
    cli::output::{mode_label, usd},
    context::AppContext,
    domain::catalog,
};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add a catalog product to the cart (requires a session)
    Add(AddArgs),
    /// Show cart lines and totals
    Show,
    /// Set the quantity for a product's lines
    Qty {
        product: String,
        qty: u32,
    },
    /// Switch a product's lines between pricing modes
    Mode {
        product: String,
        #[arg(value_enum)]
        mode: ModeArg,
    },
    /// Remove a product's lines
    Remove { product: String },
    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Catalog product id, e.g. `ethiopia`
    product: String,

    #[arg(long, default_value_t = 1)]
    qty: u32,

    /// Use the bulk pricing tier
    #[arg(long)]
    bulk: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ModeArg {
    Individual,
    Bulk,
}

impl From<ModeArg> for PurchaseMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Individual => PurchaseMode::Individual,
            ModeArg::Bulk => PurchaseMode::Bulk,
        }
    }
}

pub(crate) fn run(command: CartCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        CartSubcommand::Add(args) => add(args, ctx),
        CartSubcommand::Show => show(ctx),
        CartSubcommand::Qty { product, qty } => {
            mutate(ctx, |cart| cart.update_qty(&product, qty))
        }
        CartSubcommand::Mode { product, mode } => {
            mutate(ctx, |cart| cart.toggle_mode(&product, mode.into()))
        }
        CartSubcommand::Remove { product } => mutate(ctx, |cart| cart.remove(&product)),
        CartSubcommand::Clear => mutate(ctx, roastery::cart::Cart::clear),
    }
}

/// The guarded add: an unauthenticated attempt stashes the line and
/// points the visitor at the auth screen instead of touching the cart.
fn add(args: AddArgs, ctx: &AppContext) -> Result<(), String> {
    let product = catalog::product(&args.product)
        .ok_or_else(|| format!("unknown product '{}'", args.product))?;

    let mode = if args.bulk {
        PurchaseMode::Bulk
    } else {
        PurchaseMode::Individual
    };

    let line = product.to_line(args.qty, mode);

    if !ctx.auth.is_authed() {
        ctx.auth
            .stash_pending_add(&PendingAdd {
                line,
                return_to: "/products".to_owned(),
                source: PendingAddSource::ProductsPage,
            })
            .map_err(|e| e.to_string())?;

        println!(
            "Please log in first (`roastery-app auth login`). \
             Your item is saved and will be added right after login."
        );

        return Ok(());
    }

    let mut cart = ctx.cart.load().map_err(|e| e.to_string())?;

    println!(
        "Added {} x{} ({}).",
        line.name,
        line.qty,
        mode_label(line.mode)
    );

    cart.add(line);
    ctx.cart.save(&cart).map_err(|e| e.to_string())?;

    Ok(())
}

fn mutate(ctx: &AppContext, op: impl FnOnce(&mut roastery::cart::Cart)) -> Result<(), String> {
    let mut cart = ctx.cart.load().map_err(|e| e.to_string())?;

    op(&mut cart);

    ctx.cart.save(&cart).map_err(|e| e.to_string())?;

    show(ctx)
}

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Mode")]
    mode: &'static str,
    #[tabled(rename = "Qty")]
    qty: u32,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Line total")]
    total: String,
}

fn show(ctx: &AppContext) -> Result<(), String> {
    let cart = ctx.cart.load().map_err(|e| e.to_string())?;

    if cart.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    let rows: Vec<LineRow> = cart
        .lines
        .iter()
        .map(|line| LineRow {
            name: line.name.clone(),
            mode: mode_label(line.mode),
            qty: line.qty,
            unit: usd(line.unit_price()),
            total: usd(line.total(ctx.pricing.bulk_discount_percent)),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    let totals = cart.totals(&ctx.pricing);
    println!("Subtotal: {}", usd(totals.subtotal));

    if let Some(coupon) = &cart.coupon {
        println!(
            "Coupon {}: -{} (on {})",
            coupon.code,
            usd(totals.coupon_amount_on_subtotal),
            match coupon.target {
                roastery::coupons::CouponTarget::Subtotal => "subtotal",
                roastery::coupons::CouponTarget::Shipping => "shipping",
            }
        );
        println!("Subtotal after coupon: {}", usd(totals.subtotal_after_coupon));
    }

    Ok(())
}
