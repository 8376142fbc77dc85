//! Catalog listing command.

use clap::{Args, ValueEnum};
use tabled::{Table, Tabled, settings::Style};

use crate::{
    cli::output::usd,
    domain::catalog::{CatalogTab, tab_listing},
};

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    /// Listing tab to render
    #[arg(long, value_enum, default_value = "best")]
    tab: TabArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TabArg {
    New,
    Best,
    Top,
}

impl From<TabArg> for CatalogTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::New => CatalogTab::NewArrivals,
            TabArg::Best => CatalogTab::BestSellers,
            TabArg::Top => CatalogTab::TopRated,
        }
    }
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Individual")]
    individual: String,
    #[tabled(rename = "Bulk")]
    bulk: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

pub(crate) fn run(command: &CatalogCommand) -> Result<(), String> {
    let rows: Vec<ProductRow> = tab_listing(command.tab.into())
        .into_iter()
        .map(|p| ProductRow {
            id: p.id,
            name: p.name,
            individual: usd(p.price_individual),
            bulk: usd(p.price_bulk),
            notes: p.blurb.unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    println!("{table}");

    Ok(())
}
