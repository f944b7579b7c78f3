use clap::Parser;

use crate::{
    cli::{paths::CatalogArgs, window::WindowArgs},
    core::{Quote, SelectionMode},
    prelude::*,
    tables::build_quote_table,
};

#[derive(Parser)]
pub struct QuoteArgs {
    #[clap(flatten)]
    catalog: CatalogArgs,

    /// Bike identifier from the catalog.
    #[clap(long = "bike")]
    bike_id: String,

    #[clap(flatten)]
    window: WindowArgs,

    #[clap(long = "tier", default_value = "auto")]
    mode: SelectionMode,
}

impl QuoteArgs {
    #[instrument(skip_all, fields(bike_id = %self.bike_id))]
    pub fn run(self) -> Result {
        let catalog = self.catalog.read()?;
        let bike = catalog.find(&self.bike_id)?;
        let quote = self
            .window
            .resolve()
            .and_then(|window| Quote::try_new(&bike.rates, window, self.mode))
            .context("cannot compute the price")?;
        info!(
            window = ?quote.window,
            hours = quote.duration.hours,
            tier = %quote.selection.tier,
            total = %quote.selection.total,
            "quoted",
        );
        println!("{}", build_quote_table(&bike.rates, &quote));
        if !bike.status.is_available() {
            warn!(status = %bike.status, "the bike cannot be booked right now");
        }
        Ok(())
    }
}
