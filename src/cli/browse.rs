use clap::Parser;

use crate::{
    catalog::{CcRange, Filter, SortOrder},
    cli::paths::CatalogArgs,
    prelude::*,
    tables::build_bikes_table,
};

#[derive(Parser)]
pub struct BrowseArgs {
    #[clap(flatten)]
    catalog: CatalogArgs,

    /// Engine displacement band.
    #[clap(long = "cc")]
    cc_range: Option<CcRange>,

    /// Engine type, for example `Single Cylinder`.
    #[clap(long)]
    engine_type: Option<String>,

    #[clap(long, default_value = "price-low")]
    sort: SortOrder,

    /// Also list rented bikes and bikes under maintenance.
    #[clap(long)]
    all: bool,
}

impl BrowseArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let catalog = self.catalog.read()?;
        let filter = Filter::builder()
            .maybe_cc_range(self.cc_range)
            .maybe_engine_type(self.engine_type)
            .include_unavailable(self.all)
            .sort(self.sort)
            .build();
        let bikes = catalog.browse(&filter);
        info!(n_bikes = bikes.len(), "found");
        if bikes.is_empty()
            && let Some(engine_type) = &filter.engine_type
        {
            warn!(%engine_type, known = ?catalog.engine_types(), "no bikes with this engine type");
        }
        println!("{}", build_bikes_table(&bikes));
        Ok(())
    }
}
