use std::path::PathBuf;

use clap::Parser;

use crate::{booking::JsonLinesLog, catalog::Catalog, prelude::*};

#[derive(Parser)]
pub struct CatalogArgs {
    /// TOML file with the `[[bikes]]` to rent out.
    #[clap(id = "catalog", long = "catalog", env = "CATALOG_PATH", default_value = "catalog.toml")]
    path: PathBuf,
}

impl CatalogArgs {
    pub fn read(&self) -> Result<Catalog> {
        Catalog::read_from(&self.path)
    }
}

#[derive(Parser)]
pub struct LeadsLogArgs {
    /// JSON-lines file the booking intents get appended to.
    #[clap(id = "leads", long = "leads", env = "LEADS_PATH", default_value = "leads.jsonl")]
    path: PathBuf,
}

impl LeadsLogArgs {
    pub fn open(&self) -> JsonLinesLog {
        JsonLinesLog::new(&self.path)
    }
}
