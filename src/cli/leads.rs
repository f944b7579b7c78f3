use clap::Parser;

use crate::{booking::IntentLog, cli::paths::LeadsLogArgs, prelude::*, tables::build_leads_table};

#[derive(Parser)]
pub struct LeadsArgs {
    #[clap(flatten)]
    leads: LeadsLogArgs,

    /// Show at most this many of the newest intents.
    #[clap(long)]
    limit: Option<usize>,
}

impl LeadsArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let intents = self.leads.open().latest(self.limit)?;
        info!(n_intents = intents.len(), "fetched");
        println!("{}", build_leads_table(&intents));
        Ok(())
    }
}
