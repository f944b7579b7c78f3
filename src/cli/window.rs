use clap::Parser;

use crate::core::{QuoteError, RentalWindow};

#[derive(Parser)]
pub struct WindowArgs {
    /// Pickup date, `YYYY-MM-DD`, or `YYYY-MM-DDTHH:MM` without `--pickup-time`.
    #[clap(long)]
    pickup_date: String,

    /// Pickup time, `HH:MM`.
    #[clap(long)]
    pickup_time: Option<String>,

    /// Drop date, `YYYY-MM-DD`, or `YYYY-MM-DDTHH:MM` without `--drop-time`.
    #[clap(long)]
    drop_date: String,

    /// Drop time, `HH:MM`.
    #[clap(long)]
    drop_time: Option<String>,
}

impl WindowArgs {
    pub fn resolve(&self) -> Result<RentalWindow, QuoteError> {
        RentalWindow::parse(
            &self.pickup_date,
            self.pickup_time.as_deref().unwrap_or_default(),
            &self.drop_date,
            self.drop_time.as_deref().unwrap_or_default(),
        )
    }
}
