use clap::Parser;

use crate::{
    booking::{Booking, WhatsApp},
    catalog::PickupLocation,
    cli::{
        paths::{CatalogArgs, LeadsLogArgs},
        window::WindowArgs,
    },
    core::SelectionMode,
    prelude::*,
};

#[derive(Parser)]
pub struct BookArgs {
    #[clap(flatten)]
    catalog: CatalogArgs,

    #[clap(flatten)]
    leads: LeadsLogArgs,

    /// Bike identifier from the catalog.
    #[clap(long = "bike")]
    bike_id: String,

    #[clap(flatten)]
    window: WindowArgs,

    #[clap(long = "tier", default_value = "auto")]
    mode: SelectionMode,

    /// Pickup location identifier, see `kickstand locations`.
    #[clap(long = "location")]
    location_id: Option<String>,

    #[clap(long)]
    customer_phone: Option<String>,

    /// Shop's WhatsApp number the booking request goes to.
    #[clap(long, env = "WHATSAPP_NUMBER", default_value = "919876543210")]
    whatsapp_number: WhatsApp,
}

impl BookArgs {
    #[instrument(skip_all, fields(bike_id = %self.bike_id))]
    pub fn run(self) -> Result {
        let catalog = self.catalog.read()?;
        let bike = catalog.find(&self.bike_id)?;
        let window = self.window.resolve().context("cannot compute the price")?;
        let location = self.location_id.as_deref().and_then(PickupLocation::from_id);
        if location.is_none() {
            warn!(location_id = ?self.location_id, "pickup location is not selected");
        }
        let booking = Booking::builder()
            .bike(bike)
            .maybe_location(location)
            .window(window)
            .mode(self.mode)
            .maybe_customer_phone(self.customer_phone)
            .build()
            .context("cannot book")?;
        info!(
            id = %booking.intent.id,
            tier = %booking.quote.selection.tier,
            total = %booking.intent.total_price,
            "created the booking intent",
        );
        booking.record(&self.leads.open());

        let summary = booking.summary().to_string();
        println!("{summary}");
        println!();
        println!("{}", self.whatsapp_number.link(&summary)?);
        Ok(())
    }
}
