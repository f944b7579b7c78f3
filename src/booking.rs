//! Booking intents: what gets recorded and sent over when a customer asks to book.

mod error;
mod handoff;
mod intent;
mod log;
mod summary;

use bon::bon;

pub use self::{
    error::BookingError,
    handoff::WhatsApp,
    intent::BookingIntent,
    log::{IntentLog, JsonLinesLog},
    summary::Summary,
};
use crate::{
    catalog::{Bike, PickupLocation},
    core::{Quote, RentalWindow, SelectionMode},
    prelude::*,
};

/// A booking intent together with the quote it was priced with.
#[must_use]
pub struct Booking {
    pub intent: BookingIntent,
    pub quote: Quote,
}

#[bon]
impl Booking {
    /// Price the rental of a catalog bike and build the intent for it.
    #[builder]
    pub fn new(
        bike: &Bike,
        location: Option<PickupLocation>,
        window: RentalWindow,
        #[builder(default)] mode: SelectionMode,
        #[builder(into)] customer_phone: Option<String>,
    ) -> Result<Self, BookingError> {
        if !bike.status.is_available() {
            return Err(BookingError::Unavailable { bike: bike.name.clone(), status: bike.status });
        }
        let quote = Quote::try_new(&bike.rates, window, mode)?;
        let intent = BookingIntent::builder()
            .bike_id(&bike.id)
            .bike_name(&bike.name)
            .pickup_location(PickupLocation::label(location))
            .quote(&quote)
            .maybe_customer_phone(customer_phone)
            .build()?;
        Ok(Self { intent, quote })
    }

    pub const fn summary(&self) -> Summary<'_> {
        Summary::new(&self.intent, &self.quote.selection)
    }

    /// Record the intent without letting a failure get in the way of the handoff.
    pub fn record(&self, log: &dyn IntentLog) {
        if let Err(error) = log.append(&self.intent) {
            warn!("failed to record the booking intent: {error:#}");
        }
    }
}
