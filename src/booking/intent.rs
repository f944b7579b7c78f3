use bon::bon;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{booking::BookingError, core::Quote, quantity::Rupees};

/// A customer's expressed intent to book a bike. Created once per booking action and never
/// changed afterwards.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[must_use]
pub struct BookingIntent {
    pub id: Uuid,
    pub bike_id: String,
    pub bike_name: String,
    pub pickup_location: String,
    pub pickup_at: NaiveDateTime,
    pub drop_at: NaiveDateTime,
    pub total_hours: u64,
    pub total_price: Rupees,
    pub customer_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[bon]
impl BookingIntent {
    /// Each intent gets a fresh random identifier and the current time as its creation time.
    #[builder]
    pub fn new(
        #[builder(into)] bike_id: String,
        #[builder(into)] bike_name: String,
        #[builder(into)] pickup_location: String,
        quote: &Quote,
        #[builder(into)] customer_phone: Option<String>,
    ) -> Result<Self, BookingError> {
        if bike_id.trim().is_empty() {
            return Err(BookingError::MissingBike);
        }
        if quote.duration.hours == 0 || quote.selection.units == 0 || quote.selection.total.is_zero()
        {
            return Err(BookingError::EmptyQuote);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            bike_id,
            bike_name,
            pickup_location,
            pickup_at: quote.window.pickup,
            drop_at: quote.window.drop,
            total_hours: quote.duration.hours,
            total_price: quote.selection.total,
            customer_phone,
            created_at: Utc::now(),
        })
    }
}
