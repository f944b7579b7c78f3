use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

use crate::{booking::BookingIntent, core::RateSelection};

const RULE: &str = "━━━━━━━━━━━━━━━━";

/// The booking request message sent over to the shop, in WhatsApp markup.
#[must_use]
pub struct Summary<'a> {
    intent: &'a BookingIntent,
    selection: &'a RateSelection,
}

impl<'a> Summary<'a> {
    pub const fn new(intent: &'a BookingIntent, selection: &'a RateSelection) -> Self {
        Self { intent, selection }
    }
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "🏍️ *BIKE BOOKING REQUEST*")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(f, "*Bike:* {}", self.intent.bike_name)?;
        writeln!(f)?;
        writeln!(f, "📍 *Pickup Location:* {}", self.intent.pickup_location)?;
        writeln!(f, "📅 *Pickup:* {}", Instant(self.intent.pickup_at))?;
        writeln!(f, "📅 *Drop:* {}", Instant(self.intent.drop_at))?;
        writeln!(f)?;
        writeln!(f, "🏷️ *Rate:* {}", self.selection.rate_label())?;
        writeln!(f, "⏱️ *Duration:* {}", self.selection.duration_label())?;
        writeln!(f, "💰 *Total Price:* {}", self.intent.total_price)?;
        if let Some(phone) = &self.intent.customer_phone {
            writeln!(f, "📞 *Phone:* {phone}")?;
        }
        writeln!(f)?;
        write!(f, "{RULE}")
    }
}

struct Instant(NaiveDateTime);

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d at %H:%M"))
    }
}
