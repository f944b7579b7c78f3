use std::fmt::{Debug, Formatter};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::core::{QuoteError, RentalDuration};

/// Pickup and drop instants in the shop's wall-clock time.
///
/// The drop is expected after the pickup, but that is not enforced here.
#[derive(Copy, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[must_use]
pub struct RentalWindow {
    pub pickup: NaiveDateTime,
    pub drop: NaiveDateTime,
}

impl Debug for RentalWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.pickup, self.drop)
    }
}

impl RentalWindow {
    pub const fn new(pickup: NaiveDateTime, drop: NaiveDateTime) -> Self {
        Self { pickup, drop }
    }

    /// Combine the date and time parts as they come from the booking form.
    ///
    /// Dates are `YYYY-MM-DD`, times are `HH:MM` or `HH:MM:SS`. A date may also carry
    /// the time itself (`YYYY-MM-DDTHH:MM`), in which case the time part must be empty.
    pub fn parse(
        pickup_date: &str,
        pickup_time: &str,
        drop_date: &str,
        drop_time: &str,
    ) -> Result<Self, QuoteError> {
        Ok(Self::new(parse_instant(pickup_date, pickup_time)?, parse_instant(drop_date, drop_time)?))
    }

    #[must_use]
    pub fn span(self) -> TimeDelta {
        self.drop - self.pickup
    }

    pub fn duration(self) -> RentalDuration {
        RentalDuration::from_span(self.span())
    }
}

fn parse_instant(date: &str, time: &str) -> Result<NaiveDateTime, QuoteError> {
    let (date, time) = match date.trim().split_once('T') {
        Some((date, embedded_time)) if time.trim().is_empty() => (date, embedded_time),
        _ => (date.trim(), time.trim()),
    };
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| QuoteError::invalid_window("date", date))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|_| QuoteError::invalid_window("time", time))?;
    Ok(date.and_time(time))
}
