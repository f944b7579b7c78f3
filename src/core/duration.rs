use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::core::Tier;

/// Elapsed rental time in every billing unit, each at least one.
///
/// Coarser units are derived from the next finer unit by ceiling division,
/// never from the raw span. A month is approximated as exactly four weeks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[must_use]
pub struct RentalDuration {
    pub hours: u64,
    pub days: u64,
    pub weeks: u64,
    pub months: u64,
}

impl RentalDuration {
    const MILLIS_PER_HOUR: u64 = 3_600_000;
    const HOURS_PER_DAY: u64 = 24;
    const DAYS_PER_WEEK: u64 = 7;
    const WEEKS_PER_MONTH: u64 = 4;

    /// Zero and negative spans are treated as the minimal one-hour rental.
    pub fn from_span(span: TimeDelta) -> Self {
        let hours = u64::try_from(span.num_milliseconds())
            .map_or(0, |millis| millis.div_ceil(Self::MILLIS_PER_HOUR))
            .max(1);
        let days = hours.div_ceil(Self::HOURS_PER_DAY).max(1);
        let weeks = days.div_ceil(Self::DAYS_PER_WEEK).max(1);
        let months = weeks.div_ceil(Self::WEEKS_PER_MONTH).max(1);
        Self { hours, days, weeks, months }
    }

    #[must_use]
    pub const fn units(self, tier: Tier) -> u64 {
        match tier {
            Tier::Hourly => self.hours,
            Tier::Daily => self.days,
            Tier::Weekly => self.weeks,
            Tier::Monthly => self.months,
        }
    }
}
