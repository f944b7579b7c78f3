use crate::core::{QuoteError, RatePlan, RateSelection, RentalDuration, RentalWindow, SelectionMode};

/// A fully resolved price for a rental window.
///
/// There is no quote for an invalid window or a bike without rates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Quote {
    pub window: RentalWindow,
    pub duration: RentalDuration,
    pub selection: RateSelection,
}

impl Quote {
    pub fn try_new(
        plan: &RatePlan,
        window: RentalWindow,
        mode: SelectionMode,
    ) -> Result<Self, QuoteError> {
        let duration = window.duration();
        let selection = RateSelection::evaluate(plan, duration, mode)?;
        Ok(Self { window, duration, selection })
    }
}
