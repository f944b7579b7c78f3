//! Rental pricing: rental windows, rate tiers and rate selection.

mod duration;
mod error;
mod quote;
mod rate_plan;
mod selection;
mod tier;
mod window;

pub use self::{
    duration::RentalDuration,
    error::QuoteError,
    quote::Quote,
    rate_plan::RatePlan,
    selection::{RateSelection, SelectionMode},
    tier::Tier,
    window::RentalWindow,
};
