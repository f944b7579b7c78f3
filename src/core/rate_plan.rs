use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::{
    core::{RateSelection, RentalDuration, Tier},
    quantity::Rupees,
};

/// Per-unit prices of a bike. Any subset of tiers may be priced.
///
/// A zero amount is treated the same as a missing one.
#[serde_with::skip_serializing_none]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize, bon::Builder)]
#[must_use]
pub struct RatePlan {
    #[serde(default, rename = "price_per_hour")]
    pub hourly: Option<Rupees>,

    #[serde(default, rename = "price_per_day")]
    pub daily: Option<Rupees>,

    #[serde(default, rename = "price_per_week")]
    pub weekly: Option<Rupees>,

    #[serde(default, rename = "price_per_month")]
    pub monthly: Option<Rupees>,
}

impl RatePlan {
    #[must_use]
    pub fn get(&self, tier: Tier) -> Option<Rupees> {
        let amount = match tier {
            Tier::Hourly => self.hourly,
            Tier::Daily => self.daily,
            Tier::Weekly => self.weekly,
            Tier::Monthly => self.monthly,
        };
        amount.filter(|amount| !amount.is_zero())
    }

    /// Tiers with a usable price.
    #[must_use]
    pub fn tiers(&self) -> EnumSet<Tier> {
        EnumSet::all().iter().filter(|tier| self.get(*tier).is_some()).collect()
    }

    /// The finest priced tier, the one a catalog shows up front.
    #[must_use]
    pub fn headline(&self) -> Option<(Tier, Rupees)> {
        self.tiers().iter().find_map(|tier| self.get(tier).map(|amount| (tier, amount)))
    }

    /// Total price under every priced tier, from the finest to the coarsest.
    pub fn candidates(&self, duration: RentalDuration) -> impl Iterator<Item = RateSelection> {
        let plan = *self;
        plan.tiers().into_iter().filter_map(move |tier| {
            plan.get(tier).map(|rate| RateSelection::new(tier, rate, duration.units(tier)))
        })
    }
}
