use std::{
    cmp::Reverse,
    fmt::{Display, Formatter},
};

use crate::catalog::Bike;

/// Engine displacement bands. The lower bound is inclusive, the upper one is exclusive.
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum CcRange {
    #[value(name = "100-150")]
    From100To150,

    #[value(name = "150-250")]
    From150To250,

    #[value(name = "250-500")]
    From250To500,

    #[value(name = "500+")]
    From500,
}

impl CcRange {
    pub const fn contains(self, cc: u32) -> bool {
        match self {
            Self::From100To150 => 100 <= cc && cc < 150,
            Self::From150To250 => 150 <= cc && cc < 250,
            Self::From250To500 => 250 <= cc && cc < 500,
            Self::From500 => 500 <= cc,
        }
    }
}

impl Display for CcRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::From100To150 => write!(f, "100-150 cc"),
            Self::From150To250 => write!(f, "150-250 cc"),
            Self::From250To500 => write!(f, "250-500 cc"),
            Self::From500 => write!(f, "500+ cc"),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum SortOrder {
    /// Cheapest headline price first.
    #[default]
    PriceLow,

    /// Most expensive headline price first.
    PriceHigh,

    /// Smallest engine first.
    CcLow,

    /// Largest engine first.
    CcHigh,
}

impl SortOrder {
    /// Stable sort. Bikes without any price go last in both price orders.
    pub fn apply(self, bikes: &mut [&Bike]) {
        match self {
            Self::PriceLow => bikes.sort_by_key(|bike| {
                let headline = bike.rates.headline();
                (headline.is_none(), headline.map(|(_, amount)| amount))
            }),
            Self::PriceHigh => bikes.sort_by_key(|bike| {
                let headline = bike.rates.headline();
                (headline.is_none(), Reverse(headline.map(|(_, amount)| amount)))
            }),
            Self::CcLow => bikes.sort_by_key(|bike| bike.cc),
            Self::CcHigh => bikes.sort_by_key(|bike| Reverse(bike.cc)),
        }
    }
}

#[derive(Clone, Debug, Default, bon::Builder)]
#[must_use]
pub struct Filter {
    pub cc_range: Option<CcRange>,

    /// Case-insensitive engine type.
    pub engine_type: Option<String>,

    /// Also list rented bikes and bikes under maintenance.
    #[builder(default)]
    pub include_unavailable: bool,

    #[builder(default)]
    pub sort: SortOrder,
}

impl Filter {
    #[must_use]
    pub fn matches(&self, bike: &Bike) -> bool {
        (self.include_unavailable || bike.status.is_available())
            && self.cc_range.is_none_or(|range| range.contains(bike.cc))
            && self
                .engine_type
                .as_deref()
                .is_none_or(|engine_type| engine_type.eq_ignore_ascii_case(&bike.engine_type))
    }
}
