use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::{Deserialize, Serialize};

use crate::core::RatePlan;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BikeStatus {
    #[default]
    Available,

    Rented,
    Maintenance,
}

impl BikeStatus {
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Available => Color::Green,
            Self::Rented => Color::DarkYellow,
            Self::Maintenance => Color::Red,
        }
    }
}

impl Display for BikeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Rented => write!(f, "Rented"),
            Self::Maintenance => write!(f, "Under maintenance"),
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct Bike {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Engine displacement in cubic centimetres.
    pub cc: u32,

    pub engine_type: String,

    #[serde(default)]
    pub status: BikeStatus,

    pub fuel_type: String,
    pub mileage: String,
    pub seats: u32,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(flatten)]
    pub rates: RatePlan,
}
