use std::fmt::{Display, Formatter};

/// Shops where the bikes are picked up.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PickupLocation {
    Madhapur,
    Kphb,
    Secunderabad,
    BanjaraHills,
}

impl PickupLocation {
    /// Shown when no pickup location has been chosen.
    pub const NOT_SELECTED: &'static str = "Not selected";

    pub const ALL: [Self; 4] = [Self::Madhapur, Self::Kphb, Self::Secunderabad, Self::BanjaraHills];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Madhapur => "madhapur",
            Self::Kphb => "kphb",
            Self::Secunderabad => "secunderabad",
            Self::BanjaraHills => "banjara-hills",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Madhapur => "Madhapur",
            Self::Kphb => "KPHB",
            Self::Secunderabad => "Secunderabad",
            Self::BanjaraHills => "Banjara Hills",
        }
    }

    pub const fn address(self) -> &'static str {
        match self {
            Self::Madhapur => "Hitech City Main Road, Madhapur",
            Self::Kphb => "KPHB Colony Phase 6, Kukatpally",
            Self::Secunderabad => "Paradise Circle, Secunderabad",
            Self::BanjaraHills => "Road No. 12, Banjara Hills",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.into_iter().find(|location| location.id().eq_ignore_ascii_case(id))
    }

    /// Display name of the chosen location, or [`Self::NOT_SELECTED`].
    #[must_use]
    pub fn label(location: Option<Self>) -> &'static str {
        location.map_or(Self::NOT_SELECTED, Self::name)
    }
}

impl Display for PickupLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
