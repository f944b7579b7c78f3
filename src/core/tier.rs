use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Billing granularity, declared from the finest to the coarsest.
#[derive(Debug, Hash, Ord, PartialOrd, Deserialize, Serialize, clap::ValueEnum, enumset::EnumSetType)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Hourly => "hour",
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
        }
    }

    /// Unit count with the unit name, pluralized unless the count is one: `2 weeks`, `1 day`.
    #[must_use]
    pub fn quantify(self, units: u64) -> String {
        if units == 1 { format!("1 {}", self.unit()) } else { format!("{units} {}s", self.unit()) }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_quantify() {
        assert_eq!(Tier::Hourly.quantify(4), "4 hours");
        assert_eq!(Tier::Daily.quantify(1), "1 day");
        assert_eq!(Tier::Weekly.quantify(2), "2 weeks");
        assert_eq!(Tier::Monthly.quantify(0), "0 months");
    }

    #[test]
    fn test_iteration_order() {
        assert_eq!(
            EnumSet::<Tier>::all().iter().collect_vec(),
            vec![Tier::Hourly, Tier::Daily, Tier::Weekly, Tier::Monthly],
        );
    }
}
