use serde::{Deserialize, Serialize};

use crate::{
    core::{QuoteError, RatePlan, RentalDuration, Tier},
    quantity::Rupees,
};

/// How the tier gets picked.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// The cheapest priced tier.
    #[default]
    Auto,

    /// Bill per hour when the bike has an hourly price.
    Hourly,

    /// Bill per day when the bike has a daily price.
    Daily,

    /// Bill per week when the bike has a weekly price.
    Weekly,

    /// Bill per month when the bike has a monthly price.
    Monthly,
}

impl SelectionMode {
    pub const fn forced_tier(self) -> Option<Tier> {
        match self {
            Self::Auto => None,
            Self::Hourly => Some(Tier::Hourly),
            Self::Daily => Some(Tier::Daily),
            Self::Weekly => Some(Tier::Weekly),
            Self::Monthly => Some(Tier::Monthly),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[must_use]
pub struct RateSelection {
    pub tier: Tier,

    /// Per-unit amount of the tier.
    pub rate: Rupees,

    pub units: u64,
    pub total: Rupees,
}

impl RateSelection {
    pub fn new(tier: Tier, rate: Rupees, units: u64) -> Self {
        Self { tier, rate, units, total: rate * units }
    }

    /// Pick a tier for the rental.
    ///
    /// A forced tier wins whenever the plan prices it. Otherwise, the cheapest total wins,
    /// and on an exact tie the coarser tier is preferred.
    pub fn evaluate(
        plan: &RatePlan,
        duration: RentalDuration,
        mode: SelectionMode,
    ) -> Result<Self, QuoteError> {
        if let Some(tier) = mode.forced_tier()
            && let Some(rate) = plan.get(tier)
        {
            return Ok(Self::new(tier, rate, duration.units(tier)));
        }
        plan.candidates(duration)
            .reduce(|best, candidate| if candidate.total <= best.total { candidate } else { best })
            .ok_or(QuoteError::NoRateDefined)
    }

    /// For example, `Weekly (₹1000/week)`.
    #[must_use]
    pub fn rate_label(&self) -> String {
        format!("{} ({}/{})", self.tier, self.rate, self.tier.unit())
    }

    /// For example, `2 weeks`.
    #[must_use]
    pub fn duration_label(&self) -> String {
        self.tier.quantify(self.units)
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;

    const TWO_DAYS: RentalDuration = RentalDuration { hours: 48, days: 2, weeks: 1, months: 1 };

    #[test]
    fn test_single_tier_by_exclusion() -> Result<(), QuoteError> {
        let plan = RatePlan::builder().hourly(Rupees(40)).build();
        let duration = RentalDuration { hours: 4, days: 1, weeks: 1, months: 1 };
        let selection = RateSelection::evaluate(&plan, duration, SelectionMode::Auto)?;
        assert_eq!(selection, RateSelection::new(Tier::Hourly, Rupees(40), 4));
        assert_eq!(selection.total, Rupees(160));
        Ok(())
    }

    #[test]
    fn test_auto_picks_cheapest() -> Result<(), QuoteError> {
        let plan = RatePlan::builder().hourly(Rupees(40)).daily(Rupees(500)).build();
        let selection = RateSelection::evaluate(&plan, TWO_DAYS, SelectionMode::Auto)?;
        assert_eq!(selection.tier, Tier::Daily);
        assert_eq!(selection.units, 2);
        assert_eq!(selection.total, Rupees(1000));
        Ok(())
    }

    #[test]
    fn test_auto_keeps_finer_when_strictly_cheaper() -> Result<(), QuoteError> {
        let plan = RatePlan::builder().hourly(Rupees(10)).daily(Rupees(500)).build();
        let selection = RateSelection::evaluate(&plan, TWO_DAYS, SelectionMode::Auto)?;
        assert_eq!(selection.tier, Tier::Hourly);
        assert_eq!(selection.total, Rupees(480));
        Ok(())
    }

    #[test]
    fn test_auto_tie_prefers_coarser() -> Result<(), QuoteError> {
        // 48 × 25 = 1200 = 2 × 600:
        let plan = RatePlan::builder().hourly(Rupees(25)).daily(Rupees(600)).build();
        let selection = RateSelection::evaluate(&plan, TWO_DAYS, SelectionMode::Auto)?;
        assert_eq!(selection.tier, Tier::Daily);
        Ok(())
    }

    #[test]
    fn test_forced_tier_ignores_cheaper() -> Result<(), QuoteError> {
        let plan = RatePlan::builder().hourly(Rupees(40)).daily(Rupees(500)).build();
        let selection = RateSelection::evaluate(&plan, TWO_DAYS, SelectionMode::Hourly)?;
        assert_eq!(selection, RateSelection::new(Tier::Hourly, Rupees(40), 48));
        Ok(())
    }

    #[test]
    fn test_forced_missing_tier_falls_back_to_auto() -> Result<(), QuoteError> {
        let plan = RatePlan::builder().hourly(Rupees(40)).daily(Rupees(500)).build();
        let selection = RateSelection::evaluate(&plan, TWO_DAYS, SelectionMode::Monthly)?;
        assert_eq!(selection.tier, Tier::Daily);
        Ok(())
    }

    #[test]
    fn test_daily_only_plan_is_always_daily() -> Result<(), QuoteError> {
        let plan = RatePlan::builder().daily(Rupees(500)).build();
        for mode in [
            SelectionMode::Auto,
            SelectionMode::Hourly,
            SelectionMode::Daily,
            SelectionMode::Weekly,
            SelectionMode::Monthly,
        ] {
            assert_eq!(RateSelection::evaluate(&plan, TWO_DAYS, mode)?.tier, Tier::Daily);
        }
        Ok(())
    }

    #[test]
    fn test_no_rate_defined() {
        assert_eq!(
            RateSelection::evaluate(&RatePlan::default(), TWO_DAYS, SelectionMode::Auto),
            Err(QuoteError::NoRateDefined),
        );
        assert_eq!(
            RateSelection::evaluate(&RatePlan::default(), TWO_DAYS, SelectionMode::Daily),
            Err(QuoteError::NoRateDefined),
        );
    }

    #[test]
    fn test_idempotent() -> Result<(), QuoteError> {
        let plan = RatePlan::builder()
            .hourly(Rupees(40))
            .daily(Rupees(500))
            .weekly(Rupees(2800))
            .monthly(Rupees(9000))
            .build();
        assert_eq!(plan.tiers(), EnumSet::all());
        let duration = RentalDuration { hours: 200, days: 9, weeks: 2, months: 1 };
        assert_eq!(
            RateSelection::evaluate(&plan, duration, SelectionMode::Auto)?,
            RateSelection::evaluate(&plan, duration, SelectionMode::Auto)?,
        );
        Ok(())
    }

    #[test]
    fn test_labels() {
        let selection = RateSelection::new(Tier::Weekly, Rupees(1000), 2);
        assert_eq!(selection.rate_label(), "Weekly (₹1000/week)");
        assert_eq!(selection.duration_label(), "2 weeks");
        assert_eq!(selection.total, Rupees(2000));
    }
}
