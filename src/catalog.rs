//! Bike catalog, as listed on the public site.

mod bike;
mod filter;
mod location;

use std::{fs, path::Path};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use self::{
    bike::{Bike, BikeStatus},
    filter::{CcRange, Filter, SortOrder},
    location::PickupLocation,
};
use crate::prelude::*;

#[derive(Default, Deserialize, Serialize)]
#[must_use]
pub struct Catalog {
    #[serde(default)]
    pub bikes: Vec<Bike>,
}

impl Catalog {
    pub fn from_toml(contents: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(contents)?;
        ensure!(
            catalog.bikes.iter().map(|bike| &bike.id).all_unique(),
            "bike identifiers must be unique",
        );
        Ok(catalog)
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the catalog from `{}`", path.display()))?;
        let catalog = Self::from_toml(&contents)
            .with_context(|| format!("failed to parse the catalog `{}`", path.display()))?;
        debug!(n_bikes = catalog.bikes.len(), "loaded");
        Ok(catalog)
    }

    pub fn find(&self, id: &str) -> Result<&Bike> {
        self.bikes
            .iter()
            .find(|bike| bike.id == id)
            .with_context(|| format!("bike `{id}` is not in the catalog"))
    }

    /// Bikes matching the filter, in the requested order.
    #[must_use]
    pub fn browse(&self, filter: &Filter) -> Vec<&Bike> {
        let mut bikes = self
            .bikes
            .iter()
            .filter(|bike| filter.matches(bike))
            .collect_vec();
        filter.sort.apply(&mut bikes);
        bikes
    }

    /// Distinct engine types among the available bikes.
    #[must_use]
    pub fn engine_types(&self) -> Vec<&str> {
        self.bikes
            .iter()
            .filter(|bike| bike.status.is_available())
            .map(|bike| bike.engine_type.as_str())
            .unique()
            .sorted()
            .collect()
    }
}

#[cfg(test)]
pub mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::quantity::Rupees;

    // language=toml
    pub const CATALOG: &str = r#"
        [[bikes]]
        id = "classic-350"
        name = "Royal Enfield Classic 350"
        image_url = "https://example.com/classic.jpg"
        cc = 350
        engine_type = "Single Cylinder"
        fuel_type = "Petrol"
        mileage = "35 kmpl"
        seats = 2
        price_per_hour = 40
        price_per_day = 500

        [[bikes]]
        id = "activa-6g"
        name = "Honda Activa 6G"
        cc = 110
        engine_type = "Scooter"
        fuel_type = "Petrol"
        mileage = "55 kmpl"
        seats = 2
        price_per_hour = 15

        [[bikes]]
        id = "duke-200"
        name = "KTM Duke 200"
        cc = 200
        engine_type = "Single Cylinder"
        status = "maintenance"
        fuel_type = "Petrol"
        mileage = "30 kmpl"
        seats = 2
        price_per_hour = 50

        [[bikes]]
        id = "interceptor-650"
        name = "Royal Enfield Interceptor 650"
        cc = 648
        engine_type = "Parallel Twin"
        fuel_type = "Petrol"
        mileage = "25 kmpl"
        seats = 2
        price_per_week = 7000
    "#;

    fn ids(bikes: &[&Bike]) -> Vec<String> {
        bikes.iter().map(|bike| bike.id.clone()).collect_vec()
    }

    #[test]
    fn test_from_toml_ok() -> Result {
        let catalog = Catalog::from_toml(CATALOG)?;
        assert_eq!(catalog.bikes.len(), 4);
        let classic = catalog.find("classic-350")?;
        assert_eq!(classic.rates.hourly, Some(Rupees(40)));
        assert_eq!(classic.rates.daily, Some(Rupees(500)));
        assert_eq!(classic.rates.weekly, None);
        assert_eq!(classic.status, BikeStatus::Available);
        assert_eq!(catalog.find("duke-200")?.status, BikeStatus::Maintenance);
        Ok(())
    }

    #[test]
    fn test_duplicate_ids() {
        // language=toml
        let contents = r#"
            [[bikes]]
            id = "twin"
            name = "One"
            cc = 100
            engine_type = "Scooter"
            fuel_type = "Petrol"
            mileage = "50 kmpl"
            seats = 2

            [[bikes]]
            id = "twin"
            name = "Two"
            cc = 100
            engine_type = "Scooter"
            fuel_type = "Petrol"
            mileage = "50 kmpl"
            seats = 2
        "#;
        assert!(Catalog::from_toml(contents).is_err());
    }

    #[test]
    fn test_find_missing() -> Result {
        assert!(Catalog::from_toml(CATALOG)?.find("bmx").is_err());
        Ok(())
    }

    #[test]
    fn test_browse_hides_unavailable() -> Result {
        let catalog = Catalog::from_toml(CATALOG)?;
        assert_eq!(
            ids(&catalog.browse(&Filter::default())),
            vec!["activa-6g", "classic-350", "interceptor-650"],
        );
        Ok(())
    }

    #[test]
    fn test_browse_include_unavailable() -> Result {
        let catalog = Catalog::from_toml(CATALOG)?;
        let filter = Filter::builder().include_unavailable(true).sort(SortOrder::CcLow).build();
        assert_eq!(
            ids(&catalog.browse(&filter)),
            vec!["activa-6g", "duke-200", "classic-350", "interceptor-650"],
        );
        Ok(())
    }

    #[test]
    fn test_browse_sort_price_high() -> Result {
        let catalog = Catalog::from_toml(CATALOG)?;
        let filter = Filter::builder().sort(SortOrder::PriceHigh).build();
        assert_eq!(
            ids(&catalog.browse(&filter)),
            vec!["interceptor-650", "classic-350", "activa-6g"],
        );
        Ok(())
    }

    #[test]
    fn test_browse_sort_cc() -> Result {
        let catalog = Catalog::from_toml(CATALOG)?;
        let filter = Filter::builder().sort(SortOrder::CcHigh).build();
        assert_eq!(
            ids(&catalog.browse(&filter)),
            vec!["interceptor-650", "classic-350", "activa-6g"],
        );
        let filter = Filter::builder().sort(SortOrder::CcLow).build();
        assert_eq!(
            ids(&catalog.browse(&filter)),
            vec!["activa-6g", "classic-350", "interceptor-650"],
        );
        Ok(())
    }

    #[test]
    fn test_browse_filters() -> Result {
        let catalog = Catalog::from_toml(CATALOG)?;
        let filter = Filter::builder().cc_range(CcRange::From250To500).build();
        assert_eq!(ids(&catalog.browse(&filter)), vec!["classic-350"]);
        let filter = Filter::builder().engine_type("single cylinder".to_owned()).build();
        assert_eq!(ids(&catalog.browse(&filter)), vec!["classic-350"]);
        let filter = Filter::builder().cc_range(CcRange::From500).build();
        assert_eq!(ids(&catalog.browse(&filter)), vec!["interceptor-650"]);
        Ok(())
    }

    #[test]
    fn test_engine_types() -> Result {
        assert_eq!(
            Catalog::from_toml(CATALOG)?.engine_types(),
            vec!["Parallel Twin", "Scooter", "Single Cylinder"],
        );
        Ok(())
    }
}
