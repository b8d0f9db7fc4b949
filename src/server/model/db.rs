//! Database model type aliases and the loaded city aggregate.
//!
//! The aliases keep signatures short across repositories and services. [`CityRecord`] is the
//! city plus whichever sub-records were loaded for it; sub-records are looked up by the city's
//! code through explicit queries rather than lazy relation traversal.

/// City aggregate root (`cities` table).
pub type CityModel = entity::city::Model;

/// Monthly mean minimum/maximum temperatures (`climate` table).
pub type ClimateModel = entity::climate::Model;

/// Cost-of-living indices and monthly budget (`cost_of_living` table).
pub type CostOfLivingModel = entity::cost_of_living::Model;

/// Free-text city guide (`guides` table).
pub type GuideModel = entity::guide::Model;

/// Rent per square meter, area per person and student rent factor (`housing` table).
pub type HousingModel = entity::housing::Model;

/// Safety, university count and public transport satisfaction (`metrics` table).
pub type MetricsModel = entity::metrics::Model;

/// Monthly public transport ticket price and its source (`transport_budget` table).
pub type TransportBudgetModel = entity::transport_budget::Model;

/// Higher education institution located in a city (`universities` table).
pub type UniversityModel = entity::university::Model;

/// A city with its related sub-records.
///
/// Every sub-record is optional: a city that no ingestion job has reached yet simply has `None`
/// there, and enrichment degrades the affected fields to `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct CityRecord {
    pub city: CityModel,
    pub climate: Option<ClimateModel>,
    pub cost_of_living: Option<CostOfLivingModel>,
    pub guide: Option<GuideModel>,
    pub housing: Option<HousingModel>,
    pub metrics: Option<MetricsModel>,
    pub transport_budget: Option<TransportBudgetModel>,
    pub universities: Vec<UniversityModel>,
}

impl CityRecord {
    /// A city without any loaded sub-records.
    pub fn new(city: CityModel) -> Self {
        Self {
            city,
            climate: None,
            cost_of_living: None,
            guide: None,
            housing: None,
            metrics: None,
            transport_budget: None,
            universities: Vec::new(),
        }
    }
}
