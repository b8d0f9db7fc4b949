//! City read service.
//!
//! Loads stored cities inside one read transaction per request and hands them to the
//! [`EnrichmentEngine`] to build the projections served by the API.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::city::{CityDetailsDto, CityOverviewDto},
    server::{
        data::city::CityRepository, error::Error, service::enrichment::EnrichmentEngine,
        util::geo_code,
    },
};

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
    enrichment: &'a EnrichmentEngine,
}

impl<'a> CityService<'a> {
    /// Creates a new instance of CityService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `enrichment` - Engine holding the language reference data
    pub fn new(db: &'a DatabaseConnection, enrichment: &'a EnrichmentEngine) -> Self {
        Self { db, enrichment }
    }

    /// Retrieves the overview projection of every stored city.
    ///
    /// Cities are ordered by Erasmus population, largest first. A city whose enrichment fails is
    /// logged and left out; the others are still returned.
    ///
    /// # Returns
    /// - `Ok(Vec<CityOverviewDto>)` - Enriched cities, possibly empty
    /// - `Err(Error::DbErr)` - Loading the cities failed
    pub async fn get_cities_overview(&self) -> Result<Vec<CityOverviewDto>, Error> {
        let txn = self.db.begin().await?;
        let records = CityRepository::new(&txn).find_overview_records().await?;
        txn.commit().await?;

        if records.is_empty() {
            tracing::warn!("No cities found in the database");
            return Ok(Vec::new());
        }

        let total = records.len();
        let overviews: Vec<CityOverviewDto> = records
            .iter()
            .filter_map(|record| self.enrichment.overview(record).ok())
            .collect();

        if overviews.len() < total {
            tracing::warn!(
                "Skipped {} of {} cities that failed enrichment",
                total - overviews.len(),
                total
            );
        }
        tracing::info!("Enriched overview data for {} cities", overviews.len());

        Ok(overviews)
    }

    /// Retrieves the detail projection of one city.
    ///
    /// # Arguments
    /// - `eurostat_code` - Raw city code; surrounding whitespace and casing are normalized
    ///
    /// # Returns
    /// - `Ok(Some(CityDetailsDto))` - City found and enriched
    /// - `Ok(None)` - The code is invalid or no such city is stored
    /// - `Err(Error::EnrichmentError)` - The city exists but could not be enriched
    /// - `Err(Error::DbErr)` - Loading the city failed
    pub async fn get_city_full_details(
        &self,
        eurostat_code: &str,
    ) -> Result<Option<CityDetailsDto>, Error> {
        let Some(eurostat_code) = geo_code::sanitize(eurostat_code) else {
            tracing::warn!("Invalid eurostat_code provided: {:?}", eurostat_code);
            return Ok(None);
        };

        let txn = self.db.begin().await?;
        let record = CityRepository::new(&txn)
            .find_record(&eurostat_code)
            .await?;
        txn.commit().await?;

        let Some(record) = record else {
            tracing::warn!("City {} not found in the database", eurostat_code);
            return Ok(None);
        };

        let details = self.enrichment.full_details(&record)?;
        tracing::debug!("Enriched details for city {}", record.city.english_name);

        Ok(Some(details))
    }
}
