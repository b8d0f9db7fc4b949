//! Batch refresh jobs.
//!
//! Each job runs load, reconcile and sync in sequence and writes its whole batch inside one
//! transaction. A failure rolls the batch back (the transaction is dropped uncommitted) and is
//! returned to the job runner, which reports it; nothing is retried.
//!
//! Jobs assume exclusive use of the tables they write. Two jobs running at once on the same
//! table are not coordinated.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, IntoActiveModel, TransactionTrait,
};

use crate::server::{
    data::{
        city::CityRepository,
        sync::{CodeKeyedEntity, SyncRepository, SyncSummary},
    },
    dataset::{
        loader::DatasetLoader,
        reconcile::reconcile,
        theme::{Reconciliation, Topic},
    },
    error::Error,
    model::{
        dataset::{ReconciledRow, SupportedCity},
        db::CityModel,
    },
    util::{city_name::CityNameMapping, geo_code},
};

pub struct RefreshService<'a> {
    db: &'a DatabaseConnection,
    loader: &'a DatasetLoader,
    name_mapping: &'a CityNameMapping,
}

impl<'a> RefreshService<'a> {
    /// Creates a new instance of RefreshService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `loader` - Locates reference files and theme exports
    /// - `name_mapping` - Alias table used to standardize seeded city names
    pub fn new(
        db: &'a DatabaseConnection,
        loader: &'a DatasetLoader,
        name_mapping: &'a CityNameMapping,
    ) -> Self {
        Self {
            db,
            loader,
            name_mapping,
        }
    }

    /// Creates or overwrites a city row for every valid entry of the supported-cities file.
    ///
    /// Invalid and duplicate codes are logged and skipped, leaving exactly the codes refresh jobs
    /// reconcile. Names are standardized through the alias mapping; an entry without any name is
    /// stored under its code.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of cities written
    /// - `Err(Error::DbErr)` - The batch failed and was rolled back
    pub async fn seed_cities(&self) -> Result<usize, Error> {
        let entries = self.loader.load_supported_cities();

        let mut seen = HashSet::new();
        let mut cities = Vec::with_capacity(entries.len());
        for entry in &entries {
            let Some(city) = self.city_from_entry(entry) else {
                continue;
            };
            if !seen.insert(city.eurostat_code.clone()) {
                tracing::warn!("Skipping duplicate city {}", city.eurostat_code);
                continue;
            }
            cities.push(city);
        }

        let txn = self.db.begin().await?;
        let written = CityRepository::new(&txn)
            .upsert_many(cities)
            .await
            .inspect_err(|e| tracing::error!("Seeding cities failed, rolling back: {}", e))?;
        txn.commit().await?;

        tracing::info!("Seeded {} cities", written.len());

        Ok(written.len())
    }

    fn city_from_entry(&self, entry: &SupportedCity) -> Option<CityModel> {
        let Some(eurostat_code) = geo_code::sanitize(&entry.eurostat_code) else {
            tracing::warn!("Skipping city with invalid code {:?}", entry.eurostat_code);
            return None;
        };

        let (english_name, local_name) =
            match entry.english_name.as_ref().or(entry.local_name.as_ref()) {
                Some(english_name) => {
                    let local_name = entry.local_name.as_ref().unwrap_or(english_name);
                    (
                        self.name_mapping.standardize(english_name),
                        self.name_mapping.standardize(local_name),
                    )
                }
                None => {
                    tracing::warn!("City {} has no name, using its code", eurostat_code);
                    (eurostat_code.clone(), eurostat_code.clone())
                }
            };

        Some(CityModel {
            english_name,
            local_name,
            eurostat_code,
            local_country: entry.local_country.clone(),
            english_country: entry.english_country.clone(),
            country_emoji: entry.country_emoji.clone(),
            population: entry.population,
            erasmus_population: entry.erasmus_population,
            lat: entry.lat,
            lon: entry.lon,
            last_updated: None,
        })
    }

    /// Refreshes the urban perception columns of `metrics` for the selected topics.
    ///
    /// Columns of topics that are not selected keep their stored values.
    pub async fn update_urban_perception(&self, topics: &[Topic]) -> Result<SyncSummary, Error> {
        let reconciliation = Reconciliation::UrbanPerception(topics.to_vec());
        let rows = self.reconcile(&reconciliation);

        self.sync::<entity::prelude::Metrics>(&rows).await
    }

    /// Refreshes `transport_budget` with one row per supported city.
    pub async fn update_transport_budget(&self) -> Result<SyncSummary, Error> {
        let rows = self.reconcile(&Reconciliation::TransportBudget);

        self.sync::<entity::prelude::TransportBudget>(&rows).await
    }

    fn reconcile(&self, reconciliation: &Reconciliation) -> Vec<ReconciledRow> {
        let supported = self.loader.load_supported_codes();
        if supported.is_empty() {
            tracing::warn!("No supported cities configured");
        }

        let theme = reconciliation.theme();
        let rows = self.loader.load_theme(theme);
        let reconciled = reconcile(&rows, reconciliation, &supported);
        tracing::info!(
            "Reconciled {} {} rows into {} city rows",
            rows.len(),
            theme,
            reconciled.len()
        );

        reconciled
    }

    /// Upserts `rows` into the table of `E` inside one transaction.
    ///
    /// # Returns
    /// - `Ok(SyncSummary)` - Every row was written and the transaction committed
    /// - `Err(Error::DbErr)` - A row failed; the transaction was rolled back
    async fn sync<E>(&self, rows: &[ReconciledRow]) -> Result<SyncSummary, Error>
    where
        E: CodeKeyedEntity,
        E::Model: IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    {
        let table = E::default().table_name().to_string();

        let txn = self.db.begin().await?;
        let summary = SyncRepository::new(&txn)
            .upsert::<E>(rows)
            .await
            .inspect_err(|e| {
                tracing::error!("Upsert into {} failed, rolling back: {}", table, e)
            })?;
        txn.commit().await?;

        tracing::info!(
            "Upserted {} rows into {} ({} inserted, {} updated)",
            rows.len(),
            table,
            summary.inserted,
            summary.updated
        );

        Ok(summary)
    }
}
