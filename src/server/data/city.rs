use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{NullOrdering, OnConflict, Order},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{CityModel, CityRecord};

/// Reads cities together with their sub-records, and seeds the `cities` table.
///
/// Sub-records are fetched with one explicit query per side table keyed by city code, never by
/// lazy relation traversal. Pass a `DatabaseTransaction` to read or write inside one scope.
pub struct CityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts cities or overwrites the stored identity of existing ones.
    ///
    /// `last_updated` is stamped with the current time regardless of the value passed in.
    pub async fn upsert_many(&self, cities: Vec<CityModel>) -> Result<Vec<CityModel>, DbErr> {
        if cities.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let cities = cities.into_iter().map(|city| entity::city::ActiveModel {
            eurostat_code: ActiveValue::Set(city.eurostat_code),
            local_name: ActiveValue::Set(city.local_name),
            english_name: ActiveValue::Set(city.english_name),
            local_country: ActiveValue::Set(city.local_country),
            english_country: ActiveValue::Set(city.english_country),
            country_emoji: ActiveValue::Set(city.country_emoji),
            population: ActiveValue::Set(city.population),
            erasmus_population: ActiveValue::Set(city.erasmus_population),
            lat: ActiveValue::Set(city.lat),
            lon: ActiveValue::Set(city.lon),
            last_updated: ActiveValue::Set(Some(now)),
        });

        entity::prelude::City::insert_many(cities)
            .on_conflict(
                OnConflict::column(entity::city::Column::EurostatCode)
                    .update_columns([
                        entity::city::Column::LocalName,
                        entity::city::Column::EnglishName,
                        entity::city::Column::LocalCountry,
                        entity::city::Column::EnglishCountry,
                        entity::city::Column::CountryEmoji,
                        entity::city::Column::Population,
                        entity::city::Column::ErasmusPopulation,
                        entity::city::Column::Lat,
                        entity::city::Column::Lon,
                        entity::city::Column::LastUpdated,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Loads one city with every sub-record and its universities.
    pub async fn find_record(&self, eurostat_code: &str) -> Result<Option<CityRecord>, DbErr> {
        let Some(city) = entity::prelude::City::find_by_id(eurostat_code)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let code = city.eurostat_code.clone();

        Ok(Some(CityRecord {
            city,
            climate: entity::prelude::Climate::find_by_id(code.as_str())
                .one(self.db)
                .await?,
            cost_of_living: entity::prelude::CostOfLiving::find_by_id(code.as_str())
                .one(self.db)
                .await?,
            guide: entity::prelude::Guide::find_by_id(code.as_str())
                .one(self.db)
                .await?,
            housing: entity::prelude::Housing::find_by_id(code.as_str())
                .one(self.db)
                .await?,
            metrics: entity::prelude::Metrics::find_by_id(code.as_str())
                .one(self.db)
                .await?,
            transport_budget: entity::prelude::TransportBudget::find_by_id(code.as_str())
                .one(self.db)
                .await?,
            universities: entity::prelude::University::find()
                .filter(entity::university::Column::EurostatCode.eq(code.as_str()))
                .all(self.db)
                .await?,
        }))
    }

    /// Loads every city, largest Erasmus population first, with the sub-records the overview
    /// listing reads: climate, cost of living and metrics.
    ///
    /// Cities without an Erasmus population come last; ties are ordered by code.
    pub async fn find_overview_records(&self) -> Result<Vec<CityRecord>, DbErr> {
        let cities = entity::prelude::City::find()
            .order_by_with_nulls(
                entity::city::Column::ErasmusPopulation,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(entity::city::Column::EurostatCode)
            .all(self.db)
            .await?;

        if cities.is_empty() {
            return Ok(Vec::new());
        }

        let codes: Vec<String> = cities.iter().map(|c| c.eurostat_code.clone()).collect();

        let mut climate: HashMap<String, _> = entity::prelude::Climate::find()
            .filter(entity::climate::Column::EurostatCode.is_in(codes.iter().cloned()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| (m.eurostat_code.clone(), m))
            .collect();
        let mut cost_of_living: HashMap<String, _> = entity::prelude::CostOfLiving::find()
            .filter(entity::cost_of_living::Column::EurostatCode.is_in(codes.iter().cloned()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| (m.eurostat_code.clone(), m))
            .collect();
        let mut metrics: HashMap<String, _> = entity::prelude::Metrics::find()
            .filter(entity::metrics::Column::EurostatCode.is_in(codes.iter().cloned()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| (m.eurostat_code.clone(), m))
            .collect();

        Ok(cities
            .into_iter()
            .map(|city| {
                let code = city.eurostat_code.clone();
                let mut record = CityRecord::new(city);
                record.climate = climate.remove(&code);
                record.cost_of_living = cost_of_living.remove(&code);
                record.metrics = metrics.remove(&code);
                record
            })
            .collect())
    }
}
