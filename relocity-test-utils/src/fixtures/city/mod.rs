use sea_orm::{ActiveModelTrait, IntoActiveModel};

use crate::{error::TestError, TestContext};

pub mod factory;

impl TestContext {
    pub fn city<'a>(&'a mut self) -> CityFixtures<'a> {
        CityFixtures { setup: self }
    }
}

/// Inserts city rows and sub-records into the test database.
pub struct CityFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> CityFixtures<'a> {
    /// Insert a mock city without a country.
    pub async fn insert_mock_city(
        &mut self,
        eurostat_code: &str,
    ) -> Result<entity::city::Model, TestError> {
        self.insert_mock_city_in(eurostat_code, None).await
    }

    /// Insert a mock city located in `english_country`.
    pub async fn insert_mock_city_in(
        &mut self,
        eurostat_code: &str,
        english_country: Option<&str>,
    ) -> Result<entity::city::Model, TestError> {
        self.insert_city(factory::mock_city(eurostat_code, english_country))
            .await
    }

    pub async fn insert_city(
        &mut self,
        city: entity::city::Model,
    ) -> Result<entity::city::Model, TestError> {
        Ok(city.into_active_model().insert(&self.setup.db).await?)
    }

    pub async fn insert_climate(
        &mut self,
        climate: entity::climate::Model,
    ) -> Result<entity::climate::Model, TestError> {
        Ok(climate.into_active_model().insert(&self.setup.db).await?)
    }

    pub async fn insert_cost_of_living(
        &mut self,
        cost_of_living: entity::cost_of_living::Model,
    ) -> Result<entity::cost_of_living::Model, TestError> {
        Ok(cost_of_living
            .into_active_model()
            .insert(&self.setup.db)
            .await?)
    }

    pub async fn insert_guide(
        &mut self,
        guide: entity::guide::Model,
    ) -> Result<entity::guide::Model, TestError> {
        Ok(guide.into_active_model().insert(&self.setup.db).await?)
    }

    pub async fn insert_housing(
        &mut self,
        housing: entity::housing::Model,
    ) -> Result<entity::housing::Model, TestError> {
        Ok(housing.into_active_model().insert(&self.setup.db).await?)
    }

    pub async fn insert_metrics(
        &mut self,
        metrics: entity::metrics::Model,
    ) -> Result<entity::metrics::Model, TestError> {
        Ok(metrics.into_active_model().insert(&self.setup.db).await?)
    }

    pub async fn insert_transport_budget(
        &mut self,
        transport_budget: entity::transport_budget::Model,
    ) -> Result<entity::transport_budget::Model, TestError> {
        Ok(transport_budget
            .into_active_model()
            .insert(&self.setup.db)
            .await?)
    }

    pub async fn insert_university(
        &mut self,
        university: entity::university::Model,
    ) -> Result<entity::university::Model, TestError> {
        Ok(university
            .into_active_model()
            .insert(&self.setup.db)
            .await?)
    }
}
