pub use sea_orm_migration::prelude::*;

mod m20240801_000001_create_cities_table;
mod m20240801_000002_create_climate_table;
mod m20240801_000003_create_cost_of_living_table;
mod m20240801_000004_create_housing_table;
mod m20240801_000005_create_metrics_table;
mod m20240801_000006_create_guides_table;
mod m20240801_000007_create_transport_budget_table;
mod m20240801_000008_create_universities_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240801_000001_create_cities_table::Migration),
            Box::new(m20240801_000002_create_climate_table::Migration),
            Box::new(m20240801_000003_create_cost_of_living_table::Migration),
            Box::new(m20240801_000004_create_housing_table::Migration),
            Box::new(m20240801_000005_create_metrics_table::Migration),
            Box::new(m20240801_000006_create_guides_table::Migration),
            Box::new(m20240801_000007_create_transport_budget_table::Migration),
            Box::new(m20240801_000008_create_universities_table::Migration),
        ]
    }
}
