use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240801_000001_create_cities_table::Cities;

static FK_METRICS_EUROSTAT_CODE: &str = "fk-metrics-eurostat_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Metrics::Table)
                    .if_not_exists()
                    .col(string(Metrics::EurostatCode).primary_key())
                    .col(double_null(Metrics::SafetyIndex))
                    .col(integer_null(Metrics::UniversityCount))
                    .col(double_null(Metrics::PublicTransportSatisfaction))
                    .col(timestamp_null(Metrics::LastUpdated))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_METRICS_EUROSTAT_CODE)
                            .from(Metrics::Table, Metrics::EurostatCode)
                            .to(Cities::Table, Cities::EurostatCode)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Metrics::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Metrics {
    Table,
    EurostatCode,
    SafetyIndex,
    UniversityCount,
    PublicTransportSatisfaction,
    LastUpdated,
}
