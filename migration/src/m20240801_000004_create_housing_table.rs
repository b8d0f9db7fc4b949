use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240801_000001_create_cities_table::Cities;

static FK_HOUSING_EUROSTAT_CODE: &str = "fk-housing-eurostat_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Housing::Table)
                    .if_not_exists()
                    .col(string(Housing::EurostatCode).primary_key())
                    .col(double_null(Housing::RentPerSqm))
                    .col(double_null(Housing::AreaPerPerson))
                    .col(double_null(Housing::ErasmusFactor))
                    .col(timestamp_null(Housing::LastUpdated))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_HOUSING_EUROSTAT_CODE)
                            .from(Housing::Table, Housing::EurostatCode)
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
            .drop_table(Table::drop().table(Housing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Housing {
    Table,
    EurostatCode,
    RentPerSqm,
    AreaPerPerson,
    ErasmusFactor,
    LastUpdated,
}
