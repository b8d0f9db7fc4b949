use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240801_000001_create_cities_table::Cities;

static FK_CLIMATE_EUROSTAT_CODE: &str = "fk-climate-eurostat_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Climate::Table)
                    .if_not_exists()
                    .col(string(Climate::EurostatCode).primary_key())
                    .col(integer_null(Climate::MeanJanMin))
                    .col(integer_null(Climate::MeanFebMin))
                    .col(integer_null(Climate::MeanMarMin))
                    .col(integer_null(Climate::MeanAprMin))
                    .col(integer_null(Climate::MeanMayMin))
                    .col(integer_null(Climate::MeanJunMin))
                    .col(integer_null(Climate::MeanJulMin))
                    .col(integer_null(Climate::MeanAugMin))
                    .col(integer_null(Climate::MeanSepMin))
                    .col(integer_null(Climate::MeanOctMin))
                    .col(integer_null(Climate::MeanNovMin))
                    .col(integer_null(Climate::MeanDecMin))
                    .col(integer_null(Climate::MeanJanMax))
                    .col(integer_null(Climate::MeanFebMax))
                    .col(integer_null(Climate::MeanMarMax))
                    .col(integer_null(Climate::MeanAprMax))
                    .col(integer_null(Climate::MeanMayMax))
                    .col(integer_null(Climate::MeanJunMax))
                    .col(integer_null(Climate::MeanJulMax))
                    .col(integer_null(Climate::MeanAugMax))
                    .col(integer_null(Climate::MeanSepMax))
                    .col(integer_null(Climate::MeanOctMax))
                    .col(integer_null(Climate::MeanNovMax))
                    .col(integer_null(Climate::MeanDecMax))
                    .col(timestamp_null(Climate::LastUpdated))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CLIMATE_EUROSTAT_CODE)
                            .from(Climate::Table, Climate::EurostatCode)
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
            .drop_table(Table::drop().table(Climate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Climate {
    Table,
    EurostatCode,
    MeanJanMin,
    MeanFebMin,
    MeanMarMin,
    MeanAprMin,
    MeanMayMin,
    MeanJunMin,
    MeanJulMin,
    MeanAugMin,
    MeanSepMin,
    MeanOctMin,
    MeanNovMin,
    MeanDecMin,
    MeanJanMax,
    MeanFebMax,
    MeanMarMax,
    MeanAprMax,
    MeanMayMax,
    MeanJunMax,
    MeanJulMax,
    MeanAugMax,
    MeanSepMax,
    MeanOctMax,
    MeanNovMax,
    MeanDecMax,
    LastUpdated,
}
