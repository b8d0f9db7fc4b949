use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240801_000001_create_cities_table::Cities;

static FK_COST_OF_LIVING_EUROSTAT_CODE: &str = "fk-cost_of_living-eurostat_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CostOfLiving::Table)
                    .if_not_exists()
                    .col(string(CostOfLiving::EurostatCode).primary_key())
                    .col(double_null(CostOfLiving::MonthlyBudget))
                    .col(double_null(CostOfLiving::CostOfLivingIndex))
                    .col(double_null(CostOfLiving::RentIndex))
                    .col(double_null(CostOfLiving::CostOfLivingPlusRentIndex))
                    .col(double_null(CostOfLiving::GroceriesIndex))
                    .col(double_null(CostOfLiving::RestaurantPriceIndex))
                    .col(double_null(CostOfLiving::LocalPurchasingPowerIndex))
                    .col(timestamp_null(CostOfLiving::LastUpdated))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COST_OF_LIVING_EUROSTAT_CODE)
                            .from(CostOfLiving::Table, CostOfLiving::EurostatCode)
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
            .drop_table(Table::drop().table(CostOfLiving::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CostOfLiving {
    Table,
    EurostatCode,
    MonthlyBudget,
    CostOfLivingIndex,
    RentIndex,
    CostOfLivingPlusRentIndex,
    GroceriesIndex,
    RestaurantPriceIndex,
    LocalPurchasingPowerIndex,
    LastUpdated,
}
