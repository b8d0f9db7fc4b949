use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240801_000001_create_cities_table::Cities;

static FK_TRANSPORT_BUDGET_EUROSTAT_CODE: &str = "fk-transport_budget-eurostat_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransportBudget::Table)
                    .if_not_exists()
                    .col(string(TransportBudget::EurostatCode).primary_key())
                    .col(string_null(TransportBudget::Source))
                    .col(date_null(TransportBudget::SourceDate))
                    .col(double_null(TransportBudget::MonthlyTicket))
                    .col(timestamp_null(TransportBudget::LastUpdated))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRANSPORT_BUDGET_EUROSTAT_CODE)
                            .from(TransportBudget::Table, TransportBudget::EurostatCode)
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
            .drop_table(Table::drop().table(TransportBudget::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TransportBudget {
    Table,
    EurostatCode,
    Source,
    SourceDate,
    MonthlyTicket,
    LastUpdated,
}
