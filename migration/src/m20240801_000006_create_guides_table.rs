use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240801_000001_create_cities_table::Cities;

static FK_GUIDES_EUROSTAT_CODE: &str = "fk-guides-eurostat_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guides::Table)
                    .if_not_exists()
                    .col(string(Guides::EurostatCode).primary_key())
                    .col(text_null(Guides::Text))
                    .col(timestamp_null(Guides::LastUpdated))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GUIDES_EUROSTAT_CODE)
                            .from(Guides::Table, Guides::EurostatCode)
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
            .drop_table(Table::drop().table(Guides::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Guides {
    Table,
    EurostatCode,
    Text,
    LastUpdated,
}
