use sea_orm_migration::{prelude::*, schema::*};

static IDX_CITIES_LOCAL_NAME: &str = "idx-cities-local_name";
static IDX_CITIES_ENGLISH_NAME: &str = "idx-cities-english_name";
static IDX_CITIES_ENGLISH_COUNTRY: &str = "idx-cities-english_country";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cities::Table)
                    .if_not_exists()
                    .col(string(Cities::EurostatCode).primary_key())
                    .col(string(Cities::LocalName))
                    .col(string(Cities::EnglishName))
                    .col(string_null(Cities::LocalCountry))
                    .col(string_null(Cities::EnglishCountry))
                    .col(string_null(Cities::CountryEmoji))
                    .col(big_integer_null(Cities::Population))
                    .col(integer_null(Cities::ErasmusPopulation))
                    .col(double_null(Cities::Lat))
                    .col(double_null(Cities::Lon))
                    .col(timestamp_null(Cities::LastUpdated))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CITIES_LOCAL_NAME)
                    .table(Cities::Table)
                    .col(Cities::LocalName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CITIES_ENGLISH_NAME)
                    .table(Cities::Table)
                    .col(Cities::EnglishName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CITIES_ENGLISH_COUNTRY)
                    .table(Cities::Table)
                    .col(Cities::EnglishCountry)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CITIES_ENGLISH_COUNTRY)
                    .table(Cities::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CITIES_ENGLISH_NAME)
                    .table(Cities::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CITIES_LOCAL_NAME)
                    .table(Cities::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Cities::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Cities {
    Table,
    EurostatCode,
    LocalName,
    EnglishName,
    LocalCountry,
    EnglishCountry,
    CountryEmoji,
    Population,
    ErasmusPopulation,
    Lat,
    Lon,
    LastUpdated,
}
