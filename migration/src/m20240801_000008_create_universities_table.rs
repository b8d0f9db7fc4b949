use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240801_000001_create_cities_table::Cities;

static IDX_UNIVERSITIES_NAME: &str = "idx-universities-name";
static IDX_UNIVERSITIES_EUROSTAT_CODE: &str = "idx-universities-eurostat_code";
static FK_UNIVERSITIES_EUROSTAT_CODE: &str = "fk-universities-eurostat_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Universities::Table)
                    .if_not_exists()
                    .col(string(Universities::ErasmusCode).primary_key())
                    .col(string(Universities::Name))
                    .col(string_null(Universities::EnglishName))
                    .col(string(Universities::EurostatCode))
                    .col(string_null(Universities::CountryCode))
                    .col(string_null(Universities::Category))
                    .col(integer_null(Universities::StandardizedCategory))
                    .col(integer_null(Universities::SizeClass))
                    .col(string_null(Universities::Url))
                    .col(double_null(Universities::Lat))
                    .col(double_null(Universities::Lon))
                    .col(string_null(Universities::RemoteCampuses))
                    .col(big_integer_null(Universities::TotalStudents))
                    .col(big_integer_null(Universities::MobileStudents))
                    .col(big_integer_null(Universities::GenericStudents))
                    .col(big_integer_null(Universities::EducationStudents))
                    .col(big_integer_null(Universities::ArtsHumanitiesStudents))
                    .col(big_integer_null(Universities::SocialSciencesStudents))
                    .col(big_integer_null(Universities::BusinessLawStudents))
                    .col(big_integer_null(Universities::ItStudents))
                    .col(big_integer_null(Universities::AecStudents))
                    .col(big_integer_null(Universities::AgricultureVetStudents))
                    .col(big_integer_null(Universities::MedStudents))
                    .col(big_integer_null(Universities::ServicesStudents))
                    .col(double_null(Universities::WomenShare))
                    .col(double_null(Universities::ForeignShare))
                    .col(double_null(Universities::MobileShare))
                    .col(timestamp_null(Universities::LastUpdated))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_UNIVERSITIES_EUROSTAT_CODE)
                            .from(Universities::Table, Universities::EurostatCode)
                            .to(Cities::Table, Cities::EurostatCode)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_UNIVERSITIES_NAME)
                    .table(Universities::Table)
                    .col(Universities::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_UNIVERSITIES_EUROSTAT_CODE)
                    .table(Universities::Table)
                    .col(Universities::EurostatCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_UNIVERSITIES_EUROSTAT_CODE)
                    .table(Universities::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_UNIVERSITIES_NAME)
                    .table(Universities::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Universities::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Universities {
    Table,
    ErasmusCode,
    Name,
    EnglishName,
    EurostatCode,
    CountryCode,
    Category,
    StandardizedCategory,
    SizeClass,
    Url,
    Lat,
    Lon,
    RemoteCampuses,
    TotalStudents,
    MobileStudents,
    GenericStudents,
    EducationStudents,
    ArtsHumanitiesStudents,
    SocialSciencesStudents,
    BusinessLawStudents,
    ItStudents,
    AecStudents,
    AgricultureVetStudents,
    MedStudents,
    ServicesStudents,
    WomenShare,
    ForeignShare,
    MobileShare,
    LastUpdated,
}
