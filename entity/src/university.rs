use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "universities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub erasmus_code: String,
    pub name: String,
    pub english_name: Option<String>,
    #[sea_orm(indexed)]
    pub eurostat_code: String,
    pub country_code: Option<String>,
    pub category: Option<String>,
    pub standardized_category: Option<i32>,
    pub size_class: Option<i32>,
    pub url: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub remote_campuses: Option<String>,
    pub total_students: Option<i64>,
    pub mobile_students: Option<i64>,
    pub generic_students: Option<i64>,
    pub education_students: Option<i64>,
    pub arts_humanities_students: Option<i64>,
    pub social_sciences_students: Option<i64>,
    pub business_law_students: Option<i64>,
    pub it_students: Option<i64>,
    pub aec_students: Option<i64>,
    pub agriculture_vet_students: Option<i64>,
    pub med_students: Option<i64>,
    pub services_students: Option<i64>,
    pub women_share: Option<f64>,
    pub foreign_share: Option<f64>,
    pub mobile_share: Option<f64>,
    pub last_updated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::EurostatCode",
        to = "super::city::Column::EurostatCode",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    City,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
