use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub eurostat_code: String,
    pub local_name: String,
    pub english_name: String,
    pub local_country: Option<String>,
    pub english_country: Option<String>,
    pub country_emoji: Option<String>,
    pub population: Option<i64>,
    pub erasmus_population: Option<i32>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub last_updated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::climate::Entity")]
    Climate,
    #[sea_orm(has_one = "super::cost_of_living::Entity")]
    CostOfLiving,
    #[sea_orm(has_one = "super::guide::Entity")]
    Guide,
    #[sea_orm(has_one = "super::housing::Entity")]
    Housing,
    #[sea_orm(has_one = "super::metrics::Entity")]
    Metrics,
    #[sea_orm(has_one = "super::transport_budget::Entity")]
    TransportBudget,
    #[sea_orm(has_many = "super::university::Entity")]
    University,
}

impl Related<super::climate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Climate.def()
    }
}

impl Related<super::cost_of_living::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CostOfLiving.def()
    }
}

impl Related<super::guide::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guide.def()
    }
}

impl Related<super::housing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Housing.def()
    }
}

impl Related<super::metrics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Metrics.def()
    }
}

impl Related<super::transport_budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransportBudget.def()
    }
}

impl Related<super::university::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::University.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
