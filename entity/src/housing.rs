use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "housing")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub eurostat_code: String,
    pub rent_per_sqm: Option<f64>,
    pub area_per_person: Option<f64>,
    pub erasmus_factor: Option<f64>,
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
