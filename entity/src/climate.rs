use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "climate")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub eurostat_code: String,
    pub mean_jan_min: Option<i32>,
    pub mean_feb_min: Option<i32>,
    pub mean_mar_min: Option<i32>,
    pub mean_apr_min: Option<i32>,
    pub mean_may_min: Option<i32>,
    pub mean_jun_min: Option<i32>,
    pub mean_jul_min: Option<i32>,
    pub mean_aug_min: Option<i32>,
    pub mean_sep_min: Option<i32>,
    pub mean_oct_min: Option<i32>,
    pub mean_nov_min: Option<i32>,
    pub mean_dec_min: Option<i32>,
    pub mean_jan_max: Option<i32>,
    pub mean_feb_max: Option<i32>,
    pub mean_mar_max: Option<i32>,
    pub mean_apr_max: Option<i32>,
    pub mean_may_max: Option<i32>,
    pub mean_jun_max: Option<i32>,
    pub mean_jul_max: Option<i32>,
    pub mean_aug_max: Option<i32>,
    pub mean_sep_max: Option<i32>,
    pub mean_oct_max: Option<i32>,
    pub mean_nov_max: Option<i32>,
    pub mean_dec_max: Option<i32>,
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
