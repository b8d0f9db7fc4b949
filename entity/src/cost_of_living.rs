use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cost_of_living")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub eurostat_code: String,
    pub monthly_budget: Option<f64>,
    pub cost_of_living_index: Option<f64>,
    pub rent_index: Option<f64>,
    pub cost_of_living_plus_rent_index: Option<f64>,
    pub groceries_index: Option<f64>,
    pub restaurant_price_index: Option<f64>,
    pub local_purchasing_power_index: Option<f64>,
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
