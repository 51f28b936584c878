//! Pricing rule database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::PriceRule;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pricing_rules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub from_zone: String,
    pub to_zone: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PriceRule {
    fn from(model: Model) -> Self {
        PriceRule {
            id: model.id,
            from_zone: model.from_zone,
            to_zone: model.to_zone,
            amount: model.amount,
        }
    }
}
