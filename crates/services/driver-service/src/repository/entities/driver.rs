//! Driver database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Driver;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub zone: String,
    pub available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Driver {
    fn from(model: Model) -> Self {
        Driver {
            id: model.id,
            name: model.name,
            zone: model.zone,
            available: model.available,
        }
    }
}
