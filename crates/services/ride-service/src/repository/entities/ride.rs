//! Ride database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, PaymentStatus, Ride};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rides")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub passenger_name: String,
    pub from_zone: String,
    pub to_zone: String,
    pub driver_id: i32,
    pub driver_name: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub currency: String,
    pub payment_id: Option<i32>,
    pub payment_status: Option<String>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Ride {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let payment_status = model
            .payment_status
            .as_deref()
            .map(str::parse::<PaymentStatus>)
            .transpose()?;

        Ok(Ride {
            id: model.id,
            passenger_name: model.passenger_name,
            from_zone: model.from_zone,
            to_zone: model.to_zone,
            driver_id: model.driver_id,
            driver_name: model.driver_name,
            amount: model.amount,
            currency: model.currency,
            payment_id: model.payment_id,
            payment_status,
            status: model.status.parse()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
