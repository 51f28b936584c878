//! Migration: Create rides table.
//!
//! Driver and payment columns hold copies; there are no foreign keys across services.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rides::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rides::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rides::PassengerName).string().not_null())
                    .col(ColumnDef::new(Rides::FromZone).string().not_null())
                    .col(ColumnDef::new(Rides::ToZone).string().not_null())
                    .col(ColumnDef::new(Rides::DriverId).integer().not_null())
                    .col(ColumnDef::new(Rides::DriverName).string().not_null())
                    .col(ColumnDef::new(Rides::Amount).double().not_null())
                    .col(
                        ColumnDef::new(Rides::Currency)
                            .string()
                            .not_null()
                            .default("CAD"),
                    )
                    .col(ColumnDef::new(Rides::PaymentId).integer().null())
                    .col(ColumnDef::new(Rides::PaymentStatus).string().null())
                    .col(
                        ColumnDef::new(Rides::Status)
                            .string()
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(
                        ColumnDef::new(Rides::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rides::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rides_status")
                    .table(Rides::Table)
                    .col(Rides::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rides::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Rides {
    Table,
    Id,
    PassengerName,
    FromZone,
    ToZone,
    DriverId,
    DriverName,
    Amount,
    Currency,
    PaymentId,
    PaymentStatus,
    Status,
    CreatedAt,
    UpdatedAt,
}
