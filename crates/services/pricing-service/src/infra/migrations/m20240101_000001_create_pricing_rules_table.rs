//! Migration: Create pricing_rules table.
//!
//! The route index is deliberately non-unique: duplicate routes are allowed.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PricingRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PricingRules::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PricingRules::FromZone).string().not_null())
                    .col(ColumnDef::new(PricingRules::ToZone).string().not_null())
                    .col(ColumnDef::new(PricingRules::Amount).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pricing_rules_route")
                    .table(PricingRules::Table)
                    .col(PricingRules::FromZone)
                    .col(PricingRules::ToZone)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PricingRules::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PricingRules {
    Table,
    Id,
    FromZone,
    ToZone,
    Amount,
}
