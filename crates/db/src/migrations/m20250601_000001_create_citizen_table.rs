//! Create `citizen` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Citizen::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Citizen::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Citizen::Name).string_len(256).not_null())
                    .col(
                        ColumnDef::new(Citizen::IdNumber)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Citizen::Phone).string_len(32))
                    .col(ColumnDef::new(Citizen::Address).string_len(512).not_null())
                    .col(
                        ColumnDef::new(Citizen::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup index only, no uniqueness: concurrent first-time
        // submissions may create duplicate citizen rows and readers
        // take the oldest.
        manager
            .create_index(
                Index::create()
                    .name("idx_citizen_id_number")
                    .table(Citizen::Table)
                    .col(Citizen::IdNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Citizen::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Citizen {
    Table,
    Id,
    Name,
    IdNumber,
    Phone,
    Address,
    CreatedAt,
}
