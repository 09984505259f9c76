//! Create `complaint` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Complaint::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Complaint::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Complaint::CitizenId).integer().not_null())
                    .col(ColumnDef::new(Complaint::Description).text().not_null())
                    .col(
                        ColumnDef::new(Complaint::Location)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Complaint::Status)
                            .string_len(32)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Complaint::Response).text())
                    .col(
                        ColumnDef::new(Complaint::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Complaint::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_complaint_citizen")
                            .from(Complaint::Table, Complaint::CitizenId)
                            .to(Citizen::Table, Citizen::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: citizen_id (per-citizen listing)
        manager
            .create_index(
                Index::create()
                    .name("idx_complaint_citizen_id")
                    .table(Complaint::Table)
                    .col(Complaint::CitizenId)
                    .to_owned(),
            )
            .await?;

        // Index: created_at (newest-first listing)
        manager
            .create_index(
                Index::create()
                    .name("idx_complaint_created_at")
                    .table(Complaint::Table)
                    .col(Complaint::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Complaint::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Complaint {
    Table,
    Id,
    CitizenId,
    Description,
    Location,
    Status,
    Response,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Citizen {
    Table,
    Id,
}
