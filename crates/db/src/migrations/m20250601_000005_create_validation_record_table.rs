//! Create `validation_record` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ValidationRecord::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ValidationRecord::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ValidationRecord::ComplaintId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ValidationRecord::AdminId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ValidationRecord::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_validation_record_complaint")
                            .from(ValidationRecord::Table, ValidationRecord::ComplaintId)
                            .to(Complaint::Table, Complaint::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_validation_record_admin")
                            .from(ValidationRecord::Table, ValidationRecord::AdminId)
                            .to(Admin::Table, Admin::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: complaint_id (validation history for a complaint)
        manager
            .create_index(
                Index::create()
                    .name("idx_validation_record_complaint_id")
                    .table(ValidationRecord::Table)
                    .col(ValidationRecord::ComplaintId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ValidationRecord::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ValidationRecord {
    Table,
    Id,
    ComplaintId,
    AdminId,
    CreatedAt,
}

#[derive(Iden)]
enum Complaint {
    Table,
    Id,
}

#[derive(Iden)]
enum Admin {
    Table,
    Id,
}
