//! Create `photo` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Photo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Photo::ComplaintId).integer().not_null())
                    .col(ColumnDef::new(Photo::CitizenId).integer().not_null())
                    // Text, not varchar: inline storage keeps the whole
                    // base64 data URL in this column.
                    .col(ColumnDef::new(Photo::File).text().not_null())
                    .col(
                        ColumnDef::new(Photo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_complaint")
                            .from(Photo::Table, Photo::ComplaintId)
                            .to(Complaint::Table, Complaint::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_citizen")
                            .from(Photo::Table, Photo::CitizenId)
                            .to(Citizen::Table, Citizen::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: complaint_id (photos for a complaint)
        manager
            .create_index(
                Index::create()
                    .name("idx_photo_complaint_id")
                    .table(Photo::Table)
                    .col(Photo::ComplaintId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photo::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Photo {
    Table,
    Id,
    ComplaintId,
    CitizenId,
    File,
    CreatedAt,
}

#[derive(Iden)]
enum Complaint {
    Table,
    Id,
}

#[derive(Iden)]
enum Citizen {
    Table,
    Id,
}
