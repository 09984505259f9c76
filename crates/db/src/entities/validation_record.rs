//! Validation record entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Validation record model.
///
/// Marks that an administrator has validated a complaint. Created through
/// the admin-only validation endpoint; never updated or deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "validation_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// The validated complaint.
    #[sea_orm(indexed)]
    pub complaint_id: i32,

    /// The admin who validated it.
    pub admin_id: i32,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::complaint::Entity",
        from = "Column::ComplaintId",
        to = "super::complaint::Column::Id",
        on_delete = "Cascade"
    )]
    Complaint,

    #[sea_orm(
        belongs_to = "super::admin::Entity",
        from = "Column::AdminId",
        to = "super::admin::Column::Id",
        on_delete = "Cascade"
    )]
    Admin,
}

impl Related<super::complaint::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Complaint.def()
    }
}

impl Related<super::admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
