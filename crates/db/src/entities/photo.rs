//! Photo entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Photo model.
///
/// A complaint's photographic evidence. The `file` column holds either a
/// storage key under the uploads root or a complete base64 `data:` URL,
/// depending on the configured storage backend. Immutable once written.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// The complaint this photo evidences.
    #[sea_orm(indexed)]
    pub complaint_id: i32,

    /// The citizen who submitted the photo.
    pub citizen_id: i32,

    /// Storage key or inline `data:` URL.
    #[sea_orm(column_type = "Text")]
    pub file: String,

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
        belongs_to = "super::citizen::Entity",
        from = "Column::CitizenId",
        to = "super::citizen::Column::Id",
        on_delete = "Cascade"
    )]
    Citizen,
}

impl Related<super::complaint::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Complaint.def()
    }
}

impl Related<super::citizen::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Citizen.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
