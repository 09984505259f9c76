//! Admin entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Administrator model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name.
    pub name: String,

    /// Login email, unique.
    #[sea_orm(unique)]
    pub email: String,

    /// Argon2 password hash. Never serialized to API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::validation_record::Entity")]
    ValidationRecord,
}

impl Related<super::validation_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ValidationRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
