//! Citizen entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Citizen model.
///
/// A registered complainant identity. Citizens are created on their first
/// complaint submission and never updated or deleted by the intake
/// workflow.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "citizen")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Full name as submitted.
    pub name: String,

    /// National ID number (NIK): exactly 16 ASCII digits.
    ///
    /// Stored as an opaque digit string; treating it as a number loses
    /// leading zeros and risks precision loss at 16 digits. Indexed,
    /// not unique: concurrent first submissions can duplicate it.
    #[sea_orm(indexed)]
    pub id_number: String,

    /// Phone number, digits only.
    #[sea_orm(nullable)]
    pub phone: Option<String>,

    /// Postal address.
    pub address: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::complaint::Entity")]
    Complaint,
}

impl Related<super::complaint::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Complaint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
