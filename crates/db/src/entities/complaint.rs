//! Complaint entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Complaint status.
///
/// A flat enumeration, not a guarded state machine: the store permits any
/// overwrite. Typical flow is pending → in-progress → completed, or
/// pending → rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum ComplaintStatus {
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    #[sea_orm(string_value = "in-progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl ComplaintStatus {
    /// Parse a wire value ("pending", "in-progress", ...).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Complaint model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "complaint")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// The citizen who submitted the complaint.
    #[sea_orm(indexed)]
    pub citizen_id: i32,

    /// Free-text description of the issue.
    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Free-text location of the issue.
    pub location: String,

    /// Current status. Always starts at pending.
    pub status: ComplaintStatus,

    /// Administrator response text. Set only by admin updates.
    #[sea_orm(column_type = "Text", nullable)]
    pub response: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    /// Refreshed on every status update.
    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::citizen::Entity",
        from = "Column::CitizenId",
        to = "super::citizen::Column::Id",
        on_delete = "Cascade"
    )]
    Citizen,

    #[sea_orm(has_many = "super::photo::Entity")]
    Photo,
}

impl Related<super::citizen::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Citizen.def()
    }
}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(
            ComplaintStatus::parse("pending"),
            Some(ComplaintStatus::Pending)
        );
        assert_eq!(
            ComplaintStatus::parse("in-progress"),
            Some(ComplaintStatus::InProgress)
        );
        assert_eq!(
            ComplaintStatus::parse("completed"),
            Some(ComplaintStatus::Completed)
        );
        assert_eq!(
            ComplaintStatus::parse("rejected"),
            Some(ComplaintStatus::Rejected)
        );
        assert_eq!(ComplaintStatus::parse("archived"), None);
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(ComplaintStatus::default(), ComplaintStatus::Pending);
    }
}
