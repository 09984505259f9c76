//! Validation records: an admin marking a complaint as reviewed.

use chrono::Utc;
use lapor_common::AppResult;
use lapor_db::entities::validation_record;
use lapor_db::repositories::{ComplaintRepository, ValidationRecordRepository};
use sea_orm::Set;
use tracing::info;

/// Validation record service.
#[derive(Clone)]
pub struct ValidationRecordService {
    records: ValidationRecordRepository,
    complaints: ComplaintRepository,
}

impl ValidationRecordService {
    /// Create a new validation record service.
    #[must_use]
    pub const fn new(records: ValidationRecordRepository, complaints: ComplaintRepository) -> Self {
        Self { records, complaints }
    }

    /// Record that `admin_id` validated `complaint_id`.
    ///
    /// The complaint must exist; repeat validations by the same or
    /// another admin each get their own row.
    pub async fn create(
        &self,
        complaint_id: i32,
        admin_id: i32,
    ) -> AppResult<validation_record::Model> {
        let complaint = self.complaints.get_by_id(complaint_id).await?;

        let record = self
            .records
            .create(validation_record::ActiveModel {
                complaint_id: Set(complaint.id),
                admin_id: Set(admin_id),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            })
            .await?;

        info!(complaint_id, admin_id, "Complaint validated");
        Ok(record)
    }

    /// List validation records for one complaint, oldest first.
    pub async fn list_for_complaint(
        &self,
        complaint_id: i32,
    ) -> AppResult<Vec<validation_record::Model>> {
        self.records.find_by_complaint(complaint_id).await
    }
}
