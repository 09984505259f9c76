//! Validation record repository.

use std::sync::Arc;

use crate::entities::{ValidationRecord, validation_record};
use lapor_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

/// Validation record repository for database operations.
#[derive(Clone)]
pub struct ValidationRecordRepository {
    db: Arc<DatabaseConnection>,
}

impl ValidationRecordRepository {
    /// Create a new validation record repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Create a new validation record.
    pub async fn create(
        &self,
        model: validation_record::ActiveModel,
    ) -> AppResult<validation_record::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find all validation records for one complaint.
    pub async fn find_by_complaint(
        &self,
        complaint_id: i32,
    ) -> AppResult<Vec<validation_record::Model>> {
        ValidationRecord::find()
            .filter(validation_record::Column::ComplaintId.eq(complaint_id))
            .order_by_asc(validation_record::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Set};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_validation_record() {
        let record = validation_record::Model {
            id: 1,
            complaint_id: 7,
            admin_id: 2,
            created_at: Utc::now().into(),
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 1,
                    rows_affected: 1,
                }])
                .append_query_results([[record.clone()]])
                .into_connection(),
        );

        let repo = ValidationRecordRepository::new(db);

        let active = validation_record::ActiveModel {
            complaint_id: Set(7),
            admin_id: Set(2),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = repo.create(active).await.unwrap();
        assert_eq!(result.complaint_id, 7);
        assert_eq!(result.admin_id, 2);
    }
}
