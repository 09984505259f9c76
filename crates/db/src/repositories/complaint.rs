//! Complaint repository.

use std::sync::Arc;

use crate::entities::{Complaint, complaint};
use lapor_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

/// Complaint repository for database operations.
#[derive(Clone)]
pub struct ComplaintRepository {
    db: Arc<DatabaseConnection>,
}

impl ComplaintRepository {
    /// Create a new complaint repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a complaint by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<complaint::Model>> {
        Complaint::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a complaint by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<complaint::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::ComplaintNotFound(id.to_string()))
    }

    /// List all complaints, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<complaint::Model>> {
        Complaint::find()
            .order_by_desc(complaint::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new complaint.
    pub async fn create(&self, model: complaint::ActiveModel) -> AppResult<complaint::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Overwrite a complaint's status and optionally its response text.
    ///
    /// No transition check is applied: any status may replace any other.
    /// The update timestamp is always refreshed. Fails with
    /// [`AppError::ComplaintNotFound`] when the ID does not exist and no
    /// row is mutated.
    pub async fn update_status(
        &self,
        id: i32,
        status: complaint::ComplaintStatus,
        response: Option<String>,
    ) -> AppResult<complaint::Model> {
        let existing = self.get_by_id(id).await?;

        let mut active: complaint::ActiveModel = existing.into();
        active.status = Set(status);
        if let Some(response) = response {
            active.response = Set(Some(response));
        }
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        active
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
