//! Photo repository.

use std::sync::Arc;

use crate::entities::{Photo, photo};
use lapor_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

/// Photo repository for database operations.
#[derive(Clone)]
pub struct PhotoRepository {
    db: Arc<DatabaseConnection>,
}

impl PhotoRepository {
    /// Create a new photo repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Create a new photo.
    pub async fn create(&self, model: photo::ActiveModel) -> AppResult<photo::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find all photos for one complaint.
    pub async fn find_by_complaint(&self, complaint_id: i32) -> AppResult<Vec<photo::Model>> {
        Photo::find()
            .filter(photo::Column::ComplaintId.eq(complaint_id))
            .order_by_asc(photo::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find photos for a set of complaints (listing join).
    pub async fn find_by_complaint_ids(
        &self,
        complaint_ids: &[i32],
    ) -> AppResult<Vec<photo::Model>> {
        if complaint_ids.is_empty() {
            return Ok(vec![]);
        }

        Photo::find()
            .filter(photo::Column::ComplaintId.is_in(complaint_ids.to_vec()))
            .order_by_asc(photo::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
