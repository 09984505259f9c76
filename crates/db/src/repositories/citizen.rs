//! Citizen repository.

use std::sync::Arc;

use crate::entities::{Citizen, citizen};
use lapor_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

/// Citizen repository for database operations.
#[derive(Clone)]
pub struct CitizenRepository {
    db: Arc<DatabaseConnection>,
}

impl CitizenRepository {
    /// Create a new citizen repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a citizen by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<citizen::Model>> {
        Citizen::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a citizen by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<citizen::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::CitizenNotFound(id.to_string()))
    }

    /// Find a citizen by national ID number (exact match).
    ///
    /// The column is not unique; if the duplicate-citizen race has left
    /// several rows with the same number, the oldest one wins.
    pub async fn find_by_id_number(&self, id_number: &str) -> AppResult<Option<citizen::Model>> {
        Citizen::find()
            .filter(citizen::Column::IdNumber.eq(id_number))
            .order_by_asc(citizen::Column::Id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find citizens for a set of IDs (listing join).
    pub async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<citizen::Model>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        Citizen::find()
            .filter(citizen::Column::Id.is_in(ids.to_vec()))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List all citizens.
    pub async fn find_all(&self) -> AppResult<Vec<citizen::Model>> {
        Citizen::find()
            .order_by_asc(citizen::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new citizen.
    ///
    /// Does not check for duplicates; that is the submission workflow's
    /// responsibility.
    pub async fn create(&self, model: citizen::ActiveModel) -> AppResult<citizen::Model> {
        model
            .insert(self.db.as_ref())
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

    fn create_test_citizen(id: i32, id_number: &str) -> citizen::Model {
        citizen::Model {
            id,
            name: "Ahmad".to_string(),
            id_number: id_number.to_string(),
            phone: Some("081234567890".to_string()),
            address: "Jl. Merdeka".to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_number_found() {
        let citizen = create_test_citizen(1, "3174012345678901");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[citizen.clone()]])
                .into_connection(),
        );

        let repo = CitizenRepository::new(db);
        let result = repo.find_by_id_number("3174012345678901").await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.id, 1);
        assert_eq!(found.id_number, "3174012345678901");
    }

    #[tokio::test]
    async fn test_find_by_id_number_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<citizen::Model>::new()])
                .into_connection(),
        );

        let repo = CitizenRepository::new(db);
        let result = repo.find_by_id_number("3174019999999999").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_not_found_returns_error() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<citizen::Model>::new()])
                .into_connection(),
        );

        let repo = CitizenRepository::new(db);
        let result = repo.get_by_id(99).await;

        match result {
            Err(AppError::CitizenNotFound(id)) => assert_eq!(id, "99"),
            _ => panic!("Expected CitizenNotFound error"),
        }
    }

    #[tokio::test]
    async fn test_create_citizen() {
        let citizen = create_test_citizen(1, "3174012345678901");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 1,
                    rows_affected: 1,
                }])
                .append_query_results([[citizen.clone()]])
                .into_connection(),
        );

        let repo = CitizenRepository::new(db);

        let active = citizen::ActiveModel {
            name: Set("Ahmad".to_string()),
            id_number: Set("3174012345678901".to_string()),
            phone: Set(Some("081234567890".to_string())),
            address: Set("Jl. Merdeka".to_string()),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = repo.create(active).await.unwrap();
        assert_eq!(result.id_number, "3174012345678901");
    }

    #[tokio::test]
    async fn test_find_all() {
        let c1 = create_test_citizen(1, "3174012345678901");
        let c2 = create_test_citizen(2, "3174012345678902");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[c1, c2]])
                .into_connection(),
        );

        let repo = CitizenRepository::new(db);
        let result = repo.find_all().await.unwrap();

        assert_eq!(result.len(), 2);
    }
}
