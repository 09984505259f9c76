//! Complaint store service.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use lapor_common::{AppError, AppResult, StorageBackend, generate_storage_key};
use lapor_db::entities::complaint::ComplaintStatus;
use lapor_db::entities::{citizen, complaint, photo};
use lapor_db::repositories::{CitizenRepository, ComplaintRepository, PhotoRepository};
use sea_orm::Set;

use crate::services::submission::UploadedImage;
use crate::validate;

/// A photo row together with its resolved public URL.
#[derive(Debug, Clone)]
pub struct PhotoWithUrl {
    /// The stored photo row.
    pub photo: photo::Model,
    /// Fetchable URL (served upload or inline `data:` URL).
    pub url: String,
}

/// A complaint with its submitter and photos stitched in.
#[derive(Debug, Clone)]
pub struct ComplaintWithRelations {
    /// The complaint row.
    pub complaint: complaint::Model,
    /// Submitter, if the row still resolves.
    pub citizen: Option<citizen::Model>,
    /// Attached photos.
    pub photos: Vec<PhotoWithUrl>,
}

/// Complaint store: listing, status updates and photo attachment.
#[derive(Clone)]
pub struct ComplaintService {
    complaints: ComplaintRepository,
    citizens: CitizenRepository,
    photos: PhotoRepository,
    storage: Arc<dyn StorageBackend>,
}

impl ComplaintService {
    /// Create a new complaint service.
    #[must_use]
    pub fn new(
        complaints: ComplaintRepository,
        citizens: CitizenRepository,
        photos: PhotoRepository,
        storage: Arc<dyn StorageBackend>,
    ) -> Self {
        Self {
            complaints,
            citizens,
            photos,
            storage,
        }
    }

    /// List all complaints, newest first, with submitters and photos.
    ///
    /// The stitch runs as three queries (complaints, citizens by ID,
    /// photos by complaint ID) rather than a SQL join.
    pub async fn list_all(&self) -> AppResult<Vec<ComplaintWithRelations>> {
        let complaints = self.complaints.find_all().await?;

        let mut citizen_ids: Vec<i32> = complaints.iter().map(|c| c.citizen_id).collect();
        citizen_ids.sort_unstable();
        citizen_ids.dedup();

        let citizens: HashMap<i32, citizen::Model> = self
            .citizens
            .find_by_ids(&citizen_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let complaint_ids: Vec<i32> = complaints.iter().map(|c| c.id).collect();
        let mut photos_by_complaint: HashMap<i32, Vec<PhotoWithUrl>> = HashMap::new();
        for p in self.photos.find_by_complaint_ids(&complaint_ids).await? {
            let url = self.storage.resolve_url(&p.file);
            photos_by_complaint
                .entry(p.complaint_id)
                .or_default()
                .push(PhotoWithUrl { photo: p, url });
        }

        Ok(complaints
            .into_iter()
            .map(|c| ComplaintWithRelations {
                citizen: citizens.get(&c.citizen_id).cloned(),
                photos: photos_by_complaint.remove(&c.id).unwrap_or_default(),
                complaint: c,
            })
            .collect())
    }

    /// Overwrite a complaint's status, optionally recording a response.
    ///
    /// `status` is the raw wire value; unknown values are rejected
    /// before the database is touched.
    pub async fn update_status(
        &self,
        id: i32,
        status: Option<&str>,
        response: Option<String>,
    ) -> AppResult<complaint::Model> {
        let Some(raw) = status else {
            return Err(AppError::MissingField("status".to_string()));
        };

        let Some(parsed) = ComplaintStatus::parse(raw) else {
            return Err(AppError::Validation(format!("Unknown status: {raw}")));
        };

        self.complaints.update_status(id, parsed, response).await
    }

    /// Attach a photo to an existing complaint.
    ///
    /// The photo row is attributed to the complaint's submitter.
    pub async fn attach_photo(
        &self,
        complaint_id: i32,
        image: UploadedImage,
    ) -> AppResult<PhotoWithUrl> {
        validate::validate_image(&image.content_type, image.data.len() as u64)?;

        let complaint = self.complaints.get_by_id(complaint_id).await?;

        let key = generate_storage_key(&image.file_name);
        let stored = self
            .storage
            .upload(&key, &image.data, &image.content_type)
            .await?;

        let photo = self
            .photos
            .create(photo::ActiveModel {
                complaint_id: Set(complaint.id),
                citizen_id: Set(complaint.citizen_id),
                file: Set(stored.key),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            })
            .await?;

        Ok(PhotoWithUrl {
            url: stored.url,
            photo,
        })
    }

    /// List photos attached to one complaint.
    pub async fn list_photos(&self, complaint_id: i32) -> AppResult<Vec<PhotoWithUrl>> {
        let photos = self.photos.find_by_complaint(complaint_id).await?;

        Ok(photos
            .into_iter()
            .map(|p| {
                let url = self.storage.resolve_url(&p.file);
                PhotoWithUrl { photo: p, url }
            })
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lapor_common::InlineStorage;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};

    fn sample_citizen(id: i32) -> citizen::Model {
        citizen::Model {
            id,
            name: "Ahmad".to_string(),
            id_number: "3174012345678901".to_string(),
            phone: Some("081234567890".to_string()),
            address: "Jl. Merdeka 1".to_string(),
            created_at: Utc::now().into(),
        }
    }

    fn sample_complaint(id: i32, citizen_id: i32) -> complaint::Model {
        complaint::Model {
            id,
            citizen_id,
            description: "Jalan berlubang".to_string(),
            location: "Jl. Merdeka".to_string(),
            status: ComplaintStatus::Pending,
            response: None,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    fn sample_photo(id: i32, complaint_id: i32) -> photo::Model {
        photo::Model {
            id,
            complaint_id,
            citizen_id: 1,
            file: format!("pengaduan/1748700000000-foto-{id}.jpg"),
            created_at: Utc::now().into(),
        }
    }

    fn service(db: DatabaseConnection) -> ComplaintService {
        let db = Arc::new(db);
        ComplaintService::new(
            ComplaintRepository::new(db.clone()),
            CitizenRepository::new(db.clone()),
            PhotoRepository::new(db),
            Arc::new(InlineStorage),
        )
    }

    #[tokio::test]
    async fn test_list_all_stitches_citizens_and_photos() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_complaint(1, 1), sample_complaint(2, 1)]])
            .append_query_results([vec![sample_citizen(1)]])
            .append_query_results([vec![sample_photo(1, 1), sample_photo(2, 1)]])
            .into_connection();

        let result = service(db).list_all().await.unwrap();

        assert_eq!(result.len(), 2);
        let first = &result[0];
        assert_eq!(first.complaint.id, 1);
        assert_eq!(first.citizen.as_ref().unwrap().name, "Ahmad");
        assert_eq!(first.photos.len(), 2);
        assert!(result[1].photos.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_empty_issues_single_query() {
        // Only the complaint listing is queued: the empty-ID batch
        // lookups short-circuit without touching the connection.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<complaint::Model>::new()])
            .into_connection();

        let result = service(db).list_all().await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_update_status_missing_status_field() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = service(db).update_status(1, None, None).await;
        assert!(matches!(result, Err(AppError::MissingField(f)) if f == "status"));
    }

    #[tokio::test]
    async fn test_update_status_unknown_value_rejected_before_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = service(db).update_status(1, Some("archived"), None).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_attach_photo_to_unknown_complaint() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<complaint::Model>::new()])
            .into_connection();

        let image = UploadedImage {
            file_name: "foto.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            data: vec![1, 2, 3],
        };

        let result = service(db).attach_photo(404, image).await;
        assert!(matches!(result, Err(AppError::ComplaintNotFound(_))));
    }

    #[tokio::test]
    async fn test_attach_photo_stores_and_attributes_to_submitter() {
        let mut stored = sample_photo(1, 7);
        stored.citizen_id = 3;
        stored.file = "data:image/png;base64,AQID".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_complaint(7, 3)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .append_query_results([vec![stored]])
            .into_connection();

        let image = UploadedImage {
            file_name: "foto.png".to_string(),
            content_type: "image/png".to_string(),
            data: vec![1, 2, 3],
        };

        let result = service(db).attach_photo(7, image).await.unwrap();
        assert_eq!(result.photo.citizen_id, 3);
        assert!(result.url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_attach_photo_rejects_non_image_before_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let image = UploadedImage {
            file_name: "doc.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            data: vec![0; 16],
        };

        let result = service(db).attach_photo(1, image).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
