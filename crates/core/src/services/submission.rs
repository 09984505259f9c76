//! Complaint submission workflow.
//!
//! One submission walks through: validate everything, find or create
//! the submitting citizen, create the complaint, then store the photo
//! if one was attached. The steps are not wrapped in a transaction;
//! concurrent submissions with the same ID number can each pass the
//! lookup and create duplicate citizen rows. Readers resolve the
//! duplicate by taking the oldest row.

use std::sync::Arc;

use chrono::Utc;
use lapor_common::{AppResult, StorageBackend, generate_storage_key};
use lapor_db::entities::complaint::ComplaintStatus;
use lapor_db::entities::{citizen, complaint, photo};
use lapor_db::repositories::{CitizenRepository, ComplaintRepository, PhotoRepository};
use sea_orm::Set;
use tracing::info;

use crate::validate;

/// An uploaded photo as extracted from the multipart request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Original filename from the upload.
    pub file_name: String,
    /// MIME content type.
    pub content_type: String,
    /// Raw bytes.
    pub data: Vec<u8>,
}

/// Raw submission fields as extracted from the multipart request.
///
/// Everything is optional at this level; required-field checks happen
/// inside [`SubmissionService::submit`] so the error messages carry the
/// wire field names.
#[derive(Debug, Clone, Default)]
pub struct SubmitComplaintInput {
    /// Submitter name.
    pub name: Option<String>,
    /// National ID number.
    pub id_number: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Complaint location.
    pub location: Option<String>,
    /// Complaint description.
    pub description: Option<String>,
    /// Attached photo, if any.
    pub image: Option<UploadedImage>,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// The created complaint.
    pub complaint: complaint::Model,
    /// The matched or newly created submitter.
    pub citizen: Citizen,
    /// Public URL of the stored photo, if one was attached.
    pub photo_url: Option<String>,
}

/// Submitter as resolved by the workflow.
#[derive(Debug, Clone)]
pub struct Citizen {
    /// The citizen row.
    pub model: citizen::Model,
    /// Whether this submission created the row.
    pub created: bool,
}

/// Orchestrates the full complaint intake.
#[derive(Clone)]
pub struct SubmissionService {
    citizens: CitizenRepository,
    complaints: ComplaintRepository,
    photos: PhotoRepository,
    storage: Arc<dyn StorageBackend>,
}

impl SubmissionService {
    /// Create a new submission service.
    #[must_use]
    pub fn new(
        citizens: CitizenRepository,
        complaints: ComplaintRepository,
        photos: PhotoRepository,
        storage: Arc<dyn StorageBackend>,
    ) -> Self {
        Self {
            citizens,
            complaints,
            photos,
            storage,
        }
    }

    /// Process one complaint submission end to end.
    ///
    /// All validation runs before any row or file is written, so a
    /// rejected submission leaves nothing behind. After validation the
    /// steps run without a transaction; a crash mid-way can leave a
    /// citizen without a complaint.
    pub async fn submit(&self, input: SubmitComplaintInput) -> AppResult<SubmissionOutcome> {
        validate::validate_required("name", input.name.as_deref())?;
        validate::validate_required("deskripsi", input.description.as_deref())?;
        validate::validate_required("idNumber", input.id_number.as_deref())?;
        validate::validate_required("lokasi", input.location.as_deref())?;

        let name = input.name.unwrap_or_default();
        let id_number = input.id_number.unwrap_or_default();
        let location = input.location.unwrap_or_default();
        let description = input.description.unwrap_or_default();

        validate::validate_id_number(&id_number)?;
        let phone = validate::validate_phone(input.phone.as_deref())?;

        if let Some(image) = &input.image {
            validate::validate_image(&image.content_type, image.data.len() as u64)?;
        }

        let citizen = self.find_or_create_citizen(&name, &id_number, phone, &location).await?;

        let complaint = self
            .complaints
            .create(complaint::ActiveModel {
                citizen_id: Set(citizen.model.id),
                description: Set(description),
                location: Set(location),
                status: Set(ComplaintStatus::Pending),
                response: Set(None),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            })
            .await?;

        let photo_url = match input.image {
            Some(image) => Some(self.store_photo(&complaint, &image).await?),
            None => None,
        };

        info!(
            complaint_id = complaint.id,
            citizen_id = citizen.model.id,
            new_citizen = citizen.created,
            has_photo = photo_url.is_some(),
            "Complaint submitted"
        );

        Ok(SubmissionOutcome {
            complaint,
            citizen,
            photo_url,
        })
    }

    /// Match the submitter by ID number, creating a row on a miss.
    ///
    /// The lookup and insert are separate statements; see the module
    /// docs for the duplicate-citizen race this allows.
    async fn find_or_create_citizen(
        &self,
        name: &str,
        id_number: &str,
        phone: Option<String>,
        address: &str,
    ) -> AppResult<Citizen> {
        if let Some(existing) = self.citizens.find_by_id_number(id_number).await? {
            return Ok(Citizen {
                model: existing,
                created: false,
            });
        }

        let created = self
            .citizens
            .create(citizen::ActiveModel {
                name: Set(name.to_string()),
                id_number: Set(id_number.to_string()),
                phone: Set(phone),
                address: Set(address.to_string()),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            })
            .await?;

        Ok(Citizen {
            model: created,
            created: true,
        })
    }

    async fn store_photo(
        &self,
        complaint: &complaint::Model,
        image: &UploadedImage,
    ) -> AppResult<String> {
        let key = generate_storage_key(&image.file_name);
        let stored = self
            .storage
            .upload(&key, &image.data, &image.content_type)
            .await?;

        self.photos
            .create(photo::ActiveModel {
                complaint_id: Set(complaint.id),
                citizen_id: Set(complaint.citizen_id),
                file: Set(stored.key),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            })
            .await?;

        Ok(stored.url)
    }
}
