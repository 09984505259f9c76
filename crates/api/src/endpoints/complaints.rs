//! Complaint intake and management endpoints.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    routing::{get, put},
};
use lapor_common::{AppError, AppResult};
use lapor_core::services::submission::{SubmitComplaintInput, UploadedImage};
use lapor_core::ComplaintWithRelations;
use lapor_db::entities::complaint;
use lapor_db::entities::complaint::ComplaintStatus;
use serde::{Deserialize, Serialize};

use crate::{endpoints::citizens::CitizenResponse, response::ApiResponse, state::AppState};

/// Complaint response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintResponse {
    pub id: i32,
    pub citizen_id: i32,
    pub description: String,
    pub location: String,
    pub status: ComplaintStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<complaint::Model> for ComplaintResponse {
    fn from(c: complaint::Model) -> Self {
        Self {
            id: c.id,
            citizen_id: c.citizen_id,
            description: c.description,
            location: c.location,
            status: c.status,
            response: c.response,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Successful submission response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub complaint: ComplaintResponse,
    pub citizen: CitizenResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Submit a complaint via multipart form.
///
/// Fields: `name`, `phone`, `lokasi`, `idNumber`, `deskripsi` and an
/// optional `image` file part.
async fn submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<ApiResponse<SubmissionResponse>> {
    let mut input = SubmitComplaintInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let file_name = field
                    .file_name()
                    .map_or_else(|| "photo".to_string(), ToString::to_string);
                let content_type = field
                    .content_type()
                    .map_or_else(|| "application/octet-stream".to_string(), ToString::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                    .to_vec();

                // An empty file part counts as no upload.
                if !data.is_empty() {
                    input.image = Some(UploadedImage {
                        file_name,
                        content_type,
                        data,
                    });
                }
            }
            other => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if text.is_empty() {
                    continue;
                }

                match other {
                    "name" => input.name = Some(text),
                    "phone" => input.phone = Some(text),
                    "lokasi" => input.location = Some(text),
                    "idNumber" => input.id_number = Some(text),
                    "deskripsi" => input.description = Some(text),
                    _ => {}
                }
            }
        }
    }

    let outcome = state.submission_service.submit(input).await?;

    Ok(ApiResponse::ok(SubmissionResponse {
        complaint: outcome.complaint.into(),
        citizen: outcome.citizen.model.into(),
        photo_url: outcome.photo_url,
    }))
}

/// Photo entry in a complaint listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintPhotoResponse {
    pub id: i32,
    pub url: String,
}

/// Complaint listing entry with submitter and photos.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintListResponse {
    #[serde(flatten)]
    pub complaint: ComplaintResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citizen: Option<CitizenResponse>,
    pub photos: Vec<ComplaintPhotoResponse>,
}

impl From<ComplaintWithRelations> for ComplaintListResponse {
    fn from(c: ComplaintWithRelations) -> Self {
        Self {
            complaint: c.complaint.into(),
            citizen: c.citizen.map(Into::into),
            photos: c
                .photos
                .into_iter()
                .map(|p| ComplaintPhotoResponse {
                    id: p.photo.id,
                    url: p.url,
                })
                .collect(),
        }
    }
}

/// List all complaints, newest first.
async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<ComplaintListResponse>>> {
    let complaints = state.complaint_service.list_all().await?;
    Ok(ApiResponse::ok(
        complaints.into_iter().map(Into::into).collect(),
    ))
}

/// Status update request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
    pub response: Option<String>,
}

/// Update a complaint's status.
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateStatusRequest>,
) -> AppResult<ApiResponse<ComplaintResponse>> {
    let complaint = state
        .complaint_service
        .update_status(id, req.status.as_deref(), req.response)
        .await?;

    Ok(ApiResponse::ok(complaint.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(submit))
        .route("/{id}", put(update_status))
}
