//! Photo endpoints.

use axum::{
    Router,
    extract::{Multipart, Path, State},
    routing::{get, post},
};
use lapor_common::{AppError, AppResult};
use lapor_core::PhotoWithUrl;
use lapor_core::services::submission::UploadedImage;
use serde::Serialize;

use crate::{response::ApiResponse, state::AppState};

/// Photo response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponse {
    pub id: i32,
    pub complaint_id: i32,
    pub citizen_id: i32,
    pub url: String,
    pub created_at: String,
}

impl From<PhotoWithUrl> for PhotoResponse {
    fn from(p: PhotoWithUrl) -> Self {
        Self {
            id: p.photo.id,
            complaint_id: p.photo.complaint_id,
            citizen_id: p.photo.citizen_id,
            url: p.url,
            created_at: p.photo.created_at.to_rfc3339(),
        }
    }
}

/// Attach a photo to an existing complaint.
///
/// Multipart fields: `file` and `pengaduanId`.
async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<ApiResponse<PhotoResponse>> {
    let mut image: Option<UploadedImage> = None;
    let mut complaint_id: Option<i32> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
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

                image = Some(UploadedImage {
                    file_name,
                    content_type,
                    data,
                });
            }
            "pengaduanId" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                complaint_id = Some(
                    text.parse()
                        .map_err(|_| AppError::Validation("Invalid pengaduanId".to_string()))?,
                );
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| AppError::MissingField("file".to_string()))?;
    let complaint_id =
        complaint_id.ok_or_else(|| AppError::MissingField("pengaduanId".to_string()))?;

    let photo = state
        .complaint_service
        .attach_photo(complaint_id, image)
        .await?;

    Ok(ApiResponse::ok(photo.into()))
}

/// List photos for one complaint.
async fn list(
    State(state): State<AppState>,
    Path(complaint_id): Path<i32>,
) -> AppResult<ApiResponse<Vec<PhotoResponse>>> {
    let photos = state.complaint_service.list_photos(complaint_id).await?;
    Ok(ApiResponse::ok(photos.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload))
        .route("/{pengaduan_id}", get(list))
}
