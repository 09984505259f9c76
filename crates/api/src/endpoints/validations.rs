//! Validation endpoints (admin only).

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use lapor_common::{AppError, AppResult};
use lapor_db::entities::validation_record;
use serde::{Deserialize, Serialize};

use crate::{extractors::AuthAdmin, response::ApiResponse, state::AppState};

/// Validation request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub pengaduan_id: Option<i32>,
}

/// Validation record response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub id: i32,
    pub complaint_id: i32,
    pub admin_id: i32,
    pub created_at: String,
}

impl From<validation_record::Model> for ValidationResponse {
    fn from(v: validation_record::Model) -> Self {
        Self {
            id: v.id,
            complaint_id: v.complaint_id,
            admin_id: v.admin_id,
            created_at: v.created_at.to_rfc3339(),
        }
    }
}

/// Record that the calling admin validated a complaint.
async fn validate(
    AuthAdmin(claims): AuthAdmin,
    State(state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> AppResult<ApiResponse<ValidationResponse>> {
    let complaint_id = req
        .pengaduan_id
        .ok_or_else(|| AppError::MissingField("pengaduanId".to_string()))?;

    let record = state
        .validation_service
        .create(complaint_id, claims.sub)
        .await?;

    Ok(ApiResponse::ok(record.into()))
}

/// List validation records for one complaint.
async fn list(
    AuthAdmin(_claims): AuthAdmin,
    State(state): State<AppState>,
    Path(complaint_id): Path<i32>,
) -> AppResult<ApiResponse<Vec<ValidationResponse>>> {
    let records = state
        .validation_service
        .list_for_complaint(complaint_id)
        .await?;

    Ok(ApiResponse::ok(
        records.into_iter().map(Into::into).collect(),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(validate))
        .route("/{pengaduan_id}", get(list))
}
