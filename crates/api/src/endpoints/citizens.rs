//! Citizen registry endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use lapor_common::AppResult;
use lapor_core::RegisterCitizenInput;
use lapor_db::entities::citizen;
use serde::{Deserialize, Serialize};

use crate::{response::ApiResponse, state::AppState};

/// Citizen registration request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCitizenRequest {
    pub name: Option<String>,
    pub id_number: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Citizen response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenResponse {
    pub id: i32,
    pub name: String,
    pub id_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub address: String,
    pub created_at: String,
}

impl From<citizen::Model> for CitizenResponse {
    fn from(c: citizen::Model) -> Self {
        Self {
            id: c.id,
            name: c.name,
            id_number: c.id_number,
            phone: c.phone,
            address: c.address,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// Register a citizen directly.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterCitizenRequest>,
) -> AppResult<ApiResponse<CitizenResponse>> {
    let citizen = state
        .citizen_service
        .register(RegisterCitizenInput {
            name: req.name,
            id_number: req.id_number,
            phone: req.phone,
            address: req.address,
        })
        .await?;

    Ok(ApiResponse::ok(citizen.into()))
}

/// List all registered citizens.
async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<CitizenResponse>>> {
    let citizens = state.citizen_service.list().await?;
    Ok(ApiResponse::ok(
        citizens.into_iter().map(Into::into).collect(),
    ))
}

/// Get one citizen.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<CitizenResponse>> {
    let citizen = state.citizen_service.get(id).await?;
    Ok(ApiResponse::ok(citizen.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(register))
        .route("/{id}", get(show))
}
