//! Admin account endpoints.

use axum::{Json, Router, extract::State, routing::post};
use lapor_common::{AppError, AppResult};
use lapor_core::CreateAdminInput;
use lapor_db::entities::admin;
use serde::{Deserialize, Serialize};

use crate::{response::ApiResponse, state::AppState};

/// Admin account response. The password hash never leaves the server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<admin::Model> for AdminResponse {
    fn from(a: admin::Model) -> Self {
        Self {
            id: a.id,
            name: a.name,
            email: a.email,
            created_at: a.created_at.to_rfc3339(),
        }
    }
}

/// Login request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminResponse,
}

/// Log an admin in.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let email = req
        .email
        .ok_or_else(|| AppError::MissingField("email".to_string()))?;
    let password = req
        .password
        .ok_or_else(|| AppError::MissingField("password".to_string()))?;

    let (token, admin) = state.admin_service.login(&email, &password).await?;

    Ok(ApiResponse::ok(LoginResponse {
        token,
        admin: admin.into(),
    }))
}

/// Admin creation request. The wire field for the name is `nama`.
#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub nama: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Create an admin account.
async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAdminRequest>,
) -> AppResult<ApiResponse<AdminResponse>> {
    let admin = state
        .admin_service
        .create(CreateAdminInput {
            name: req.nama,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(ApiResponse::ok(admin.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create))
        .route("/login", post(login))
}
