//! Request extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lapor_common::AppError;
use lapor_common::token::AdminClaims;

use crate::state::AppState;

/// Authenticated admin extractor.
///
/// Reads the `Authorization` header and verifies the bearer token. A
/// missing header answers 401; a present but unverifiable token
/// answers 400, matching what the deployed dashboard expects.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub AdminClaims);

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        // Accept both "Bearer <token>" and a bare token.
        let token = header.strip_prefix("Bearer ").unwrap_or(header);

        let claims = state.admin_service.authenticate(token)?;
        Ok(Self(claims))
    }
}
