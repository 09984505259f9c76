//! API endpoints.

mod admin;
mod citizens;
mod complaints;
mod photos;
mod validations;

use axum::Router;
use axum::extract::DefaultBodyLimit;

use crate::state::AppState;

/// Multipart bodies must fit the 5 MB photo plus form overhead.
const MAX_BODY_SIZE: usize = 6 * 1024 * 1024;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/masyarakat", citizens::router())
        .nest("/pengaduan", complaints::router())
        .nest("/foto", photos::router())
        .nest("/validasi", validations::router())
        .nest("/admin", admin::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}
