//! HTTP API layer for lapor-rs.
//!
//! This crate provides the REST API:
//!
//! - **Endpoints**: citizen, complaint, photo, validation and admin routes
//! - **Extractors**: admin bearer-token authentication
//! - **State**: the service bundle shared by all handlers
//!
//! Built on Axum 0.8.

pub mod endpoints;
pub mod extractors;
pub mod response;
pub mod state;

pub use endpoints::router;
pub use state::AppState;
