//! Common utilities and shared types for lapor-rs.
//!
//! This crate provides foundational components used across all lapor-rs crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Storage**: Photo storage backends (local filesystem, inline data URLs)
//! - **Tokens**: Signed bearer tokens for administrator sessions

pub mod config;
pub mod error;
pub mod storage;
pub mod token;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use storage::{
    InlineStorage, LocalStorage, StorageBackend, StoredFile, generate_storage_key,
};
pub use token::{AdminClaims, TokenSigner};
