//! Photo storage backends.
//!
//! Uploaded complaint photos are stored either on the local filesystem
//! (served back under an `/uploads` route) or inline as base64 `data:`
//! URLs kept directly in the photo row. Both variants appear in deployed
//! intake databases, so readers must resolve both.

use std::path::PathBuf;

use base64::Engine as _;

use crate::{AppError, AppResult};

/// Stored photo metadata.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Storage key, or the full `data:` URL for inline storage.
    pub key: String,
    /// Public URL to fetch the photo.
    pub url: String,
    /// Size in bytes of the original upload.
    pub size: u64,
    /// MIME content type.
    pub content_type: String,
    /// MD5 hash of the content.
    pub md5: String,
}

/// Storage backend trait.
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Store photo bytes under `key`.
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> AppResult<StoredFile>;

    /// Get the public URL for a stored key.
    fn public_url(&self, key: &str) -> String;

    /// Resolve a photo row's `file` column to a fetchable URL.
    ///
    /// Inline rows already hold a complete `data:` URL and pass through
    /// unchanged; everything else is treated as a storage key.
    fn resolve_url(&self, file: &str) -> String {
        if file.starts_with("data:") {
            file.to_string()
        } else {
            self.public_url(file)
        }
    }
}

/// Local filesystem storage backend.
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new local storage backend.
    ///
    /// `base_url` is the server's public URL; stored keys are served
    /// under `{base_url}/uploads/{key}`.
    #[must_use]
    pub const fn new(base_path: PathBuf, base_url: String) -> Self {
        Self { base_path, base_url }
    }
}

#[async_trait::async_trait]
impl StorageBackend for LocalStorage {
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> AppResult<StoredFile> {
        let path = self.base_path.join(key);

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Internal(format!("Failed to create directory: {e}")))?;
        }

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write file: {e}")))?;

        let md5 = format!("{:x}", md5::compute(data));

        Ok(StoredFile {
            key: key.to_string(),
            url: self.public_url(key),
            size: data.len() as u64,
            content_type: content_type.to_string(),
            md5,
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/uploads/{}", self.base_url.trim_end_matches('/'), key)
    }
}

/// Inline storage backend.
///
/// No bytes touch the filesystem; the "key" is the complete base64
/// `data:` URL and is persisted as the photo row's `file` value.
pub struct InlineStorage;

#[async_trait::async_trait]
impl StorageBackend for InlineStorage {
    async fn upload(&self, _key: &str, data: &[u8], content_type: &str) -> AppResult<StoredFile> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        let data_url = format!("data:{content_type};base64,{encoded}");
        let md5 = format!("{:x}", md5::compute(data));

        Ok(StoredFile {
            key: data_url.clone(),
            url: data_url,
            size: data.len() as u64,
            content_type: content_type.to_string(),
            md5,
        })
    }

    fn public_url(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Generate a storage key for an uploaded photo.
///
/// Keys live under `pengaduan/` and combine the upload timestamp with
/// the sanitized original filename (whitespace becomes underscores).
#[must_use]
pub fn generate_storage_key(original_name: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp_millis();

    let sanitized: String = original_name
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                '_'
            } else if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let name = if sanitized.is_empty() {
        "photo".to_string()
    } else {
        sanitized
    };

    format!("pengaduan/{timestamp}-{name}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_storage_key() {
        let key = generate_storage_key("jalan rusak.jpg");
        assert!(key.starts_with("pengaduan/"));
        assert!(key.ends_with("-jalan_rusak.jpg"));
    }

    #[test]
    fn test_generate_storage_key_empty_name() {
        let key = generate_storage_key("");
        assert!(key.ends_with("-photo"));
    }

    #[test]
    fn test_local_public_url() {
        let storage = LocalStorage::new(
            PathBuf::from("/tmp/uploads"),
            "http://localhost:5000/".to_string(),
        );
        assert_eq!(
            storage.public_url("pengaduan/123-foto.jpg"),
            "http://localhost:5000/uploads/pengaduan/123-foto.jpg"
        );
    }

    #[test]
    fn test_resolve_url_passes_data_urls_through() {
        let storage = LocalStorage::new(
            PathBuf::from("/tmp/uploads"),
            "http://localhost:5000".to_string(),
        );
        let data_url = "data:image/png;base64,aGVsbG8=";
        assert_eq!(storage.resolve_url(data_url), data_url);
        assert_eq!(
            storage.resolve_url("pengaduan/123-a.png"),
            "http://localhost:5000/uploads/pengaduan/123-a.png"
        );
    }

    #[tokio::test]
    async fn test_inline_upload_builds_data_url() {
        let storage = InlineStorage;
        let stored = storage
            .upload("ignored", b"hello", "image/png")
            .await
            .unwrap();

        assert_eq!(stored.url, "data:image/png;base64,aGVsbG8=");
        assert_eq!(stored.key, stored.url);
        assert_eq!(stored.size, 5);
    }
}
