//! Input validation for complaint intake.
//!
//! All checks here are pure functions over the already-extracted request
//! fields. The submission workflow runs every check before touching the
//! database or storage, so a rejected request leaves no partial rows
//! behind.

use lapor_common::{AppError, AppResult};

/// Maximum accepted photo size in bytes (5 MB).
pub const MAX_IMAGE_SIZE: u64 = 5 * 1024 * 1024;

/// Require that a field carries a non-empty value.
///
/// `field` is the wire name the client sent, echoed back in the error.
pub fn validate_required(field: &str, value: Option<&str>) -> AppResult<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(AppError::MissingField(field.to_string())),
    }
}

/// Validate a national ID number: exactly 16 ASCII digits.
pub fn validate_id_number(value: &str) -> AppResult<()> {
    if value.len() == 16 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AppError::Validation(
            "ID number must be exactly 16 digits".to_string(),
        ))
    }
}

/// Validate and normalize an optional phone number.
///
/// Spaces and hyphens are stripped before the digits-only check; the
/// stripped form is what gets stored. `None` and empty input pass
/// through as `None` since the field is optional.
pub fn validate_phone(value: Option<&str>) -> AppResult<Option<String>> {
    let Some(raw) = value else {
        return Ok(None);
    };

    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if normalized.is_empty() {
        return Ok(None);
    }

    if normalized.bytes().all(|b| b.is_ascii_digit()) {
        Ok(Some(normalized))
    } else {
        Err(AppError::Validation(
            "Phone number must contain only digits".to_string(),
        ))
    }
}

/// Validate an uploaded photo: must be an image and at most 5 MB.
pub fn validate_image(content_type: &str, size: u64) -> AppResult<()> {
    if !content_type.starts_with("image/") {
        return Err(AppError::Validation(
            "Only image uploads are accepted".to_string(),
        ));
    }

    if size > MAX_IMAGE_SIZE {
        return Err(AppError::Validation(
            "Image exceeds the 5 MB size limit".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_missing_and_blank() {
        assert!(matches!(
            validate_required("name", None),
            Err(AppError::MissingField(f)) if f == "name"
        ));
        assert!(matches!(
            validate_required("deskripsi", Some("   ")),
            Err(AppError::MissingField(f)) if f == "deskripsi"
        ));
        assert!(validate_required("lokasi", Some("Jl. Merdeka")).is_ok());
    }

    #[test]
    fn test_id_number_accepts_16_digits() {
        assert!(validate_id_number("3174012345678901").is_ok());
    }

    #[test]
    fn test_id_number_rejects_wrong_length() {
        assert!(validate_id_number("317401234567890").is_err());
        assert!(validate_id_number("31740123456789012").is_err());
        assert!(validate_id_number("").is_err());
    }

    #[test]
    fn test_id_number_rejects_non_digits() {
        assert!(validate_id_number("31740123456789AB").is_err());
        // Unicode digits do not count as ASCII digits.
        assert!(validate_id_number("٣١٧٤٠١٢٣٤٥٦٧٨٩٠١").is_err());
    }

    #[test]
    fn test_phone_normalizes_separators() {
        let result = validate_phone(Some("0812-3456 7890")).unwrap();
        assert_eq!(result.as_deref(), Some("081234567890"));
    }

    #[test]
    fn test_phone_rejects_letters() {
        assert!(matches!(
            validate_phone(Some("0812abc")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_phone_optional() {
        assert_eq!(validate_phone(None).unwrap(), None);
        assert_eq!(validate_phone(Some("")).unwrap(), None);
        assert_eq!(validate_phone(Some("  - ")).unwrap(), None);
    }

    #[test]
    fn test_image_accepts_images_up_to_limit() {
        assert!(validate_image("image/jpeg", 1024).is_ok());
        assert!(validate_image("image/png", MAX_IMAGE_SIZE).is_ok());
    }

    #[test]
    fn test_image_rejects_oversize() {
        assert!(matches!(
            validate_image("image/jpeg", MAX_IMAGE_SIZE + 1),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_image_rejects_non_image_types() {
        assert!(validate_image("application/pdf", 10).is_err());
        assert!(validate_image("text/plain", 10).is_err());
    }
}
