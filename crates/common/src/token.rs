//! Signed bearer tokens for administrator sessions.
//!
//! Tokens are HS256 JWTs carrying the admin identity. They carry no
//! expiry claim: the deployed intake system issues unexpiring tokens
//! and its dashboard never refreshes them.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult};

/// Claims embedded in an admin token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin identifier.
    pub sub: i32,
    /// Admin email at issue time.
    pub email: String,
    /// Issued-at timestamp (seconds).
    pub iat: i64,
}

/// Signs and verifies admin tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    /// Create a signer from the configured secret.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Unexpiring tokens: no exp claim is present, so none is required.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a token for an admin.
    pub fn sign(&self, admin_id: i32, email: &str) -> AppResult<String> {
        let claims = AdminClaims {
            sub: admin_id,
            email: email.to_string(),
            iat: chrono::Utc::now().timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {e}")))
    }

    /// Verify a token and return its claims.
    ///
    /// Any verification failure (garbage input, bad signature, wrong
    /// algorithm) collapses to [`AppError::InvalidToken`].
    pub fn verify(&self, token: &str) -> AppResult<AdminClaims> {
        decode::<AdminClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_verify_round_trip() {
        let signer = TokenSigner::new("test-secret");
        let token = signer.sign(42, "admin@kota.go.id").unwrap();

        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "admin@kota.go.id");
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let signer = TokenSigner::new("test-secret");
        let result = signer.verify("not-a-token");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let signer = TokenSigner::new("test-secret");
        let other = TokenSigner::new("other-secret");
        let token = signer.sign(1, "admin@kota.go.id").unwrap();

        assert!(matches!(other.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_tokens_carry_no_expiry() {
        let signer = TokenSigner::new("test-secret");
        let token = signer.sign(1, "admin@kota.go.id").unwrap();

        // Decoding succeeds even though no exp claim exists.
        let claims = signer.verify(&token).unwrap();
        assert!(claims.iat > 0);
    }
}
