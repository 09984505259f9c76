//! Admin accounts: creation, login and token checks.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use lapor_common::token::{AdminClaims, TokenSigner};
use lapor_common::{AppError, AppResult};
use lapor_db::entities::admin;
use lapor_db::repositories::AdminRepository;
use sea_orm::Set;
use tracing::warn;
use validator::ValidateEmail;

use crate::validate;

/// Hash a password with Argon2id and a fresh salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a stored Argon2 hash.
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Invalid password hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Input for creating an admin account.
#[derive(Debug, Clone)]
pub struct CreateAdminInput {
    /// Display name.
    pub name: Option<String>,
    /// Login email, unique.
    pub email: Option<String>,
    /// Plaintext password; only its hash is stored.
    pub password: Option<String>,
}

/// Admin account service.
#[derive(Clone)]
pub struct AdminService {
    admins: AdminRepository,
    signer: TokenSigner,
}

impl AdminService {
    /// Create a new admin service.
    #[must_use]
    pub const fn new(admins: AdminRepository, signer: TokenSigner) -> Self {
        Self { admins, signer }
    }

    /// Create an admin account.
    ///
    /// The email must be well-formed; uniqueness is enforced by the
    /// database constraint.
    pub async fn create(&self, input: CreateAdminInput) -> AppResult<admin::Model> {
        validate::validate_required("nama", input.name.as_deref())?;
        validate::validate_required("email", input.email.as_deref())?;
        validate::validate_required("password", input.password.as_deref())?;

        let name = input.name.unwrap_or_default();
        let email = input.email.unwrap_or_default();
        let password = input.password.unwrap_or_default();

        if !email.validate_email() {
            return Err(AppError::Validation("Invalid email address".to_string()));
        }

        let password_hash = hash_password(&password)?;

        self.admins
            .create(admin::ActiveModel {
                name: Set(name),
                email: Set(email),
                password_hash: Set(password_hash),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            })
            .await
    }

    /// Log an admin in, returning a signed token and the account.
    ///
    /// Unknown email and wrong password answer identically so the
    /// endpoint does not leak which emails exist.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(String, admin::Model)> {
        let Some(admin) = self.admins.find_by_email(email).await? else {
            warn!(email, "Login attempt for unknown admin email");
            return Err(AppError::Unauthorized);
        };

        if !verify_password(password, &admin.password_hash)? {
            warn!(admin_id = admin.id, "Login attempt with wrong password");
            return Err(AppError::Unauthorized);
        }

        let token = self.signer.sign(admin.id, &admin.email)?;
        Ok((token, admin))
    }

    /// Verify a bearer token and return its claims.
    pub fn authenticate(&self, token: &str) -> AppResult<AdminClaims> {
        self.signer.verify(token)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn service(db: DatabaseConnection) -> AdminService {
        AdminService::new(
            AdminRepository::new(Arc::new(db)),
            TokenSigner::new("test-secret"),
        )
    }

    fn stored_admin(id: i32, email: &str, password: &str) -> admin::Model {
        admin::Model {
            id,
            name: "Petugas".to_string(),
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn test_password_round_trip() {
        let hash = hash_password("rahasia123").unwrap();
        assert!(verify_password("rahasia123", &hash).unwrap());
        assert!(!verify_password("salah", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("rahasia123").unwrap();
        let b = hash_password("rahasia123").unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_login_success_issues_verifiable_token() {
        let admin = stored_admin(1, "admin@kota.go.id", "rahasia123");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[admin]])
            .into_connection();

        let svc = service(db);
        let (token, admin) = svc.login("admin@kota.go.id", "rahasia123").await.unwrap();

        let claims = svc.authenticate(&token).unwrap();
        assert_eq!(claims.sub, admin.id);
        assert_eq!(claims.email, "admin@kota.go.id");
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_unauthorized() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<admin::Model>::new()])
            .into_connection();

        let result = service(db).login("nobody@kota.go.id", "x").await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let admin = stored_admin(1, "admin@kota.go.id", "rahasia123");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[admin]])
            .into_connection();

        let result = service(db).login("admin@kota.go.id", "salah").await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let stored = stored_admin(1, "admin@kota.go.id", "rahasia123");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .append_query_results([[stored]])
            .into_connection();

        let result = service(db)
            .create(CreateAdminInput {
                name: Some("Petugas".to_string()),
                email: Some("admin@kota.go.id".to_string()),
                password: Some("rahasia123".to_string()),
            })
            .await
            .unwrap();

        assert_ne!(result.password_hash, "rahasia123");
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = service(db)
            .create(CreateAdminInput {
                name: Some("Petugas".to_string()),
                email: Some("not-an-email".to_string()),
                password: Some("rahasia123".to_string()),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_missing_password() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = service(db)
            .create(CreateAdminInput {
                name: Some("Petugas".to_string()),
                email: Some("admin@kota.go.id".to_string()),
                password: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::MissingField(f)) if f == "password"));
    }

    #[test]
    fn test_authenticate_rejects_garbage_token() {
        let signer = TokenSigner::new("test-secret");
        let svc = AdminService::new(
            AdminRepository::new(Arc::new(
                MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
            )),
            signer,
        );

        assert!(matches!(
            svc.authenticate("garbage"),
            Err(AppError::InvalidToken)
        ));
    }
}
