//! Citizen registry service.

use chrono::Utc;
use lapor_common::AppResult;
use lapor_db::entities::citizen;
use lapor_db::repositories::CitizenRepository;
use sea_orm::Set;

use crate::validate;

/// Input for registering a citizen directly.
#[derive(Debug, Clone)]
pub struct RegisterCitizenInput {
    /// Full name.
    pub name: Option<String>,
    /// National ID number.
    pub id_number: Option<String>,
    /// Phone number, optional.
    pub phone: Option<String>,
    /// Home address.
    pub address: Option<String>,
}

/// Citizen registry: direct registration and lookups.
#[derive(Clone)]
pub struct CitizenService {
    citizens: CitizenRepository,
}

impl CitizenService {
    /// Create a new citizen service.
    #[must_use]
    pub const fn new(citizens: CitizenRepository) -> Self {
        Self { citizens }
    }

    /// Register a citizen.
    ///
    /// Unlike the submission workflow this does no duplicate lookup:
    /// registering the same ID number twice creates a second row.
    pub async fn register(&self, input: RegisterCitizenInput) -> AppResult<citizen::Model> {
        validate::validate_required("name", input.name.as_deref())?;
        validate::validate_required("idNumber", input.id_number.as_deref())?;
        validate::validate_required("address", input.address.as_deref())?;

        let name = input.name.unwrap_or_default();
        let id_number = input.id_number.unwrap_or_default();
        let address = input.address.unwrap_or_default();

        validate::validate_id_number(&id_number)?;
        let phone = validate::validate_phone(input.phone.as_deref())?;

        self.citizens
            .create(citizen::ActiveModel {
                name: Set(name),
                id_number: Set(id_number),
                phone: Set(phone),
                address: Set(address),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            })
            .await
    }

    /// Fetch a citizen by ID.
    pub async fn get(&self, id: i32) -> AppResult<citizen::Model> {
        self.citizens.get_by_id(id).await
    }

    /// List all citizens.
    pub async fn list(&self) -> AppResult<Vec<citizen::Model>> {
        self.citizens.find_all().await
    }
}
