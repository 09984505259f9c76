//! Database entities.

pub mod admin;
pub mod citizen;
pub mod complaint;
pub mod photo;
pub mod validation_record;

pub use admin::Entity as Admin;
pub use citizen::Entity as Citizen;
pub use complaint::Entity as Complaint;
pub use photo::Entity as Photo;
pub use validation_record::Entity as ValidationRecord;
