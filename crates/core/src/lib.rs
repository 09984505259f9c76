//! Business logic for lapor-rs.
//!
//! This crate holds the services behind the HTTP layer:
//!
//! - **Validation gateway**: pure input checks in [`validate`]
//! - **Citizen registry**: [`CitizenService`]
//! - **Complaint store**: [`ComplaintService`]
//! - **Submission workflow**: [`SubmissionService`]
//! - **Admin accounts**: [`AdminService`]
//! - **Validation records**: [`ValidationRecordService`]

pub mod services;
pub mod validate;

pub use services::admin::{AdminService, CreateAdminInput};
pub use services::citizen::{CitizenService, RegisterCitizenInput};
pub use services::complaint::{ComplaintService, ComplaintWithRelations, PhotoWithUrl};
pub use services::submission::{
    SubmissionOutcome, SubmissionService, SubmitComplaintInput, UploadedImage,
};
pub use services::validation_record::ValidationRecordService;
