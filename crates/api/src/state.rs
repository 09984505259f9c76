//! Application state shared by all handlers.

use lapor_core::{
    AdminService, CitizenService, ComplaintService, SubmissionService, ValidationRecordService,
};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    /// Citizen registry.
    pub citizen_service: CitizenService,
    /// Complaint store.
    pub complaint_service: ComplaintService,
    /// Complaint intake workflow.
    pub submission_service: SubmissionService,
    /// Admin accounts and tokens.
    pub admin_service: AdminService,
    /// Validation records.
    pub validation_service: ValidationRecordService,
}
