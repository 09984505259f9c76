//! Database repositories.
//!
//! Each repository wraps the shared connection pool and exposes the
//! queries one entity needs. The pool is injected at construction; no
//! repository reads a module-level singleton.

mod admin;
mod citizen;
mod complaint;
mod photo;
mod validation_record;

pub use admin::AdminRepository;
pub use citizen::CitizenRepository;
pub use complaint::ComplaintRepository;
pub use photo::PhotoRepository;
pub use validation_record::ValidationRecordRepository;
