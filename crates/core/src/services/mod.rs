//! Service layer.
//!
//! Services own the business rules and talk to the repositories; the
//! HTTP endpoints stay thin. Each service takes its repositories by
//! value at construction (they are cheap `Arc` clones).

pub mod admin;
pub mod citizen;
pub mod complaint;
pub mod submission;
pub mod validation_record;
