//! Data models for the application.

mod job;
mod user;

pub use job::{JobEnvelope, JobRecord, Salary};
pub use user::{Registration, Role, UserInfo};
