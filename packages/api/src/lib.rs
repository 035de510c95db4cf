//! # API crate — job-board client logic
//!
//! Everything the JobZee frontends need that does not depend on a UI runtime: the
//! remote API client, the shared session cell, and the controllers behind the
//! registration and job-detail pages. The `ui` and `web` crates only wire these
//! into Dioxus components.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL resolution (`JOBZEE_API_URL`, default `http://localhost:4000`) and endpoint paths |
//! | [`client`] | [`JobBoardApi`] trait and its `reqwest` implementation [`HttpApi`] |
//! | [`error`] | [`ValidationError`] and [`ApiError`], with notification text extraction |
//! | [`models`] | [`Registration`], [`UserInfo`], [`Role`], [`JobRecord`], [`Salary`] |
//! | [`session`] | [`SessionState`] and the [`SessionStore`] cell trait |
//! | [`routes`] | [`Destination`]s controllers redirect to |
//! | [`register`] | Sign-up form validation and submission |
//! | [`job_detail`] | Job lookup, login gate and detail presentation |

pub mod client;
pub mod config;
pub mod error;
pub mod job_detail;
pub mod models;
pub mod register;
pub mod routes;
pub mod session;

#[cfg(test)]
mod test_support;

pub use client::{HttpApi, JobBoardApi, RegisterResponse};
pub use config::ApiConfig;
pub use error::{ApiError, ValidationError};
pub use job_detail::{authorization_guard, JobDetail, JobDetailController, JobView};
pub use models::{JobRecord, Registration, Role, Salary, UserInfo};
pub use register::{Notice, RegistrationController, RegistrationForm};
pub use routes::Destination;
pub use session::{SessionState, SessionStore};
