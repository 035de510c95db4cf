use std::cell::RefCell;

use crate::client::{JobBoardApi, RegisterResponse};
use crate::error::ApiError;
use crate::models::{JobRecord, Registration};

/// In-memory [`JobBoardApi`] that records every call.
pub(crate) struct FakeApi {
    register_reply: Result<RegisterResponse, ApiError>,
    job_reply: Result<JobRecord, ApiError>,
    pub registrations: RefCell<Vec<Registration>>,
    pub job_requests: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            register_reply: Ok(RegisterResponse {
                message: "OK".to_string(),
                user: None,
            }),
            job_reply: Err(ApiError::Status {
                status: 404,
                message: None,
            }),
            registrations: RefCell::new(Vec::new()),
            job_requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_register_reply(mut self, reply: Result<RegisterResponse, ApiError>) -> Self {
        self.register_reply = reply;
        self
    }

    pub fn with_job_reply(mut self, reply: Result<JobRecord, ApiError>) -> Self {
        self.job_reply = reply;
        self
    }

    pub fn calls(&self) -> usize {
        self.registrations.borrow().len() + self.job_requests.borrow().len()
    }
}

impl JobBoardApi for FakeApi {
    async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        self.registrations.borrow_mut().push(registration.clone());
        self.register_reply.clone()
    }

    async fn fetch_job(&self, id: &str) -> Result<JobRecord, ApiError> {
        self.job_requests.borrow_mut().push(id.to_string());
        self.job_reply.clone()
    }
}
