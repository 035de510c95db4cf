//! # Remote API client
//!
//! [`JobBoardApi`] is the seam between the controllers and the network: one method
//! per endpoint the client uses. [`HttpApi`] is the real implementation on top of
//! `reqwest`; tests substitute an in-memory implementation.
//!
//! Every request carries credentials. In the browser that means `fetch` runs with
//! `credentials: "include"`; natively the client keeps a cookie jar, so a session
//! cookie set by registration is sent with later lookups.

use std::future::Future;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{JobEnvelope, JobRecord, Registration, UserInfo};

/// Successful registration reply.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterResponse {
    pub message: String,
    /// The created account, when the server echoes it back in a usable shape.
    pub user: Option<UserInfo>,
}

#[derive(Deserialize)]
struct RawRegisterResponse {
    #[serde(default)]
    message: String,
    #[serde(default)]
    user: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Operations the client performs against the job-board service.
pub trait JobBoardApi {
    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<RegisterResponse, ApiError>>;

    fn fetch_job(&self, id: &str) -> impl Future<Output = Result<JobRecord, ApiError>>;
}

impl<T: JobBoardApi + ?Sized> JobBoardApi for &T {
    async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        (**self).register(registration).await
    }

    async fn fetch_job(&self, id: &str) -> Result<JobRecord, ApiError> {
        (**self).fetch_job(id).await
    }
}

/// HTTP implementation of [`JobBoardApi`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ApiConfig,
    http: reqwest::Client,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: build_client(),
        }
    }

    /// Client for the API configured in the environment.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl JobBoardApi for HttpApi {
    async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        let url = self.config.register_url();
        debug!(%url, "POST registration");

        let response = with_credentials(self.http.post(&url).json(registration))
            .send()
            .await?;
        let raw: RawRegisterResponse = read_json(response).await?;

        let user = raw.user.and_then(|value| match serde_json::from_value(value) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Ignoring unreadable user in registration response: {}", e);
                None
            }
        });

        Ok(RegisterResponse {
            message: raw.message,
            user,
        })
    }

    async fn fetch_job(&self, id: &str) -> Result<JobRecord, ApiError> {
        let url = self.config.job_url(id);
        debug!(%url, "GET job");

        let response = with_credentials(self.http.get(&url)).send().await?;
        let envelope: JobEnvelope = read_json(response).await?;
        Ok(envelope.job)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|e| {
            warn!("Falling back to a client without cookie store: {}", e);
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

/// Decode a 2xx body as `T`, or turn anything else into [`ApiError::Status`]
/// carrying the server's `message` when it sent one.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
