//! # API configuration — where the remote job-board service lives
//!
//! The client talks to a single remote service whose root address is the only
//! configurable value. Both endpoints (registration and job lookup) are built
//! from the same [`ApiConfig`], so they always agree on the base URL.
//!
//! ## Resolution order
//!
//! | Source | When it applies |
//! |--------|-----------------|
//! | `JOBZEE_API_URL` at runtime | Native builds; `.env` is loaded first via `dotenvy` |
//! | `JOBZEE_API_URL` at compile time | Browser bundles, where there is no process environment |
//! | [`DEFAULT_BASE_URL`] | Neither of the above is set (or the value is blank) |

/// Environment variable holding the API base URL.
pub const BASE_URL_VAR: &str = "JOBZEE_API_URL";

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

const REGISTER_PATH: &str = "/api/v1/user/register";
const JOB_PATH: &str = "/api/v1/job";

/// Remote API location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a config for an explicit base URL. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the config from the environment.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| {
            #[cfg(not(target_arch = "wasm32"))]
            {
                if let Ok(value) = std::env::var(key) {
                    return Some(value);
                }
            }
            (key == BASE_URL_VAR)
                .then(|| option_env!("JOBZEE_API_URL").map(str::to_string))
                .flatten()
        })
    }

    /// Resolve the config through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BASE_URL_VAR) {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST` target for account registration.
    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url, REGISTER_PATH)
    }

    /// `GET` target for a single job.
    pub fn job_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, JOB_PATH, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config.base_url(), "http://localhost:4000");
        assert_eq!(
            config.register_url(),
            "http://localhost:4000/api/v1/user/register"
        );
        assert_eq!(config.job_url("abc"), "http://localhost:4000/api/v1/job/abc");
    }

    #[test]
    fn test_blank_value_falls_back() {
        let config = ApiConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_lookup_value_used_for_both_endpoints() {
        let config = ApiConfig::from_lookup(|key| {
            (key == BASE_URL_VAR).then(|| "https://jobs.example.com/".to_string())
        });
        assert_eq!(config.base_url(), "https://jobs.example.com");
        assert_eq!(
            config.register_url(),
            "https://jobs.example.com/api/v1/user/register"
        );
        assert_eq!(
            config.job_url("65f0c"),
            "https://jobs.example.com/api/v1/job/65f0c"
        );
    }
}
