//! Client-side destinations the controllers can send the user to.

/// A page the app can navigate to as the result of a controller decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    NotFound,
    /// Application form for a job.
    Application { job_id: String },
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::Home => "/".to_string(),
            Destination::Login => "/login".to_string(),
            Destination::NotFound => "/notfound".to_string(),
            Destination::Application { job_id } => format!("/application/{job_id}"),
        }
    }
}
