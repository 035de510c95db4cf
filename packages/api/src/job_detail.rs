//! # Job detail — lookup, access gate and presentation
//!
//! A detail page goes through at most one transition:
//!
//! ```text
//! NotLoaded ──ok──▶ Loaded(job)
//!     └──────err──▶ Redirected(NotFound)
//! ```
//!
//! The access gate is separate from loading. [`authorization_guard`] is evaluated
//! whenever the session or the route changes, and sends signed-out visitors to the
//! login page regardless of where loading stands.

use tracing::{error, info};

use crate::client::JobBoardApi;
use crate::models::{JobRecord, Role, Salary};
use crate::routes::Destination;
use crate::session::SessionState;

/// State of one detail page.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum JobView {
    #[default]
    NotLoaded,
    Loaded(JobRecord),
    Redirected(Destination),
}

impl JobView {
    /// Presentation of the loaded job for `session`; `None` until loaded.
    pub fn detail(&self, session: &SessionState) -> Option<JobDetail> {
        match self {
            JobView::Loaded(job) => Some(present(job, session)),
            JobView::NotLoaded | JobView::Redirected(_) => None,
        }
    }
}

/// Everything the detail page renders for a loaded job.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetail {
    pub job: JobRecord,
    pub salary: Salary,
    /// Target of the "Apply Now" action; `None` hides it.
    pub apply: Option<Destination>,
}

/// Loads a job and holds it for the page.
pub struct JobDetailController<A> {
    api: A,
    view: JobView,
}

impl<A: JobBoardApi> JobDetailController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: JobView::NotLoaded,
        }
    }

    /// Fetch job `id` once. On failure the page is redirected to not-found and
    /// the returned destination says so; there is no retry.
    pub async fn load(&mut self, id: &str) -> Option<Destination> {
        match self.api.fetch_job(id).await {
            Ok(job) => {
                info!("Loaded job {}", id);
                self.view = JobView::Loaded(job);
                None
            }
            Err(e) => {
                error!("Error fetching job details for {}: {:?}", id, e);
                self.view = JobView::Redirected(Destination::NotFound);
                Some(Destination::NotFound)
            }
        }
    }

    pub fn into_view(self) -> JobView {
        self.view
    }
}

/// Where to send a visitor who may not see job details, if anywhere.
pub fn authorization_guard(session: &SessionState) -> Option<Destination> {
    (!session.is_authorized()).then_some(Destination::Login)
}

/// Employers get no "Apply Now" action.
fn present(job: &JobRecord, session: &SessionState) -> JobDetail {
    let apply = (session.role() != Some(Role::Employer)).then(|| Destination::Application {
        job_id: job.id.clone(),
    });
    JobDetail {
        job: job.clone(),
        salary: job.salary(),
        apply,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::UserInfo;
    use crate::test_support::FakeApi;

    fn engineer() -> JobRecord {
        serde_json::from_value(serde_json::json!({
            "_id": "job42",
            "title": "Engineer",
            "category": "Software",
            "fixedSalary": 5000,
        }))
        .unwrap()
    }

    fn session_as(role: Role) -> SessionState {
        SessionState::authorized(UserInfo {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            phone: "0123456789".into(),
            role,
        })
    }

    #[tokio::test]
    async fn test_load_success_replaces_view() {
        let api = FakeApi::new().with_job_reply(Ok(engineer()));
        let mut controller = JobDetailController::new(&api);

        let redirect = controller.load("job42").await;

        assert_eq!(redirect, None);
        assert_eq!(controller.into_view(), JobView::Loaded(engineer()));
        assert_eq!(*api.job_requests.borrow(), vec!["job42".to_string()]);
    }

    #[tokio::test]
    async fn test_fixed_salary_rendered_alone() {
        let api = FakeApi::new().with_job_reply(Ok(engineer()));
        let mut controller = JobDetailController::new(&api);
        controller.load("job42").await;

        let view = controller.into_view();
        let detail = view.detail(&session_as(Role::JobSeeker)).unwrap();
        assert_eq!(detail.job.title, "Engineer");
        assert_eq!(detail.salary.to_string(), "5000");
    }

    #[tokio::test]
    async fn test_range_salary_rendered() {
        let ranged: JobRecord = serde_json::from_value(serde_json::json!({
            "_id": "job7",
            "salaryFrom": 1000,
            "salaryTo": 2000,
        }))
        .unwrap();
        let api = FakeApi::new().with_job_reply(Ok(ranged));
        let mut controller = JobDetailController::new(&api);
        controller.load("job7").await;

        let detail = controller
            .into_view()
            .detail(&session_as(Role::JobSeeker))
            .unwrap();
        assert_eq!(detail.salary.to_string(), "1000 - 2000");
    }

    #[tokio::test]
    async fn test_failure_redirects_once_without_retry() {
        let api = FakeApi::new().with_job_reply(Err(ApiError::Transport("offline".into())));
        let mut controller = JobDetailController::new(&api);

        let redirect = controller.load("missing").await;

        assert_eq!(redirect, Some(Destination::NotFound));
        assert_eq!(api.calls(), 1);
        let view = controller.into_view();
        assert_eq!(view, JobView::Redirected(Destination::NotFound));
        assert!(view.detail(&session_as(Role::JobSeeker)).is_none());
    }

    #[test]
    fn test_nothing_to_show_before_load() {
        let view = JobView::default();
        assert_eq!(view, JobView::NotLoaded);
        assert!(view.detail(&session_as(Role::JobSeeker)).is_none());
    }

    #[test]
    fn test_detail_follows_session_role() {
        let view = JobView::Loaded(engineer());
        assert!(view.detail(&session_as(Role::JobSeeker)).unwrap().apply.is_some());
        assert_eq!(view.detail(&session_as(Role::Employer)).unwrap().apply, None);
    }

    #[test]
    fn test_employer_gets_no_apply_action() {
        let detail = present(&engineer(), &session_as(Role::Employer));
        assert_eq!(detail.apply, None);

        let mut job = engineer();
        job.title = "Anything at all".into();
        job.fixed_salary = None;
        assert_eq!(present(&job, &session_as(Role::Employer)).apply, None);
    }

    #[test]
    fn test_apply_action_for_everyone_else() {
        let expected = Some(Destination::Application {
            job_id: "job42".into(),
        });
        assert_eq!(present(&engineer(), &session_as(Role::JobSeeker)).apply, expected);

        let no_user = SessionState::authorized_without_user();
        assert_eq!(present(&engineer(), &no_user).apply, expected);
    }

    #[test]
    fn test_guard_sends_signed_out_visitor_to_login() {
        assert_eq!(
            authorization_guard(&SessionState::default()),
            Some(Destination::Login)
        );
        assert_eq!(authorization_guard(&session_as(Role::Employer)), None);
    }
}
