use api::{authorization_guard, JobDetailController, JobView};
use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

const JOB_CSS: Asset = asset!("/assets/job.css");

#[component]
pub fn JobDetails(id: String) -> Element {
    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut view = use_signal(JobView::default);

    // Signed-out visitors go to login; re-checked whenever the session changes
    use_effect(move || {
        if let Some(destination) = authorization_guard(&session()) {
            nav.replace(Route::from(destination));
        }
    });

    let _loader = use_resource(move || {
        let id = id_signal();
        let api = api.clone();
        async move {
            let mut controller = JobDetailController::new(api);
            let redirect = controller.load(&id).await;
            view.set(controller.into_view());
            if let Some(destination) = redirect {
                nav.replace(Route::from(destination));
            }
        }
    });

    let detail = view().detail(&session());

    rsx! {
        document::Stylesheet { href: JOB_CSS }

        section {
            class: "job-detail page",
            div {
                class: "container",
                h3 { "Job Details" }

                if let Some(detail) = detail {
                    div {
                        class: "banner",
                        p { "Title: " span { "{detail.job.title}" } }
                        p { "Category: " span { "{detail.job.category}" } }
                        p { "Country: " span { "{detail.job.country}" } }
                        p { "City: " span { "{detail.job.city}" } }
                        p { "Location: " span { "{detail.job.location}" } }
                        p { "Description: " span { "{detail.job.description}" } }
                        p { "Job Posted On: " span { "{detail.job.job_posted_on}" } }
                        p { "Salary: " span { "{detail.salary}" } }

                        if let Some(destination) = detail.apply.clone() {
                            Link { to: Route::from(destination), "Apply Now" }
                        }
                    }
                } else {
                    p { class: "job-detail__loading", "Loading..." }
                }
            }
        }
    }
}
